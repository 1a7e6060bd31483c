//! Pure collection mutations shared by stores and reducers.
//!
//! Nothing here performs I/O or notifies anyone; callers decide what to do
//! after the collection changed.

use crate::model::Record;

/// One collection change derived from an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation<T: Record> {
    Append(T),
    ReplaceAll(Vec<T>),
    /// Substitute the record with the same id, keeping order.
    ReplaceById(T),
    RemoveById(T::Id),
    /// Replace when the id exists, append otherwise.
    Upsert(T),
}

/// Applies `mutation` to `records` in place.
///
/// Replace-by-id never changes size or order; remove-by-id is a no-op for
/// absent ids.
pub fn apply_mutation<T: Record>(records: &mut Vec<T>, mutation: Mutation<T>) {
    match mutation {
        Mutation::Append(record) => records.push(record),
        Mutation::ReplaceAll(replacement) => *records = replacement,
        Mutation::ReplaceById(record) => replace_by_id(records, record),
        Mutation::RemoveById(id) => records.retain(|existing| existing.id() != id),
        Mutation::Upsert(record) => {
            if records.iter().any(|existing| existing.id() == record.id()) {
                replace_by_id(records, record);
            } else {
                records.push(record);
            }
        }
    }
}

fn replace_by_id<T: Record>(records: &mut [T], record: T) {
    let id = record.id();
    if let Some(slot) = records.iter_mut().find(|existing| existing.id() == id) {
        *slot = record;
    }
}

#[cfg(test)]
mod tests {
    use super::{apply_mutation, Mutation};
    use crate::model::author::Author;

    fn names(records: &[Author]) -> Vec<&str> {
        records.iter().map(|author| author.name.as_str()).collect()
    }

    #[test]
    fn replace_by_id_keeps_order_and_size() {
        let mut records = vec![
            Author::new(1, "Cory"),
            Author::new(2, "Scott"),
            Author::new(3, "Dan"),
        ];
        apply_mutation(&mut records, Mutation::ReplaceById(Author::new(2, "Scott A.")));
        assert_eq!(names(&records), vec!["Cory", "Scott A.", "Dan"]);

        apply_mutation(&mut records, Mutation::ReplaceById(Author::new(42, "Ghost")));
        assert_eq!(records.len(), 3);
        assert_eq!(names(&records), vec!["Cory", "Scott A.", "Dan"]);
    }

    #[test]
    fn remove_by_id_drops_exactly_one_or_nothing() {
        let mut records = vec![Author::new(1, "Cory"), Author::new(2, "Scott")];
        apply_mutation(&mut records, Mutation::RemoveById(crate::AuthorId(5)));
        assert_eq!(records.len(), 2);
        apply_mutation(&mut records, Mutation::RemoveById(crate::AuthorId(1)));
        assert_eq!(names(&records), vec!["Scott"]);
    }

    #[test]
    fn upsert_appends_unknown_and_replaces_known() {
        let mut records = vec![Author::new(1, "Cory")];
        apply_mutation(&mut records, Mutation::Upsert(Author::new(2, "Scott")));
        apply_mutation(&mut records, Mutation::Upsert(Author::new(1, "Cory House")));
        assert_eq!(names(&records), vec!["Cory House", "Scott"]);
    }

    #[test]
    fn replace_all_swaps_collection() {
        let mut records = vec![Author::new(1, "Cory")];
        apply_mutation(&mut records, Mutation::ReplaceAll(Vec::new()));
        assert!(records.is_empty());
    }
}
