//! Data models
//!
//! Client-side copies of the backend entities. The backend owns every record;
//! these shapes are transient and every field except the relationships is
//! optional, because a form may submit a partially filled record.
//! All IDs are `i64` and are assigned by the backend on create.

pub mod department;
pub mod employee;
pub mod job;

// Re-exports
pub use department::*;
pub use employee::*;
pub use job::*;

/// An entity that may carry a backend-assigned identifier.
///
/// `None` means the record has not been persisted yet.
pub trait Identifiable {
    fn identifier(&self) -> Option<i64>;
}

/// Merge candidates into a collection, skipping duplicates by identifier.
///
/// Returns a new collection: every candidate with a non-null identifier that
/// is not already present is prepended (in candidate order), followed by the
/// original collection untouched. The first occurrence of an identifier wins,
/// so repeated candidates are only added once. Candidates without an
/// identifier are ignored.
pub fn add_to_collection_if_missing<'a, T, I>(collection: &[T], candidates: I) -> Vec<T>
where
    T: Identifiable + Clone + 'a,
    I: IntoIterator<Item = Option<&'a T>>,
{
    let mut seen: Vec<i64> = collection.iter().filter_map(Identifiable::identifier).collect();

    let mut merged: Vec<T> = candidates
        .into_iter()
        .flatten()
        .filter(|candidate| match candidate.identifier() {
            Some(id) if !seen.contains(&id) => {
                seen.push(id);
                true
            }
            _ => false,
        })
        .cloned()
        .collect();

    if merged.is_empty() {
        return collection.to_vec();
    }

    merged.extend_from_slice(collection);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dept(id: i64, name: &str) -> Department {
        Department::new(id, name)
    }

    #[test]
    fn test_merge_keeps_existing_entry_once() {
        let collection = vec![dept(1, "Sales")];
        let selected = dept(1, "Sales");

        let merged = add_to_collection_if_missing(&collection, [Some(&selected)]);

        assert_eq!(merged, vec![dept(1, "Sales")]);
    }

    #[test]
    fn test_merge_prepends_missing_entry() {
        let collection = vec![dept(2, "Eng")];
        let selected = dept(1, "Sales");

        let merged = add_to_collection_if_missing(&collection, [Some(&selected)]);

        assert_eq!(merged, vec![dept(1, "Sales"), dept(2, "Eng")]);
    }

    #[test]
    fn test_merge_skips_candidates_without_identifier() {
        let collection = vec![dept(2, "Eng")];
        let unsaved = Department {
            id: None,
            department_name: Some("Draft".into()),
        };

        let merged = add_to_collection_if_missing(&collection, [Some(&unsaved), None]);

        assert_eq!(merged, collection);
    }

    #[test]
    fn test_merge_dedups_candidates_first_seen_wins() {
        let collection: Vec<Department> = Vec::new();
        let first = dept(3, "Ops");
        let second = dept(3, "Operations");
        let other = dept(4, "Legal");

        let merged =
            add_to_collection_if_missing(&collection, [Some(&first), Some(&second), Some(&other)]);

        assert_eq!(merged, vec![dept(3, "Ops"), dept(4, "Legal")]);
    }

    #[test]
    fn test_merge_is_idempotent_on_identifiers() {
        let collection = vec![dept(2, "Eng"), dept(5, "HR")];
        let candidates = [dept(1, "Sales"), dept(5, "HR"), dept(7, "Support")];

        let once = add_to_collection_if_missing(&collection, candidates.iter().map(Some));
        let twice = add_to_collection_if_missing(&once, candidates.iter().map(Some));

        let ids = |items: &[Department]| {
            let mut ids: Vec<i64> = items.iter().filter_map(Identifiable::identifier).collect();
            ids.sort_unstable();
            ids
        };
        assert_eq!(ids(&once), vec![1, 2, 5, 7]);
        assert_eq!(ids(&once), ids(&twice));
        assert_eq!(once.len(), twice.len());
    }
}
