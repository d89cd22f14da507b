/// Search domain layer: normalization, fuzzy scoring, field aggregation,
/// ranking, and incremental sessions.
pub mod fields;
pub mod matcher;
pub mod normalize;
pub mod rank;
pub mod session;

pub use fields::{FieldWeights, RecordMatch};
pub use normalize::normalize;
pub use session::{SearchOptions, SearchSession};

use crate::directory::contact::Contact;

/// One-shot search: filter and rank `records` against `query`.
///
/// Equivalent to a fresh [`SearchSession`] receiving a single keystroke.
/// The empty query returns every record (score 0) in the deterministic tie
/// order; a query with no matches returns an empty list.
#[must_use]
pub fn search(query: &str, records: &[Contact], options: SearchOptions) -> Vec<RecordMatch> {
    SearchSession::new(records, options).update(query)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(id: u64, first: &str, last: &str) -> Contact {
        Contact {
            id,
            first_name: first.to_owned(),
            last_name: last.to_owned(),
            email: String::new(),
            phone: String::new(),
            notes: String::new(),
            created: None,
        }
    }

    fn ids(matches: &[RecordMatch]) -> Vec<u64> {
        matches.iter().map(|m| m.id).collect()
    }

    #[test]
    fn test_an_ranks_lee_before_lopez_and_drops_ng() {
        let records = vec![
            contact(1, "Ann", "Lee"),
            contact(2, "Anna", "Lopez"),
            contact(3, "Ben", "Ng"),
        ];
        // Equal-tightness first-name matches; the name tie-break orders
        // "lee" before "lopez", and "an" never matches Ben Ng.
        let results = search("an", &records, SearchOptions::default());
        assert_eq!(ids(&results), vec![1, 2]);
    }

    #[test]
    fn test_subsequence_soundness() {
        let records = vec![contact(3, "Ben", "Ng")];
        let results = search("bn", &records, SearchOptions::default());
        assert_eq!(ids(&results), vec![3]);
        assert!(search("nb", &records, SearchOptions::default()).is_empty());
    }

    #[test]
    fn test_exact_run_outscores_gapped() {
        let records = vec![contact(3, "Ben", "Ng")];
        let gapped = search("bn", &records, SearchOptions::default());
        let exact = search("ben", &records, SearchOptions::default());
        assert!(exact[0].score > gapped[0].score);
    }

    #[test]
    fn test_case_and_diacritic_insensitive() {
        let records = vec![contact(1, "John", "Smith")];
        let plain = search("john", &records, SearchOptions::default());
        let upper = search("JOHN", &records, SearchOptions::default());
        let accented = search("Jöhn", &records, SearchOptions::default());
        assert_eq!(ids(&plain), vec![1]);
        assert_eq!(ids(&plain), ids(&upper));
        assert_eq!(ids(&plain), ids(&accented));
        assert_eq!(plain[0].score, upper[0].score);
        assert_eq!(plain[0].score, accented[0].score);
    }

    #[test]
    fn test_no_match_returns_empty() {
        let records = vec![contact(1, "Ann", "Lee")];
        assert!(search("zzz", &records, SearchOptions::default()).is_empty());
    }

    #[test]
    fn test_empty_collection() {
        assert!(search("ann", &[], SearchOptions::default()).is_empty());
        assert!(search("", &[], SearchOptions::default()).is_empty());
    }

    #[test]
    fn test_deterministic_across_calls() {
        let records = vec![
            contact(1, "Ann", "Lee"),
            contact(2, "Anna", "Lopez"),
            contact(3, "Ben", "Ng"),
        ];
        let a = search("n", &records, SearchOptions::default());
        let b = search("n", &records, SearchOptions::default());
        assert_eq!(a, b);
    }

    #[test]
    fn test_rerunning_over_filtered_set_changes_nothing() {
        let records = vec![
            contact(1, "Ann", "Lee"),
            contact(2, "Anna", "Lopez"),
            contact(3, "Ben", "Ng"),
        ];
        let once = search("an", &records, SearchOptions::default());
        let filtered: Vec<Contact> = once.iter().map(|m| records[m.idx].clone()).collect();
        let twice = search("an", &filtered, SearchOptions::default());
        assert_eq!(ids(&once), ids(&twice));
        let scores_once: Vec<f64> = once.iter().map(|m| m.score).collect();
        let scores_twice: Vec<f64> = twice.iter().map(|m| m.score).collect();
        assert_eq!(scores_once, scores_twice);
    }
}
