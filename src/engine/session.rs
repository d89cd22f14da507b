/// Incremental search sessions: narrow on append, rewind on edit.
use crate::directory::contact::Contact;

use super::fields::{FieldWeights, RecordMatch, score_record};
use super::normalize::normalize;
use super::rank::rank;

/// Search configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchOptions {
    /// Per-field weight overrides.
    pub weights: FieldWeights,
    /// Minimum aggregate score for a match to count. `None` keeps every
    /// subsequence match (the empty query always bypasses the threshold).
    pub threshold: Option<f64>,
}

/// One step of query history: the normalized query and the record indices
/// that survived it.
#[derive(Debug)]
struct Frame {
    query: String,
    candidates: Vec<usize>,
}

fn base_frame(len: usize) -> Frame {
    Frame {
        query: String::new(),
        candidates: (0..len).collect(),
    }
}

/// Holds the per-keystroke state of one search box.
///
/// Each frame's candidate set is a subset of the frame below it, and the
/// top frame always reflects the current query. Appending to the query
/// narrows within the top frame's candidates (subsequence matching is
/// monotonic: anything matching a longer query matches its prefixes);
/// backspacing rewinds to a retained frame instead of recomputing from the
/// full collection.
///
/// The session borrows the record slice, so a changed collection means a
/// new session. Single-owner, synchronous: `update` is called once per
/// input event and returns before the next.
#[derive(Debug)]
pub struct SearchSession<'a> {
    records: &'a [Contact],
    options: SearchOptions,
    frames: Vec<Frame>,
}

impl<'a> SearchSession<'a> {
    /// Create a session over `records` with a base frame covering all of
    /// them.
    #[must_use]
    pub fn new(records: &'a [Contact], options: SearchOptions) -> Self {
        Self {
            records,
            options,
            frames: vec![base_frame(records.len())],
        }
    }

    /// Stack depth, including the base frame.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Re-filter for a new query and return the ranked matches.
    ///
    /// Pops back to the deepest frame whose query is a prefix of the new
    /// one (the base empty-query frame always qualifies), scores that
    /// frame's candidates against the *full* new query — scores are never
    /// inherited from a previous frame — and pushes a new frame when the
    /// query actually extended.
    pub fn update(&mut self, raw_query: &str) -> Vec<RecordMatch> {
        let query = normalize(raw_query);

        while self.frames.len() > 1
            && self
                .frames
                .last()
                .is_none_or(|top| !query.starts_with(top.query.as_str()))
        {
            self.frames.pop();
        }
        if self.frames.is_empty() {
            self.frames.push(base_frame(self.records.len()));
        }

        let weights = if self.options.weights.any_positive() {
            self.options.weights
        } else {
            // All fields disabled is a configuration error the engine
            // absorbs rather than failing on.
            FieldWeights::default()
        };

        let top = self.frames.len() - 1;
        let matches: Vec<RecordMatch> = self.frames[top]
            .candidates
            .iter()
            .filter_map(|&idx| {
                score_record(
                    &query,
                    idx,
                    &self.records[idx],
                    &weights,
                    self.options.threshold,
                )
            })
            .collect();
        let ranked = rank(matches, self.records);

        if query != self.frames[top].query {
            self.frames.push(Frame {
                query,
                candidates: ranked.iter().map(|m| m.idx).collect(),
            });
        }

        ranked
    }
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

    fn directory() -> Vec<Contact> {
        vec![
            contact(1, "Ann", "Lee"),
            contact(2, "Anna", "Lopez"),
            contact(3, "Ben", "Ng"),
            contact(4, "John", "Smith"),
        ]
    }

    fn ids(matches: &[RecordMatch]) -> Vec<u64> {
        matches.iter().map(|m| m.id).collect()
    }

    #[test]
    fn test_empty_query_returns_all_in_tie_order() {
        let records = directory();
        let mut session = SearchSession::new(&records, SearchOptions::default());
        // All scores 0; order falls through to (last, first, id).
        assert_eq!(ids(&session.update("")), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_appending_narrows() {
        let records = directory();
        let mut session = SearchSession::new(&records, SearchOptions::default());

        let a = ids(&session.update("a"));
        let an = ids(&session.update("an"));
        let ann = ids(&session.update("anna"));

        // Monotonic refinement: each extension's ids are a subset.
        assert!(an.iter().all(|id| a.contains(id)));
        assert!(ann.iter().all(|id| an.contains(id)));
        assert_eq!(ann, vec![2]);
        // One frame pushed per extension, above the base frame.
        assert_eq!(session.depth(), 4);
    }

    #[test]
    fn test_backspace_rewinds_to_retained_frame() {
        let records = directory();
        let mut session = SearchSession::new(&records, SearchOptions::default());

        session.update("a");
        session.update("an");
        let before = ids(&session.update("anna"));
        assert_eq!(session.depth(), 4);

        // Backspace to "an": pops the "anna" frame, reuses the "an" frame.
        let after = ids(&session.update("an"));
        assert_eq!(session.depth(), 3);
        assert!(before.iter().all(|id| after.contains(id)));
    }

    #[test]
    fn test_unrelated_edit_resets_to_base() {
        let records = directory();
        let mut session = SearchSession::new(&records, SearchOptions::default());

        session.update("ann");
        let results = ids(&session.update("ben"));
        assert_eq!(results, vec![3]);
        // Base frame plus the fresh "ben" frame.
        assert_eq!(session.depth(), 2);
    }

    #[test]
    fn test_rewind_then_extend_along_new_branch() {
        let records = directory();
        let mut session = SearchSession::new(&records, SearchOptions::default());

        session.update("jo");
        session.update("john");
        // "jo" frame is a prefix of "jox": rewind one frame, then narrow.
        let results = session.update("jox");
        assert!(results.is_empty());
        assert_eq!(session.depth(), 3);
    }

    #[test]
    fn test_repeated_query_is_idempotent() {
        let records = directory();
        let mut session = SearchSession::new(&records, SearchOptions::default());

        let first = session.update("an");
        let depth = session.depth();
        let second = session.update("an");
        assert_eq!(ids(&first), ids(&second));
        assert_eq!(session.depth(), depth);
    }

    #[test]
    fn test_scores_recomputed_against_full_query() {
        let records = directory();
        let mut session = SearchSession::new(&records, SearchOptions::default());

        let short = session.update("b");
        let long = session.update("ben");
        // Longer run on the same record scores strictly higher.
        assert!(long[0].score > short[0].score);
    }

    #[test]
    fn test_all_zero_weights_fall_back_to_defaults() {
        let records = directory();
        let mut weights = FieldWeights::default();
        for field in crate::directory::contact::ContactField::ALL {
            weights.set(field, 0.0);
        }
        let mut session = SearchSession::new(
            &records,
            SearchOptions {
                weights,
                threshold: None,
            },
        );
        assert_eq!(ids(&session.update("ben")), vec![3]);
    }
}
