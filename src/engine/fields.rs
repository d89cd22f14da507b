/// Per-field weighting and record-level score aggregation.
use crate::directory::contact::{Contact, ContactField};

use super::matcher;
use super::normalize::normalize;

/// Weight applied to each searchable field's raw match score.
///
/// Invariant: at least one field must carry a positive weight; callers that
/// zero out every field are handled by falling back to the defaults (the
/// engine never fails on bad configuration). A weight of 0 disables the
/// field entirely.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldWeights {
    pub first_name: f64,
    pub last_name: f64,
    pub email: f64,
    pub phone: f64,
    pub notes: f64,
}

impl Default for FieldWeights {
    /// Names dominate; notes are the weakest signal.
    fn default() -> Self {
        Self {
            first_name: 1.0,
            last_name: 1.0,
            email: 0.6,
            phone: 0.5,
            notes: 0.25,
        }
    }
}

impl FieldWeights {
    /// Weight for one field.
    #[must_use]
    pub fn get(&self, field: ContactField) -> f64 {
        match field {
            ContactField::FirstName => self.first_name,
            ContactField::LastName => self.last_name,
            ContactField::Email => self.email,
            ContactField::Phone => self.phone,
            ContactField::Notes => self.notes,
        }
    }

    /// Override the weight for one field.
    pub fn set(&mut self, field: ContactField, weight: f64) {
        match field {
            ContactField::FirstName => self.first_name = weight,
            ContactField::LastName => self.last_name = weight,
            ContactField::Email => self.email = weight,
            ContactField::Phone => self.phone = weight,
            ContactField::Notes => self.notes = weight,
        }
    }

    /// Whether any field can contribute to a match.
    #[must_use]
    pub fn any_positive(&self) -> bool {
        ContactField::ALL.iter().any(|f| self.get(*f) > 0.0)
    }
}

/// A record-level match: one contact that passed the threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordMatch {
    /// The matched contact's id.
    pub id: u64,
    /// Index into the searched record slice.
    pub idx: usize,
    /// Aggregate score (weighted maximum across fields; higher = better).
    pub score: f64,
    /// The field whose weighted score won.
    pub field: ContactField,
    /// Length (in chars) of the winning field's normalized text.
    /// 0 for the empty query, so empty-query ties fall through to names.
    pub field_len: usize,
    /// Matched char positions within the winning field's normalized text.
    pub positions: Vec<usize>,
}

/// Score one contact against a normalized query.
///
/// Runs the matcher independently over every field with a positive weight;
/// the aggregate is the *maximum* of `weight × raw score` — a decisive
/// single-field match outranks coincidental partial matches spread across
/// fields, which a weighted sum would reward.
///
/// Returns `None` when no field matches, or when the aggregate falls below
/// `threshold`. The empty query bypasses the threshold: it matches every
/// record at score 0 by policy.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn score_record(
    query: &str,
    idx: usize,
    contact: &Contact,
    weights: &FieldWeights,
    threshold: Option<f64>,
) -> Option<RecordMatch> {
    if query.is_empty() {
        return Some(RecordMatch {
            id: contact.id,
            idx,
            score: 0.0,
            field: ContactField::FirstName,
            field_len: 0,
            positions: Vec::new(),
        });
    }

    let mut best: Option<RecordMatch> = None;
    for &field in &ContactField::ALL {
        let weight = weights.get(field);
        if weight <= 0.0 {
            continue;
        }
        let text = normalize(contact.field(field));
        let Some(m) = matcher::score(query, &text) else {
            continue;
        };
        let weighted = weight * m.score as f64;
        // Fixed field order breaks exact ties deterministically.
        if best.as_ref().is_none_or(|b| weighted > b.score) {
            best = Some(RecordMatch {
                id: contact.id,
                idx,
                score: weighted,
                field,
                field_len: text.chars().count(),
                positions: m.positions,
            });
        }
    }

    match (best, threshold) {
        (Some(m), Some(t)) if m.score < t => None,
        (result, _) => result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(id: u64, first: &str, last: &str, email: &str, notes: &str) -> Contact {
        Contact {
            id,
            first_name: first.to_owned(),
            last_name: last.to_owned(),
            email: email.to_owned(),
            phone: String::new(),
            notes: notes.to_owned(),
            created: None,
        }
    }

    #[test]
    fn test_no_field_matches_is_absent() {
        let c = contact(1, "Ben", "Ng", "", "");
        assert!(score_record("xyz", 0, &c, &FieldWeights::default(), None).is_none());
    }

    #[test]
    fn test_winning_field_recorded() {
        let c = contact(1, "Ann", "Lee", "ann@example.com", "");
        let m = score_record("lee", 0, &c, &FieldWeights::default(), None).unwrap();
        assert_eq!(m.field, ContactField::LastName);
        assert_eq!(m.field_len, 3);
        assert_eq!(m.positions, vec![0, 1, 2]);
    }

    #[test]
    fn test_weighted_max_prefers_decisive_name_match() {
        // "lee" matches last_name exactly and notes diffusely; the
        // weighted maximum must pick the name.
        let c = contact(1, "Ann", "Lee", "", "likes espresso, early riser");
        let m = score_record("lee", 0, &c, &FieldWeights::default(), None).unwrap();
        assert_eq!(m.field, ContactField::LastName);
    }

    #[test]
    fn test_zero_weight_disables_field() {
        let c = contact(1, "Ann", "Lee", "", "ben");
        let mut weights = FieldWeights::default();
        weights.set(ContactField::Notes, 0.0);
        assert!(score_record("ben", 0, &c, &weights, None).is_none());
        // Re-enabled, the notes field matches again.
        weights.set(ContactField::Notes, 0.25);
        assert!(score_record("ben", 0, &c, &weights, None).is_some());
    }

    #[test]
    fn test_threshold_filters_weak_matches() {
        let c = contact(1, "Ben", "Ng", "", "");
        let strong = score_record("ben", 0, &c, &FieldWeights::default(), None).unwrap();
        assert!(
            score_record("ben", 0, &c, &FieldWeights::default(), Some(strong.score + 1.0))
                .is_none()
        );
        assert!(
            score_record("ben", 0, &c, &FieldWeights::default(), Some(strong.score)).is_some()
        );
    }

    #[test]
    fn test_empty_query_matches_despite_threshold() {
        let c = contact(1, "Ben", "Ng", "", "");
        let m = score_record("", 0, &c, &FieldWeights::default(), Some(100.0)).unwrap();
        assert_eq!(m.score, 0.0);
        assert_eq!(m.field_len, 0);
        assert!(m.positions.is_empty());
    }

    #[test]
    fn test_missing_fields_contribute_nothing() {
        let c = contact(1, "", "", "", "");
        assert!(score_record("a", 0, &c, &FieldWeights::default(), None).is_none());
    }
}
