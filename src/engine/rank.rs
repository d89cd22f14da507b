/// Deterministic ordering of record matches.
use crate::directory::contact::Contact;

use super::fields::RecordMatch;
use super::normalize::normalize;

/// Sort matches into their final, reproducible order.
///
/// Descending by aggregate score, then ties broken by:
/// 1. shorter winning-field length (tighter matches first)
/// 2. lexicographic (normalized last name, first name)
/// 3. ascending contact id
///
/// so any tie depth resolves the same way on every call.
#[must_use]
pub fn rank(matches: Vec<RecordMatch>, records: &[Contact]) -> Vec<RecordMatch> {
    // Decorate with the name sort key once instead of re-normalizing
    // inside the comparator.
    let mut decorated: Vec<(RecordMatch, (String, String))> = matches
        .into_iter()
        .map(|m| {
            let c = &records[m.idx];
            let key = (normalize(&c.last_name), normalize(&c.first_name));
            (m, key)
        })
        .collect();

    decorated.sort_by(|a, b| {
        b.0.score
            .total_cmp(&a.0.score)
            .then_with(|| a.0.field_len.cmp(&b.0.field_len))
            .then_with(|| a.1.cmp(&b.1))
            .then_with(|| a.0.id.cmp(&b.0.id))
    });

    decorated.into_iter().map(|(m, _)| m).collect()
}
