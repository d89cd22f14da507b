/// Fuzzy subsequence scoring over normalized text.
///
/// A query matches a candidate iff every query character appears in the
/// candidate, in order, as a (not necessarily contiguous) subsequence.
/// Among all valid subsequences the scorer picks the best-scoring alignment
/// via dynamic programming, rewarding:
/// - consecutive runs (bonus grows with run length)
/// - matches at the candidate start or just after a word boundary
/// and penalizing gaps between matched characters proportionally to the
/// gap size, plus a small penalty for a late first match.
///
/// Inputs are expected to be pre-normalized (see [`super::normalize`]);
/// characters are compared as-is.
const NEG_INF: i64 = i64::MIN / 4;

// Scoring parameters (tuned for person-name-scale candidates).
const SCORE_MATCH: i64 = 16;
const BONUS_START: i64 = 24;
const BONUS_BOUNDARY: i64 = 16;
const BONUS_RUN: i64 = 8;
const PENALTY_GAP: i64 = 2;
const PENALTY_LEADING: i64 = 1;

/// Longest input (in chars) the scorer looks at; anything beyond is
/// silently truncated. Contact fields are short, so the cap only guards
/// against pathological input.
pub const MAX_TEXT_LEN: usize = 1024;

/// A successful fuzzy match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    /// Raw match score (higher = better).
    pub score: i64,
    /// Char indices of the matched candidate characters, ascending.
    /// Empty for the empty query.
    pub positions: Vec<usize>,
}

/// Bonus for matching the candidate character at `j`: candidate start
/// beats a word boundary (after space/punctuation) beats mid-word.
fn boundary_bonus(candidate: &[char], j: usize) -> i64 {
    if j == 0 {
        return BONUS_START;
    }
    if candidate[j - 1].is_alphanumeric() {
        0
    } else {
        BONUS_BOUNDARY
    }
}

/// Score `query` against `candidate`; both must already be normalized.
///
/// Returns `None` when the query is not a subsequence of the candidate.
/// The empty query matches everything with a score of 0 and no positions;
/// that policy keeps empty-query results total and deterministic.
///
/// Runs in O(|query| × |candidate|) time. Only two DP score rows are kept;
/// matched positions are reconstructed from a compact parent table.
#[must_use]
#[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
pub fn score(query: &str, candidate: &str) -> Option<Match> {
    if query.is_empty() {
        return Some(Match {
            score: 0,
            positions: Vec::new(),
        });
    }

    let q: Vec<char> = query.chars().take(MAX_TEXT_LEN).collect();
    let c: Vec<char> = candidate.chars().take(MAX_TEXT_LEN).collect();
    if q.len() > c.len() {
        return None;
    }

    let n = c.len();
    let bonus: Vec<i64> = (0..n).map(|j| boundary_bonus(&c, j)).collect();

    // prev[j] / curr[j]: best score with query[..=i] matched and query[i]
    // aligned to candidate[j]; *_run[j] is the consecutive-run length
    // ending there (feeds the growing run bonus).
    let mut prev = vec![NEG_INF; n];
    let mut curr = vec![NEG_INF; n];
    let mut prev_run = vec![0u32; n];
    let mut curr_run = vec![0u32; n];
    // parent[i * n + j]: candidate index query[i - 1] was aligned to, or -1.
    let mut parent = vec![-1i32; q.len() * n];

    for j in 0..n {
        if c[j] == q[0] {
            prev[j] = SCORE_MATCH + bonus[j] - PENALTY_LEADING * (j as i64);
            prev_run[j] = 1;
        }
    }

    for i in 1..q.len() {
        curr.fill(NEG_INF);
        curr_run.fill(0);

        // Running max of prev[k] + PENALTY_GAP * (k + 1) over k < j, so a
        // gap transition to j costs PENALTY_GAP per skipped character.
        let mut best_prefix = NEG_INF;
        let mut best_prefix_at = -1i32;

        for j in 0..n {
            if j > 0 && prev[j - 1] != NEG_INF {
                let v = prev[j - 1] + PENALTY_GAP * (j as i64);
                if v > best_prefix {
                    best_prefix = v;
                    best_prefix_at = (j - 1) as i32;
                }
            }

            if c[j] != q[i] {
                continue;
            }

            let mut best = NEG_INF;
            let mut best_parent = -1i32;
            let mut run = 1u32;

            // Gap transition from any earlier match (run resets).
            if best_prefix != NEG_INF {
                best = best_prefix - PENALTY_GAP * (j as i64);
                best_parent = best_prefix_at;
            }

            // Consecutive transition from j-1; the bonus grows with the
            // run length, so ties go to the longer run.
            if j > 0 && prev[j - 1] != NEG_INF {
                let consecutive = prev[j - 1] + BONUS_RUN * i64::from(prev_run[j - 1] + 1);
                if consecutive >= best {
                    best = consecutive;
                    best_parent = (j - 1) as i32;
                    run = prev_run[j - 1] + 1;
                }
            }

            if best != NEG_INF {
                curr[j] = SCORE_MATCH + bonus[j] + best;
                curr_run[j] = run;
                parent[i * n + j] = best_parent;
            }
        }

        std::mem::swap(&mut prev, &mut curr);
        std::mem::swap(&mut prev_run, &mut curr_run);
    }

    let mut best = NEG_INF;
    let mut end = 0usize;
    for (j, &s) in prev.iter().enumerate() {
        if s > best {
            best = s;
            end = j;
        }
    }
    if best == NEG_INF {
        return None;
    }

    // Walk the parent table back from the best final alignment.
    let mut positions = vec![0usize; q.len()];
    let mut j = end;
    for i in (0..q.len()).rev() {
        positions[i] = j;
        if i > 0 {
            j = parent[i * n + j] as usize;
        }
    }

    Some(Match {
        score: best,
        positions,
    })
}
