/// Canonical text form used for all comparisons.
///
/// Every string that enters the matcher — queries and contact fields alike —
/// goes through [`normalize`] first, so matching is case- and
/// diacritic-insensitive and never depends on incidental whitespace.
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Normalize text for matching.
///
/// Performs, in one pass over the NFD decomposition:
/// - combining diacritical marks stripped ("Jöhn" compares equal to "john")
/// - lower-case conversion
/// - leading/trailing whitespace trimmed
/// - internal whitespace runs collapsed to a single space
///
/// Pure and total: never fails, empty input yields an empty string.
#[must_use]
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;
    for c in text.nfd().filter(|c| !is_combining_mark(*c)) {
        if c.is_whitespace() {
            // Only emit a separator once a non-space char follows (trims).
            pending_space = !out.is_empty();
            continue;
        }
        if pending_space {
            out.push(' ');
            pending_space = false;
        }
        out.extend(c.to_lowercase());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases() {
        assert_eq!(normalize("JOHN Smith"), "john smith");
    }

    #[test]
    fn test_trims_and_collapses_whitespace() {
        assert_eq!(normalize("  Ann\t  Lee \n"), "ann lee");
    }

    #[test]
    fn test_strips_diacritics() {
        assert_eq!(normalize("Jöhn"), "john");
        assert_eq!(normalize("Société Générale"), "societe generale");
        assert_eq!(normalize("Ñandú"), "nandu");
    }

    #[test]
    fn test_accented_and_plain_compare_equal() {
        assert_eq!(normalize("José"), normalize("jose"));
    }

    #[test]
    fn test_empty_and_blank() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }
}
