/// `search` command: fuzzy-search contacts, search-as-you-type style.
use crate::cli::OutputCtx;
use crate::cli::args::SearchArgs;
use crate::cli::output::write_search_results;
use crate::directory::{ContactField, DirectoryError, load_contacts};
use crate::engine::{FieldWeights, RecordMatch, SearchOptions, SearchSession};
use crate::types::SearchResultOutput;

/// Run `contactcli search`.
///
/// Multiple query arguments are replayed through a single session as
/// successive keystrokes, so `search j jo john` exercises the incremental
/// narrowing path; output is the result of the final query.
///
/// # Errors
///
/// Returns `DirectoryError` on an unreadable contacts file or malformed
/// `--weight` overrides.
pub fn run(args: &SearchArgs, ctx: &OutputCtx) -> Result<(), DirectoryError> {
    let weights = parse_weight_overrides(&args.weights)?;

    let _t_load = ctx.timer("load_contacts");
    let contacts = load_contacts(&args.file)?;
    drop(_t_load);

    let options = SearchOptions {
        weights,
        threshold: args.threshold,
    };

    let _t_search = ctx.timer("search");
    let mut session = SearchSession::new(&contacts, options);
    let mut results: Vec<RecordMatch> = Vec::new();
    for query in &args.queries {
        results = session.update(query);
    }
    drop(_t_search);

    results.truncate(args.limit);

    let output: Vec<SearchResultOutput> = results
        .iter()
        .map(|m| {
            let c = &contacts[m.idx];
            SearchResultOutput {
                id: m.id,
                name: c.display_name(),
                email: c.email.clone(),
                score: m.score,
                field: m.field.as_str().to_owned(),
                positions: m.positions.clone(),
            }
        })
        .collect();

    write_search_results(&output, ctx);
    Ok(())
}

/// Apply `FIELD=NUMBER` overrides on top of the default weight table.
fn parse_weight_overrides(specs: &[String]) -> Result<FieldWeights, DirectoryError> {
    let mut weights = FieldWeights::default();
    for spec in specs {
        let Some((name, value)) = spec.split_once('=') else {
            return Err(DirectoryError::InvalidWeight { spec: spec.clone() });
        };
        let field =
            ContactField::parse(name.trim()).ok_or_else(|| DirectoryError::UnknownField {
                name: name.trim().to_owned(),
            })?;
        let value: f64 = value
            .trim()
            .parse()
            .map_err(|_| DirectoryError::InvalidWeight { spec: spec.clone() })?;
        weights.set(field, value);
    }
    Ok(weights)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_weight_overrides() {
        let weights =
            parse_weight_overrides(&["notes=1.5".to_owned(), "phone=0".to_owned()]).unwrap();
        assert_eq!(weights.notes, 1.5);
        assert_eq!(weights.phone, 0.0);
        // Untouched fields keep their defaults.
        assert_eq!(weights.first_name, FieldWeights::default().first_name);
    }

    #[test]
    fn test_parse_weight_rejects_malformed() {
        assert!(matches!(
            parse_weight_overrides(&["notes".to_owned()]),
            Err(DirectoryError::InvalidWeight { .. })
        ));
        assert!(matches!(
            parse_weight_overrides(&["notes=abc".to_owned()]),
            Err(DirectoryError::InvalidWeight { .. })
        ));
        assert!(matches!(
            parse_weight_overrides(&["address=1.0".to_owned()]),
            Err(DirectoryError::UnknownField { .. })
        ));
    }
}
