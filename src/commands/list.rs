/// `list` command: list all contacts in the directory.
use crate::cli::OutputCtx;
use crate::cli::args::ListArgs;
use crate::cli::output::write_contacts;
use crate::directory::{ContactField, DirectoryError, load_contacts};
use crate::engine::normalize;
use crate::types::ContactOutput;

/// Run `contactcli list`.
///
/// Contacts are ordered by the `--sort` field (last name by default),
/// case- and accent-insensitively, with id as the final tie-break.
///
/// # Errors
///
/// Returns `DirectoryError` on an unreadable contacts file or an unknown
/// sort field.
pub fn run(args: &ListArgs, ctx: &OutputCtx) -> Result<(), DirectoryError> {
    let sort_field =
        ContactField::parse(&args.sort).ok_or_else(|| DirectoryError::UnknownField {
            name: args.sort.clone(),
        })?;

    let _t_load = ctx.timer("load_contacts");
    let mut contacts = load_contacts(&args.file)?;
    drop(_t_load);

    contacts.sort_by_cached_key(|c| (normalize(c.field(sort_field)), c.id));

    let output: Vec<ContactOutput> = contacts.iter().map(ContactOutput::from).collect();
    write_contacts(&output, ctx);
    Ok(())
}
