/// `show` command: print a single contact by id.
use crate::cli::OutputCtx;
use crate::cli::args::ShowArgs;
use crate::cli::output::write_contact;
use crate::directory::{DirectoryError, load_contacts};
use crate::types::ContactOutput;

/// Run `contactcli show`.
///
/// # Errors
///
/// Returns `DirectoryError` on an unreadable contacts file or an unknown
/// contact id.
pub fn run(args: &ShowArgs, ctx: &OutputCtx) -> Result<(), DirectoryError> {
    let _t_load = ctx.timer("load_contacts");
    let contacts = load_contacts(&args.file)?;
    drop(_t_load);

    let contact = contacts
        .iter()
        .find(|c| c.id == args.id)
        .ok_or(DirectoryError::ContactNotFound { id: args.id })?;

    write_contact(&ContactOutput::from(contact), ctx);
    Ok(())
}
