/// Command dispatch: routes `Command` enum variants to their implementations.
pub mod list;
pub mod search;
pub mod show;

use crate::cli::OutputCtx;
use crate::cli::args::Command;
use crate::directory::DirectoryError;

/// Dispatch a parsed `Command` to its handler.
///
/// # Errors
///
/// Returns `DirectoryError` on any command failure.
pub fn dispatch(command: &Command, ctx: &OutputCtx) -> Result<(), DirectoryError> {
    match command {
        Command::List(args) => list::run(args, ctx),
        Command::Search(args) => search::run(args, ctx),
        Command::Show(args) => show::run(args, ctx),
    }
}
