//! Purpose: Hold top-level CLI command dispatch for `ownerfmt`.
//! Exports: `dispatch_command`.
//! Role: Keep `main.rs` focused on parse/bootstrap and delegate command execution.
//! Invariants: Id-only commands never touch the user directory.
//! Invariants: Formatting itself always goes through `api::OwnershipFormatter`.

use super::*;

pub(super) fn dispatch_command(
    command: Command,
    config: &DirectoryConfig,
) -> Result<RunOutcome, Error> {
    match command {
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            clap_complete::aot::generate(shell, &mut cmd, "ownerfmt", &mut io::stdout());
            Ok(RunOutcome::ok())
        }
        Command::OwnerId { input } => {
            let description = read_description(&input)?;
            let formatter = OwnershipFormatter::new(UserDirectory::new());
            emit_line(&formatter.owner_id(&description));
            Ok(RunOutcome::ok())
        }
        Command::CoOwnerIds { input } => {
            let description = read_description(&input)?;
            let formatter = OwnershipFormatter::new(UserDirectory::new());
            emit_line(&formatter.co_owner_ids(&description));
            Ok(RunOutcome::ok())
        }
        Command::OwnerEmail { input } => {
            let description = read_description(&input)?;
            let formatter = OwnershipFormatter::new(load_directory(config)?);
            emit_line(&formatter.owner_email(&description));
            Ok(RunOutcome::ok())
        }
        Command::CoOwnerEmails { input } => {
            let description = read_description(&input)?;
            let formatter = OwnershipFormatter::new(load_directory(config)?);
            emit_line(&formatter.co_owner_emails(&description));
            Ok(RunOutcome::ok())
        }
        Command::Summary { input } => {
            let description = read_description(&input)?;
            let formatter = OwnershipFormatter::new(load_directory(config)?);
            emit_json(summary_json(&formatter.summary(&description)))?;
            Ok(RunOutcome::ok())
        }
    }
}
