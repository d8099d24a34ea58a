use super::form;
use crate::{
    db::tasks::Tasks,
    libs::{messages::Message, transfer::import_csv},
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// CSV file to read tasks from
    path: PathBuf,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(args: ImportArgs) -> Result<()> {
    let mut tasks = Tasks::new()?;
    import(&mut tasks, &args.path, args.yes)
}

/// Appends the tasks in `path` to the collection. Imported tasks are always
/// active and are placed after the existing ones.
pub fn import(tasks: &mut Tasks, path: &Path, yes: bool) -> Result<()> {
    if !yes && !form::confirm(Message::ConfirmImport(path.display().to_string()))? {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }
    let summary = import_csv(tasks, path)?;
    msg_success!(Message::ImportCompleted {
        imported: summary.imported,
        skipped: summary.skipped,
    });
    Ok(())
}
