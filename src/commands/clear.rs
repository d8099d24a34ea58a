use super::form;
use crate::{db::tasks::Tasks, libs::messages::Message, msg_info, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ClearArgs {
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(args: ClearArgs) -> Result<()> {
    let mut tasks = Tasks::new()?;
    clear_done(&mut tasks, args.yes)
}

/// Removes every completed task after confirmation.
pub fn clear_done(tasks: &mut Tasks, yes: bool) -> Result<()> {
    let done = tasks.stats()?.done;
    if done == 0 {
        msg_info!(Message::NoDoneTasks);
        return Ok(());
    }
    if !yes && !form::confirm(Message::ConfirmClearDone(done as usize))? {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }
    let removed = tasks.bulk_delete_done()?;
    msg_success!(Message::DoneTasksCleared(removed));
    Ok(())
}
