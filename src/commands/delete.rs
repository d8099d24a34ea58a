use super::form;
use crate::{db::tasks::Tasks, libs::messages::Message, msg_bail_anyhow, msg_info, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// IDs of the tasks to delete
    #[arg(required = true)]
    ids: Vec<i64>,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(args: DeleteArgs) -> Result<()> {
    let mut tasks = Tasks::new()?;
    delete(&mut tasks, &args.ids, args.yes)
}

pub fn delete(tasks: &mut Tasks, ids: &[i64], yes: bool) -> Result<()> {
    if ids.is_empty() {
        msg_bail_anyhow!(Message::NoTaskIdsProvided);
    }
    if !yes && !form::confirm(Message::ConfirmDeleteTasks(ids.len()))? {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }
    let deleted = tasks.delete_many(ids)?;
    msg_success!(Message::TasksDeleted(deleted));
    Ok(())
}
