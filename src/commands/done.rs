use crate::{db::tasks::Tasks, libs::messages::Message, msg_bail_anyhow, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DoneArgs {
    /// IDs of the tasks to mark
    #[arg(required = true)]
    ids: Vec<i64>,

    /// Mark the tasks as active again
    #[arg(long)]
    undo: bool,
}

#[derive(Debug, Args)]
pub struct ToggleArgs {
    /// IDs of the tasks to flip; all follow the first one
    #[arg(required = true)]
    ids: Vec<i64>,
}

pub fn cmd(args: DoneArgs) -> Result<()> {
    let mut tasks = Tasks::new()?;
    mark(&mut tasks, &args.ids, !args.undo)?;
    Ok(())
}

pub fn toggle_cmd(args: ToggleArgs) -> Result<()> {
    let mut tasks = Tasks::new()?;
    toggle(&mut tasks, &args.ids)?;
    Ok(())
}

/// Inverts the completion flag of the first task and applies the result to
/// every selected task, so a mixed selection ends up uniform.
pub fn toggle(tasks: &mut Tasks, ids: &[i64]) -> Result<usize> {
    let Some(&first) = ids.first() else {
        msg_bail_anyhow!(Message::NoTaskIdsProvided);
    };
    match tasks.get(first)? {
        Some(task) => mark(tasks, ids, !task.is_done),
        None => msg_bail_anyhow!(Message::TaskNotFoundWithId(first)),
    }
}

/// Reports the number of tasks that actually exist among `ids`.
pub fn mark(tasks: &mut Tasks, ids: &[i64], done: bool) -> Result<usize> {
    if ids.is_empty() {
        msg_bail_anyhow!(Message::NoTaskIdsProvided);
    }
    let marked = tasks.set_done(ids, done)?;
    if done {
        msg_success!(Message::TasksMarkedDone(marked));
    } else {
        msg_success!(Message::TasksMarkedActive(marked));
    }
    Ok(marked)
}
