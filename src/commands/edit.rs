use super::form;
use crate::{
    db::tasks::Tasks,
    libs::{
        messages::Message,
        task::{parse_due_date, validate_title, Priority, Task, TaskUpdate},
    },
    msg_bail_anyhow, msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;

/// Without any field flag the task is edited interactively.
#[derive(Debug, Args)]
pub struct EditArgs {
    /// ID of the task to edit
    id: i64,

    #[arg(short, long)]
    title: Option<String>,

    /// Free-form notes; an empty value clears them
    #[arg(short, long)]
    details: Option<String>,

    /// Category; an empty value clears it
    #[arg(short, long)]
    category: Option<String>,

    #[arg(short, long, value_enum)]
    priority: Option<Priority>,

    /// Due date as YYYY-MM-DD
    #[arg(long, conflicts_with = "clear_due")]
    due: Option<String>,

    /// Remove the due date
    #[arg(long)]
    clear_due: bool,
}

impl EditArgs {
    fn has_changes(&self) -> bool {
        self.title.is_some()
            || self.details.is_some()
            || self.category.is_some()
            || self.priority.is_some()
            || self.due.is_some()
            || self.clear_due
    }

    fn to_update(&self) -> Result<TaskUpdate> {
        let mut update = TaskUpdate::default();
        if let Some(title) = &self.title {
            update = update.title(validate_title(title)?);
        }
        if let Some(details) = &self.details {
            update = update.details(details.trim());
        }
        if let Some(category) = &self.category {
            update = update.category(category.trim());
        }
        if let Some(priority) = self.priority {
            update = update.priority(priority);
        }
        if let Some(due) = &self.due {
            update = update.due_date(parse_due_date(due)?);
        }
        if self.clear_due {
            update = update.due_date(None);
        }
        Ok(update)
    }
}

pub fn cmd(args: EditArgs) -> Result<()> {
    let mut tasks = Tasks::new()?;
    let Some(task) = tasks.get(args.id)? else {
        msg_bail_anyhow!(Message::TaskNotFoundWithId(args.id));
    };

    if args.has_changes() {
        let update = args.to_update()?;
        apply(&mut tasks, &task, &update)
    } else {
        edit_interactive(&mut tasks, &task)
    }
}

/// Opens the edit form pre-filled with `task` and stores what changed.
pub fn edit_interactive(tasks: &mut Tasks, task: &Task) -> Result<()> {
    let edited = form::prompt_task(Message::EditTaskHeading(task.id), Some(task))?;
    apply(tasks, task, &TaskUpdate::diff(task, &edited))
}

fn apply(tasks: &mut Tasks, task: &Task, update: &TaskUpdate) -> Result<()> {
    if update.is_empty() {
        msg_info!(Message::NoChangesDetected);
        return Ok(());
    }
    tasks.update(task.id, update)?;
    msg_success!(Message::TaskUpdated(task.id));
    Ok(())
}
