use super::form;
use crate::{
    db::tasks::Tasks,
    libs::{
        messages::Message,
        task::{parse_due_date, validate_title, NewTask, Priority},
    },
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task title; omit to fill in the task interactively
    title: Option<String>,

    /// Free-form notes
    #[arg(short, long)]
    details: Option<String>,

    #[arg(short, long)]
    category: Option<String>,

    #[arg(short, long, value_enum, default_value = "medium")]
    priority: Priority,

    /// Due date as YYYY-MM-DD
    #[arg(long)]
    due: Option<String>,
}

pub fn cmd(args: AddArgs) -> Result<()> {
    let mut tasks = Tasks::new()?;
    match args.title {
        Some(title) => {
            let mut task = NewTask::new(validate_title(&title)?)
                .priority(args.priority)
                .due_date(parse_due_date(args.due.as_deref().unwrap_or_default())?);
            if let Some(details) = args.details {
                task = task.details(details.trim());
            }
            if let Some(category) = args.category {
                task = task.category(category.trim());
            }
            let id = tasks.create(&task)?;
            msg_success!(Message::TaskCreated(id));
        }
        None => {
            create_interactive(&mut tasks)?;
        }
    }
    Ok(())
}

/// Asks for a new task and stores it.
pub fn create_interactive(tasks: &mut Tasks) -> Result<i64> {
    let task = form::prompt_task(Message::NewTaskHeading, None)?;
    let id = tasks.create(&task)?;
    msg_success!(Message::TaskCreated(id));
    Ok(id)
}
