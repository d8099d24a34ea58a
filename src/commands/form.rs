//! Interactive prompts shared by the subcommands and the browse session.

use crate::libs::messages::Message;
use crate::libs::task::{format_due_date, parse_due_date, validate_title, NewTask, Priority, Task};
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

/// Asks for every task field. With `current`, its values are pre-filled and
/// can be edited or erased.
pub fn prompt_task(heading: Message, current: Option<&Task>) -> Result<NewTask> {
    msg_print!(heading, true);
    let theme = ColorfulTheme::default();

    let title: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptTaskTitle.to_string())
        .with_initial_text(current.map(|t| t.title.clone()).unwrap_or_default())
        .validate_with(|input: &String| validate_title(input).map(|_| ()).map_err(|e| e.to_string()))
        .interact_text()?;

    let details: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptTaskDetails.to_string())
        .with_initial_text(current.and_then(|t| t.details.clone()).unwrap_or_default())
        .allow_empty(true)
        .interact_text()?;

    let category: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptTaskCategory.to_string())
        .with_initial_text(current.and_then(|t| t.category.clone()).unwrap_or_default())
        .allow_empty(true)
        .interact_text()?;

    let current_priority = current.map(|t| t.priority).unwrap_or_default();
    let priority_index = Select::with_theme(&theme)
        .with_prompt(Message::PromptTaskPriority.to_string())
        .items(&Priority::ALL.iter().map(|p| p.as_str()).collect::<Vec<_>>())
        .default(Priority::ALL.iter().position(|p| *p == current_priority).unwrap_or(1))
        .interact()?;

    let due: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptTaskDueDate.to_string())
        .with_initial_text(format_due_date(current.and_then(|t| t.due_date)))
        .allow_empty(true)
        .validate_with(|input: &String| parse_due_date(input).map(|_| ()).map_err(|e| e.to_string()))
        .interact_text()?;

    Ok(NewTask::new(validate_title(&title)?)
        .details(details.trim())
        .category(category.trim())
        .priority(Priority::ALL[priority_index])
        .due_date(parse_due_date(&due)?))
}

pub fn confirm(prompt: Message) -> Result<bool> {
    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .default(false)
        .interact()?)
}

/// Asks for a line of text; an empty answer is returned as `None`.
pub fn prompt_text(prompt: Message, initial: &str) -> Result<Option<String>> {
    let text: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text()?;
    let text = text.trim();
    Ok(if text.is_empty() { None } else { Some(text.to_string()) })
}
