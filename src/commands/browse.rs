//! Interactive browse session.
//!
//! Keeps one [`TaskQuery`] for the whole session. Every action re-reads the
//! store, so the table always shows the current state under the current
//! filters. Errors from a single action are reported and the session goes on.

use super::{add, clear, delete, done, edit, export, form, import, list};
use crate::{
    db::tasks::Tasks,
    libs::{
        config::Config,
        messages::Message,
        query::{SortColumn, StatusFilter, TaskQuery},
        task::{Priority, Task},
    },
    msg_error, msg_info, msg_print,
};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, MultiSelect, Select};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Add,
    Edit,
    ToggleDone,
    Delete,
    ClearDone,
    Search,
    Status,
    Priority,
    Category,
    Sort,
    ResetFilters,
    Export,
    Import,
    Quit,
}

impl Action {
    const ALL: [Action; 14] = [
        Action::Add,
        Action::Edit,
        Action::ToggleDone,
        Action::Delete,
        Action::ClearDone,
        Action::Search,
        Action::Status,
        Action::Priority,
        Action::Category,
        Action::Sort,
        Action::ResetFilters,
        Action::Export,
        Action::Import,
        Action::Quit,
    ];

    fn label(&self) -> &'static str {
        match self {
            Action::Add => "Add task",
            Action::Edit => "Edit task",
            Action::ToggleDone => "Toggle done",
            Action::Delete => "Delete tasks",
            Action::ClearDone => "Clear completed",
            Action::Search => "Search",
            Action::Status => "Filter by status",
            Action::Priority => "Filter by priority",
            Action::Category => "Filter by category",
            Action::Sort => "Sort",
            Action::ResetFilters => "Reset filters",
            Action::Export => "Export to CSV",
            Action::Import => "Import from CSV",
            Action::Quit => "Quit",
        }
    }
}

struct Session {
    tasks: Tasks,
    config: Config,
    query: TaskQuery,
    rows: Vec<Task>,
}

pub fn cmd() -> Result<()> {
    let config = Config::read()?;
    let mut session = Session {
        tasks: Tasks::new()?,
        query: TaskQuery::new().status(config.default_status),
        config,
        rows: Vec::new(),
    };

    loop {
        session.refresh()?;
        let Some(action) = choose_action()? else {
            break;
        };
        if action == Action::Quit {
            break;
        }
        if let Err(e) = session.run(action) {
            msg_error!(e);
        }
    }
    Ok(())
}

fn choose_action() -> Result<Option<Action>> {
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::SelectBrowseAction.to_string())
        .items(&Action::ALL.iter().map(|a| a.label()).collect::<Vec<_>>())
        .default(0)
        .interact_opt()?;
    Ok(selection.map(|i| Action::ALL[i]))
}

impl Session {
    /// Re-reads the store and redraws the table.
    fn refresh(&mut self) -> Result<()> {
        // A category filter that no longer matches any task falls back to all.
        if let Some(category) = &self.query.category {
            if !self.tasks.categories()?.contains(category) {
                self.query.category = None;
            }
        }
        msg_print!(Message::BrowseFilters(self.query.describe()), true);
        self.rows = list::show(&mut self.tasks, &self.query, &self.config.highlighter())?;
        Ok(())
    }

    fn run(&mut self, action: Action) -> Result<()> {
        match action {
            Action::Add => {
                add::create_interactive(&mut self.tasks)?;
            }
            Action::Edit => {
                if let Some(task) = self.pick_one()? {
                    edit::edit_interactive(&mut self.tasks, &task)?;
                }
            }
            Action::ToggleDone => {
                let ids = self.pick_many()?;
                if !ids.is_empty() {
                    done::toggle(&mut self.tasks, &ids)?;
                }
            }
            Action::Delete => {
                let ids = self.pick_many()?;
                if !ids.is_empty() {
                    delete::delete(&mut self.tasks, &ids, false)?;
                }
            }
            Action::ClearDone => clear::clear_done(&mut self.tasks, false)?,
            Action::Search => {
                let current = self.query.search.clone().unwrap_or_default();
                self.query.search = form::prompt_text(Message::PromptSearch, &current)?;
            }
            Action::Status => {
                let statuses = StatusFilter::ALL;
                let labels: Vec<String> = statuses.iter().map(|s| s.to_string()).collect();
                let current = statuses.iter().position(|s| *s == self.query.status).unwrap_or(0);
                if let Some(i) = select(Message::SelectStatusFilter, &labels, current)? {
                    self.query.status = statuses[i];
                }
            }
            Action::Priority => {
                let mut labels = vec!["All".to_string()];
                labels.extend(Priority::ALL.iter().map(|p| p.to_string()));
                let current = self
                    .query
                    .priority
                    .and_then(|p| Priority::ALL.iter().position(|q| *q == p))
                    .map_or(0, |i| i + 1);
                if let Some(i) = select(Message::SelectPriorityFilter, &labels, current)? {
                    self.query.priority = if i == 0 { None } else { Some(Priority::ALL[i - 1]) };
                }
            }
            Action::Category => {
                let categories = self.tasks.categories()?;
                let mut labels = vec!["All".to_string()];
                labels.extend(categories.iter().cloned());
                let current = self
                    .query
                    .category
                    .as_ref()
                    .and_then(|c| categories.iter().position(|k| k == c))
                    .map_or(0, |i| i + 1);
                if let Some(i) = select(Message::SelectCategoryFilter, &labels, current)? {
                    self.query.category = if i == 0 { None } else { Some(categories[i - 1].clone()) };
                }
            }
            Action::Sort => {
                let columns = SortColumn::ALL;
                let labels: Vec<&str> = columns.iter().map(|c| c.label()).collect();
                let current = columns.iter().position(|c| *c == self.query.sort.column).unwrap_or(0);
                if let Some(i) = select(Message::SelectSortColumn, &labels, current)? {
                    self.query.sort.toggle(columns[i]);
                    msg_info!(Message::SortChanged(self.query.sort.to_string()));
                }
            }
            Action::ResetFilters => {
                self.query.reset_filters(self.config.default_status);
                msg_info!(Message::FiltersReset);
            }
            Action::Export => {
                if let Some(path) = form::prompt_text(Message::PromptExportPath, "tasks.csv")? {
                    export::export(&mut self.tasks, &self.query, &PathBuf::from(path))?;
                }
            }
            Action::Import => {
                if let Some(path) = form::prompt_text(Message::PromptImportPath, "")? {
                    import::import(&mut self.tasks, &PathBuf::from(path), false)?;
                }
            }
            Action::Quit => {}
        }
        Ok(())
    }

    fn pick_one(&self) -> Result<Option<Task>> {
        if self.rows.is_empty() {
            msg_info!(Message::NoTasksFound);
            return Ok(None);
        }
        let labels: Vec<String> = self.rows.iter().map(row_label).collect();
        Ok(select(Message::SelectTasks, &labels, 0)?.map(|i| self.rows[i].clone()))
    }

    /// Lets the user mark any number of visible rows and returns their ids.
    fn pick_many(&self) -> Result<Vec<i64>> {
        if self.rows.is_empty() {
            msg_info!(Message::NoTasksFound);
            return Ok(Vec::new());
        }
        let labels: Vec<String> = self.rows.iter().map(row_label).collect();
        let picked = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::SelectTasks.to_string())
            .items(&labels)
            .interact_opt()?
            .unwrap_or_default();
        Ok(picked.into_iter().map(|i| self.rows[i].id).collect())
    }
}

fn select<T: ToString>(prompt: Message, items: &[T], default: usize) -> Result<Option<usize>> {
    Ok(Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .items(items)
        .default(default)
        .interact_opt()?)
}

fn row_label(task: &Task) -> String {
    let mark = if task.is_done { "x" } else { " " };
    format!("[{}] #{} {}", mark, task.id, task.title)
}
