//! Display implementation for taskdeck messages.
//!
//! All user-facing text is defined here, in one `match`, so wording stays
//! consistent between the command-line subcommands and the browse session.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(id) => format!("Task #{} created", id),
            Message::TaskUpdated(id) => format!("Task #{} updated", id),
            Message::TaskNotFoundWithId(id) => format!("Task #{} not found", id),
            Message::TasksDeleted(count) => format!("Deleted {} task(s)", count),
            Message::TasksMarkedDone(count) => format!("Marked {} task(s) as done", count),
            Message::TasksMarkedActive(count) => format!("Marked {} task(s) as active", count),
            Message::DoneTasksCleared(count) => format!("Removed {} completed task(s)", count),
            Message::NoDoneTasks => "There are no completed tasks to remove".to_string(),
            Message::NoTasksFound => "No tasks match the current filters".to_string(),
            Message::NoTaskIdsProvided => "No task IDs provided".to_string(),
            Message::NoChangesDetected => "No changes detected".to_string(),
            Message::TasksHeader(count) => format!("Tasks ({})", count),
            Message::StatsLine {
                total,
                active,
                done,
                overdue,
            } => format!("Total: {}  |  Active: {}  |  Done: {}  |  Overdue: {}", total, active, done, overdue),
            Message::InvalidStoredDueDate(id, raw) => {
                format!("Task #{} has an unreadable due date '{}', treating it as no deadline", id, raw)
            }

            // === CATEGORY MESSAGES ===
            Message::CategoriesHeader => "Categories".to_string(),
            Message::NoCategoriesFound => "No categories yet".to_string(),

            // === DIALOG HEADINGS ===
            Message::NewTaskHeading => "New task".to_string(),
            Message::EditTaskHeading(id) => format!("Edit task #{}", id),

            // === PROMPTS ===
            Message::PromptTaskTitle => "Title".to_string(),
            Message::PromptTaskDetails => "Details".to_string(),
            Message::PromptTaskCategory => "Category".to_string(),
            Message::PromptTaskPriority => "Priority".to_string(),
            Message::PromptTaskDueDate => "Due date (YYYY-MM-DD, empty for none)".to_string(),
            Message::PromptSearch => "Search (empty to clear)".to_string(),
            Message::PromptExportPath => "Export to file".to_string(),
            Message::PromptImportPath => "Import from file".to_string(),
            Message::PromptDatabasePath => "Database file (empty for default location)".to_string(),
            Message::PromptSoonDays => "Highlight tasks due within how many days".to_string(),
            Message::SelectDefaultStatus => "Status filter to start with".to_string(),
            Message::SelectBrowseAction => "Choose an action".to_string(),
            Message::SelectStatusFilter => "Show".to_string(),
            Message::SelectPriorityFilter => "Priority".to_string(),
            Message::SelectCategoryFilter => "Category".to_string(),
            Message::SelectSortColumn => "Sort by".to_string(),
            Message::SelectTasks => "Select tasks (space to mark, enter to confirm)".to_string(),

            // === CONFIRMATIONS ===
            Message::ConfirmDeleteTasks(count) => format!("Delete the selected tasks ({})?", count),
            Message::ConfirmClearDone(count) => format!("Delete all completed tasks ({})?", count),
            Message::ConfirmImport(path) => {
                format!("Import tasks from '{}'? Existing tasks are kept, so duplicates may appear.", path)
            }

            // === BROWSE MESSAGES ===
            Message::BrowseFilters(summary) => format!("Filters: {}", summary),
            Message::FiltersReset => "Filters reset".to_string(),
            Message::SortChanged(sort) => format!("Sorted by {}", sort),

            // === TRANSFER MESSAGES ===
            Message::ExportCompleted { count, path } => format!("Exported {} task(s) to {}", count, path),
            Message::ImportCompleted { imported, skipped } => {
                format!("Import finished: {} task(s) added, {} row(s) skipped", imported, skipped)
            }
            Message::ImportRecordSkipped(line, reason) => format!("Skipping CSV line {}: {}", line, reason),
            Message::FileNotFound(path) => format!("File not found: {}", path),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved(path) => format!("Configuration saved to {}", path),
            Message::ConfigParseError(path) => format!("Failed to parse configuration file {}", path),
            Message::InvalidSoonDays(days, max) => {
                format!("soon_days must be between 0 and {}, got {}", max, days)
            }

            // === DATABASE MESSAGES ===
            Message::DatabaseOpened(path) => format!("Opened database {}", path),
            Message::DatabaseUpToDate => "Database is up to date".to_string(),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending migration(s)", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All migrations completed".to_string(),

            // === GENERAL MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
        };

        write!(f, "{}", text)
    }
}
