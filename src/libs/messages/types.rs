/// Every user-facing message in taskdeck.
///
/// Text lives in the `Display` impl in `display.rs`; call sites only pick a
/// variant and hand it to one of the `msg_*!` macros.
#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(i64),
    TaskUpdated(i64),
    TaskNotFoundWithId(i64),
    TasksDeleted(usize),
    TasksMarkedDone(usize),
    TasksMarkedActive(usize),
    DoneTasksCleared(usize),
    NoDoneTasks,
    NoTasksFound,
    NoTaskIdsProvided,
    NoChangesDetected,
    TasksHeader(usize),
    StatsLine {
        total: i64,
        active: i64,
        done: i64,
        overdue: i64,
    },
    InvalidStoredDueDate(i64, String), // task id, raw value

    // === CATEGORY MESSAGES ===
    CategoriesHeader,
    NoCategoriesFound,

    // === DIALOG HEADINGS ===
    NewTaskHeading,
    EditTaskHeading(i64),

    // === PROMPTS ===
    PromptTaskTitle,
    PromptTaskDetails,
    PromptTaskCategory,
    PromptTaskPriority,
    PromptTaskDueDate,
    PromptSearch,
    PromptExportPath,
    PromptImportPath,
    PromptDatabasePath,
    PromptSoonDays,
    SelectDefaultStatus,
    SelectBrowseAction,
    SelectStatusFilter,
    SelectPriorityFilter,
    SelectCategoryFilter,
    SelectSortColumn,
    SelectTasks,

    // === CONFIRMATIONS ===
    ConfirmDeleteTasks(usize),
    ConfirmClearDone(usize),
    ConfirmImport(String),

    // === BROWSE MESSAGES ===
    BrowseFilters(String),
    FiltersReset,
    SortChanged(String),

    // === TRANSFER MESSAGES ===
    ExportCompleted { count: usize, path: String },
    ImportCompleted { imported: usize, skipped: usize },
    ImportRecordSkipped(u64, String), // line, reason
    FileNotFound(String),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved(String),
    ConfigParseError(String),
    InvalidSoonDays(i64, i64), // value, maximum

    // === DATABASE MESSAGES ===
    DatabaseOpened(String),
    DatabaseUpToDate,

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),        // count
    RunningMigration(u32, String), // version, name
    MigrationCompleted(u32),       // version
    MigrationFailed(u32, String),  // version, error
    AllMigrationsCompleted,

    // === GENERAL MESSAGES ===
    OperationCancelled,
}
