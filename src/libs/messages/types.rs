#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskAdded(String),
    TaskMarkedDone(String),
    TaskMarkedPending(String),
    TaskUpdated(String),
    TaskDeleted(String),
    AllTasksDeleted(usize),
    NoTasksToDelete,
    TaskNotFound(String),
    AmbiguousTaskId(String),
    NoTasksFound,
    NoChangesDetected,
    TasksHeader,
    DueDateInPast,

    // === PROMPT MESSAGES ===
    PromptTaskText,
    PromptDueDate,
    PromptSelectTask,
    ConfirmDeleteTask(String),
    ConfirmDeleteAll(usize),
    OperationCancelled,

    // === STATS MESSAGES ===
    StatsHeader,

    // === CONFIGURATION MESSAGES ===
    ConfigModuleDisplay,
    PromptDateFormat,
    ConfigSaved,
    ConfigDeleted,
}
