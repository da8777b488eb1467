#[derive(Debug, Clone)]
pub enum Message {
    // === WEEK MESSAGES ===
    WeekHeader(String, String), // first day, last day
    WeekTotal(String, String),  // total, target
    WeekDelta(String),
    NoEntriesThisWeek,

    // === OVERTIME MESSAGES ===
    OvertimeHeader(i32), // year
    OvertimeCorridor(String, String, String), // min, max, percent
    OvertimeRecentHeader,
    NoOvertimeMovements,
    OvertimeBooked(String),

    // === PROJECT MESSAGES ===
    ProjectsHeader,
    ProjectsTotal(String),
    NoProjectTime,

    // === CHECK-IN MESSAGES ===
    CheckInsHeader(usize),
    NoCheckIns,

    // === ENTRY MESSAGES ===
    EntryStarted(i64),
    EntryStopped(i64, String), // id, net hours
    EntryAdded(i64),
    EntryNotFound(i64),
    EntryAlreadyClosed(i64),
    EntryNegativeDuration(i64),

    // === DASHBOARD MESSAGES ===
    DashboardHeader(String),
    SectionLoading(String),
    SectionFailed(String, String), // section, reason

    // === EXPORT MESSAGES ===
    ExportCompleted(String),
    ExportingData(String, String), // kind, format

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleBackend,
    ConfigModuleTracking,
    ConfigUsingLocalStore(String),
    ConfigUsingBackend(String),
    PromptSelectModules,
    PromptBackendApiUrl,
    PromptBackendApiKey,
    PromptTargetHours,
    PromptCorridorMin,
    PromptCorridorMax,
    PromptEmployeeId,

    // === GENERIC MESSAGES ===
    InvalidTimestamp(String),
    InvalidDate(String),
}
