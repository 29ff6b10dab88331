//! Message type definitions for the roster application.
//!
//! Every user-facing string is a variant of [`Message`]. The text lives in
//! `display.rs`; this file only enumerates what can be said.

#[derive(Debug, Clone)]
pub enum Message {
    // === STARTUP MESSAGES ===
    AppBanner,
    TestingConnection,
    ConnectionSuccessful,
    ConnectionFailed,
    ConnectionChecklist,

    // === STUDENT MESSAGES ===
    StudentAdded(String),        // id
    StudentUpdated(String),      // id
    StudentDeleted(String),      // id
    StudentAddFailed,
    StudentUpdateFailed,
    StudentDeleteFailed,
    StudentFound(String),        // id
    StudentNotFound(String),     // id
    StudentAlreadyExists(String), // id
    StudentsRetrieved(usize),
    StudentsMatching(usize, String), // count, query
    NoStudentsFound,
    NoStudentsMatching(String), // query
    StudentsHeader,
    StudentsCount(usize),
    SearchResults(String), // query
    EmptySearch,
    EditingStudent(String), // id
    ConfirmDeleteStudent(String), // id
    InvalidRecordRejected(String, String), // id, reason

    // === VALIDATION MESSAGES ===
    AllFieldsRequired,
    InvalidEmail,
    InvalidPhone,
    InvalidScore,
    InvalidScoreFormat,

    // === DATABASE MESSAGES ===
    DbConnected(String), // target
    DbConnectionClosed,
    DbConnectionFailed(String), // error
    DbReconnecting,
    DbQueryFailed(String, String), // operation, error

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigModuleDatabase,

    // === EXPORT MESSAGES ===
    ExportCompleted(String), // path
    ExportingStudents(usize, String), // count, format

    // === PROMPTS ===
    PromptStudentId,
    PromptStudentName,
    PromptStudentEmail,
    PromptStudentPhone,
    PromptStudentCourse,
    PromptStudentScore,
    PromptSearch,
    PromptDbPath,
    PromptDbCheckLiveness,
    SelectStudentToEdit,
    SelectStudentToDelete,
    SelectAction,

    // === GENERAL MESSAGES ===
    OperationCancelled,
    Goodbye,
}
