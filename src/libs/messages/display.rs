//! Display implementation for roster application messages.
//!
//! Central place for all user-facing text. Messages with dynamic content
//! interpolate their parameters here so call sites never format strings
//! by hand.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === STARTUP MESSAGES ===
            Message::AppBanner => "===========================================\n  STUDENT MANAGEMENT SYSTEM\n===========================================".to_string(),
            Message::TestingConnection => "Testing database connection...".to_string(),
            Message::ConnectionSuccessful => "Database connection successful!".to_string(),
            Message::ConnectionFailed => "Database connection failed!".to_string(),
            Message::ConnectionChecklist => "Please check:\n1. The database path in config.json (or ROSTER_DB_PATH) is correct\n2. The directory containing the database is writable\n3. The database file is not locked or corrupted".to_string(),

            // === STUDENT MESSAGES ===
            Message::StudentAdded(id) => format!("Student added successfully: {}", id),
            Message::StudentUpdated(id) => format!("Student updated successfully: {}", id),
            Message::StudentDeleted(id) => format!("Student deleted successfully: {}", id),
            Message::StudentAddFailed => "Failed to add student. Roll number may already exist.".to_string(),
            Message::StudentUpdateFailed => "Failed to update student.".to_string(),
            Message::StudentDeleteFailed => "Failed to delete student.".to_string(),
            Message::StudentFound(id) => format!("Student found: {}", id),
            Message::StudentNotFound(id) => format!("Student not found: {}", id),
            Message::StudentAlreadyExists(id) => format!("Roll Number already exists: {}", id),
            Message::StudentsRetrieved(count) => format!("Retrieved {} students", count),
            Message::StudentsMatching(count, query) => format!("Found {} students matching: {}", count, query),
            Message::NoStudentsFound => "No students found.".to_string(),
            Message::NoStudentsMatching(query) => format!("No students found matching: {}", query),
            Message::StudentsHeader => "Student Records".to_string(),
            Message::StudentsCount(count) => format!("Total students: {}", count),
            Message::SearchResults(query) => format!("Search results for '{}':", query),
            Message::EmptySearch => "Please enter roll number or name to search.".to_string(),
            Message::EditingStudent(id) => format!("Editing student: {}", id),
            Message::ConfirmDeleteStudent(id) => format!("Are you sure you want to delete student: {}?", id),
            Message::InvalidRecordRejected(id, reason) => format!("Rejected student '{}': {}", id, reason),

            // === VALIDATION MESSAGES ===
            Message::AllFieldsRequired => "All fields are required!".to_string(),
            Message::InvalidEmail => "Invalid email format!".to_string(),
            Message::InvalidPhone => "Phone number must be 10 digits!".to_string(),
            Message::InvalidScore => "Marks must be between 0 and 100!".to_string(),
            Message::InvalidScoreFormat => "Marks must be a valid number!".to_string(),

            // === DATABASE MESSAGES ===
            Message::DbConnected(target) => format!("Database connected successfully: {}", target),
            Message::DbConnectionClosed => "Database connection closed".to_string(),
            Message::DbConnectionFailed(error) => format!("Database connection failed: {}", error),
            Message::DbReconnecting => "Database connection is no longer usable, reconnecting".to_string(),
            Message::DbQueryFailed(operation, error) => format!("Error {}: {}", operation, error),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigModuleDatabase => "Database settings".to_string(),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Export completed: {}", path),
            Message::ExportingStudents(count, format) => format!("Exporting {} students as {}", count, format),

            // === PROMPTS ===
            Message::PromptStudentId => "Roll Number".to_string(),
            Message::PromptStudentName => "Name".to_string(),
            Message::PromptStudentEmail => "Email".to_string(),
            Message::PromptStudentPhone => "Phone".to_string(),
            Message::PromptStudentCourse => "Course".to_string(),
            Message::PromptStudentScore => "Marks".to_string(),
            Message::PromptSearch => "Search by roll number or name".to_string(),
            Message::PromptDbPath => "Enter database path (file path or :memory:)".to_string(),
            Message::PromptDbCheckLiveness => "Probe the connection before reusing it?".to_string(),
            Message::SelectStudentToEdit => "Select a student to update".to_string(),
            Message::SelectStudentToDelete => "Select a student to delete".to_string(),
            Message::SelectAction => "What would you like to do?".to_string(),

            // === GENERAL MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
            Message::Goodbye => "Bye!".to_string(),
        };
        write!(f, "{}", text)
    }
}
