//! Core library modules for the roster application.
//!
//! - **Records**: the student entity and its validation rules
//! - **Infrastructure**: configuration, data directory, messaging, tracing
//! - **User Interface**: interactive form, table rendering, formatting
//! - **Data Export**: CSV and JSON roster export
//!
//! ```rust
//! use roster::libs::student::Student;
//!
//! let student = Student::new("S1", "Ann", "ann@x.com", "1234567890", "CS", 88.5);
//! assert!(student.validate().is_ok());
//! ```

pub mod config;
pub mod data_storage;
pub mod export;
pub mod form;
pub mod formatter;
pub mod logging;
pub mod messages;
pub mod student;
pub mod view;
