//! # Roster - Student Record Management
//!
//! A command-line utility for keeping a roster of student records in a
//! local SQLite database.
//!
//! ## Features
//!
//! - **Records**: add, update, delete and look up students by roll number
//! - **Validation**: email, 10-digit phone and 0-100 marks checks on every write
//! - **Search**: exact roll number or case-insensitive name substring
//! - **Interactive Menu**: table view with add/update/delete/search actions
//! - **Data Export**: CSV and JSON
//!
//! ## Usage
//!
//! ```rust,no_run
//! use roster::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
