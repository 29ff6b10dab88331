//! Database layer for the roster application.
//!
//! Two pieces: a connection provider that owns the single SQLite handle and
//! a repository that turns student operations into parameterized statements.
//!
//! ```rust
//! use roster::db::{db::Db, students::Students};
//! use roster::libs::student::Student;
//!
//! let mut db = Db::in_memory();
//! let mut students = Students::new(&mut db);
//! students.add(&Student::new("S1", "Ann", "ann@x.com", "1234567890", "CS", 88.5));
//! assert!(students.exists("S1"));
//! ```

/// Connection provider.
///
/// Opens the database lazily, reuses the connection, reopens it after it
/// was closed or failed its liveness probe.
pub mod db;

/// Student repository.
///
/// Add, list, find by id, search by name, update, delete and existence
/// checks over the `students` table.
pub mod students;
