//! Student repository: CRUD and search over the `students` table.
//!
//! Every operation borrows the connection from [`Db`], runs a single
//! parameterized statement and maps rows to [`Student`] values. Failures
//! never escape as errors: a database error is logged and reported as
//! `false`, `None` or an empty list, and an invalid record is rejected with
//! a warning before any statement runs.
//!
//! ```rust
//! use roster::db::{db::Db, students::Students};
//! use roster::libs::student::Student;
//!
//! let mut db = Db::in_memory();
//! let mut students = Students::new(&mut db);
//! let ann = Student::new("S1", "Ann", "ann@x.com", "1234567890", "CS", 88.5);
//! assert!(students.add(&ann));
//! assert!(!students.add(&ann));
//! assert_eq!(students.list().len(), 1);
//! ```

use crate::db::db::Db;
use crate::libs::messages::Message;
use crate::libs::student::Student;
use crate::{msg_debug, msg_error, msg_warning};
use anyhow::Result;
use rusqlite::{params, OptionalExtension, Row};

const INSERT_STUDENT: &str = "INSERT INTO students (roll_number, name, email, phone, course, marks) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const SELECT_ALL_STUDENTS: &str = "SELECT roll_number, name, email, phone, course, marks, created_at, updated_at FROM students ORDER BY roll_number";
const SELECT_STUDENT_BY_ROLL: &str = "SELECT roll_number, name, email, phone, course, marks, created_at, updated_at FROM students WHERE roll_number = ?1";
const SELECT_STUDENTS_BY_NAME: &str = "SELECT roll_number, name, email, phone, course, marks, created_at, updated_at FROM students WHERE name LIKE ?1 ESCAPE '\\' ORDER BY roll_number";
const UPDATE_STUDENT: &str = "UPDATE students SET name = ?2, email = ?3, phone = ?4, course = ?5, marks = ?6, updated_at = CURRENT_TIMESTAMP WHERE roll_number = ?1";
const DELETE_STUDENT: &str = "DELETE FROM students WHERE roll_number = ?1";
const CHECK_ROLL_EXISTS: &str = "SELECT COUNT(*) FROM students WHERE roll_number = ?1";
const COUNT_STUDENTS: &str = "SELECT COUNT(*) FROM students";

pub struct Students<'a> {
    db: &'a mut Db,
}

impl<'a> Students<'a> {
    pub fn new(db: &'a mut Db) -> Self {
        Students { db }
    }

    /// Persists a new record. Returns `false` if the id is taken, the record is
    /// invalid, or the insert fails.
    pub fn add(&mut self, student: &Student) -> bool {
        if !self.accepts(student) {
            return false;
        }
        if self.exists(&student.id) {
            msg_warning!(Message::StudentAlreadyExists(student.id.clone()));
            return false;
        }

        let inserted = self.run(&format!("adding student {}", student.id), |db| {
            let affected = db.connection()?.execute(
                INSERT_STUDENT,
                params![student.id, student.name, student.email, student.phone, student.course, student.score],
            )?;
            Ok(affected > 0)
        });

        if inserted == Some(true) {
            msg_debug!(Message::StudentAdded(student.id.clone()));
            true
        } else {
            false
        }
    }

    /// All records ordered by id.
    pub fn list(&mut self) -> Vec<Student> {
        let students = self
            .run("retrieving students", |db| {
                let conn = db.connection()?;
                let mut stmt = conn.prepare(SELECT_ALL_STUDENTS)?;
                let rows = stmt.query_map([], map_student)?.collect::<rusqlite::Result<Vec<_>>>()?;
                Ok(rows)
            })
            .unwrap_or_default();

        msg_debug!(Message::StudentsRetrieved(students.len()));
        students
    }

    pub fn get(&mut self, id: &str) -> Option<Student> {
        let student = self
            .run(&format!("searching student {}", id), |db| {
                let student = db
                    .connection()?
                    .query_row(SELECT_STUDENT_BY_ROLL, params![id], map_student)
                    .optional()?;
                Ok(student)
            })
            .flatten();

        match &student {
            Some(_) => msg_debug!(Message::StudentFound(id.to_string())),
            None => msg_debug!(Message::StudentNotFound(id.to_string())),
        }
        student
    }

    /// Records whose name contains `text`, ordered by id.
    ///
    /// Matching uses SQLite `LIKE`, so ASCII letters compare case-insensitively.
    /// `%` and `_` in `text` match literally.
    pub fn search(&mut self, text: &str) -> Vec<Student> {
        let pattern = format!("%{}%", escape_like(text));
        let students = self
            .run("searching students", |db| {
                let conn = db.connection()?;
                let mut stmt = conn.prepare(SELECT_STUDENTS_BY_NAME)?;
                let rows = stmt
                    .query_map(params![pattern], map_student)?
                    .collect::<rusqlite::Result<Vec<_>>>()?;
                Ok(rows)
            })
            .unwrap_or_default();

        msg_debug!(Message::StudentsMatching(students.len(), text.to_string()));
        students
    }

    /// Replaces every field except the id. Returns `false` when no record has
    /// that id, the record is invalid, or the update fails.
    pub fn update(&mut self, student: &Student) -> bool {
        if !self.accepts(student) {
            return false;
        }

        let affected = self
            .run(&format!("updating student {}", student.id), |db| {
                let affected = db.connection()?.execute(
                    UPDATE_STUDENT,
                    params![student.id, student.name, student.email, student.phone, student.course, student.score],
                )?;
                Ok(affected)
            })
            .unwrap_or(0);

        if affected > 0 {
            msg_debug!(Message::StudentUpdated(student.id.clone()));
            true
        } else {
            msg_debug!(Message::StudentNotFound(student.id.clone()));
            false
        }
    }

    pub fn delete(&mut self, id: &str) -> bool {
        let affected = self
            .run(&format!("deleting student {}", id), |db| Ok(db.connection()?.execute(DELETE_STUDENT, params![id])?))
            .unwrap_or(0);

        if affected > 0 {
            msg_debug!(Message::StudentDeleted(id.to_string()));
            true
        } else {
            msg_debug!(Message::StudentNotFound(id.to_string()));
            false
        }
    }

    pub fn exists(&mut self, id: &str) -> bool {
        self.run(&format!("checking roll number {}", id), |db| {
            let count: i64 = db.connection()?.query_row(CHECK_ROLL_EXISTS, params![id], |row| row.get(0))?;
            Ok(count > 0)
        })
        .unwrap_or(false)
    }

    pub fn count(&mut self) -> usize {
        self.run("counting students", |db| {
            let count: i64 = db.connection()?.query_row(COUNT_STUDENTS, [], |row| row.get(0))?;
            Ok(usize::try_from(count)?)
        })
        .unwrap_or(0)
    }

    fn accepts(&self, student: &Student) -> bool {
        match student.validate() {
            Ok(()) => true,
            Err(e) => {
                msg_warning!(Message::InvalidRecordRejected(student.id.clone(), e.to_string()));
                false
            }
        }
    }

    /// Runs one data-access step, logging and swallowing its error.
    fn run<T>(&mut self, operation: &str, step: impl FnOnce(&mut Db) -> Result<T>) -> Option<T> {
        match step(self.db) {
            Ok(value) => Some(value),
            Err(e) => {
                msg_error!(Message::DbQueryFailed(operation.to_string(), e.to_string()));
                None
            }
        }
    }
}

fn map_student(row: &Row) -> rusqlite::Result<Student> {
    Ok(Student {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        phone: row.get(3)?,
        course: row.get(4)?,
        score: row.get(5)?,
        created_at: row.get(6)?,
        updated_at: row.get(7)?,
    })
}

fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::escape_like;

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("Ann"), "Ann");
        assert_eq!(escape_like("50%_off"), "50\\%\\_off");
        assert_eq!(escape_like("a\\b"), "a\\\\b");
    }
}
