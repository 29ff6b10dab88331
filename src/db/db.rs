//! Connection provider for the student database.
//!
//! [`Db`] owns at most one SQLite connection. The connection is opened
//! lazily on first use, reused while it is open and reopened after
//! [`Db::close`]. With liveness checking enabled a reused connection is
//! probed with `SELECT 1` first and replaced if the probe fails.
//!
//! A `Db` is an ordinary owned value. Repositories borrow it mutably for
//! the duration of one operation, so access is serial by construction.
//!
//! ```rust
//! use roster::db::db::Db;
//!
//! let mut db = Db::in_memory();
//! assert!(db.test_connection());
//! ```

use crate::libs::config::{Config, DatabaseConfig, DbTarget};
use crate::libs::messages::Message;
use crate::{msg_debug, msg_error, msg_error_anyhow, msg_warning};
use anyhow::Result;
use rusqlite::Connection;

/// Table holding one row per student. Ensured on every (re)connect.
pub const SCHEMA_STUDENTS: &str = "CREATE TABLE IF NOT EXISTS students (
    roll_number TEXT NOT NULL PRIMARY KEY,
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    phone TEXT NOT NULL,
    course TEXT NOT NULL,
    marks REAL NOT NULL,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
    updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

const LIVENESS_PROBE: &str = "SELECT 1";

pub struct Db {
    target: DbTarget,
    check_liveness: bool,
    conn: Option<Connection>,
}

impl Db {
    /// Builds a provider from `config.json` and the environment. Does not connect yet.
    pub fn new() -> Result<Self> {
        let config = Config::read()?;
        Self::from_config(&config.database_config())
    }

    pub fn from_config(database: &DatabaseConfig) -> Result<Self> {
        Ok(Self::open(database.target()?, database.check_liveness))
    }

    pub fn open(target: DbTarget, check_liveness: bool) -> Self {
        Db {
            target,
            check_liveness,
            conn: None,
        }
    }

    pub fn in_memory() -> Self {
        Self::open(DbTarget::InMemory, true)
    }

    pub fn target(&self) -> &DbTarget {
        &self.target
    }

    /// Human-readable target: the file path or `:memory:`.
    pub fn describe_target(&self) -> String {
        describe(&self.target)
    }

    pub fn is_connected(&self) -> bool {
        self.conn.is_some()
    }

    /// Returns the shared connection, opening or reopening it as needed.
    pub fn connection(&mut self) -> Result<&mut Connection> {
        if self.check_liveness {
            if let Some(conn) = &self.conn {
                if !is_alive(conn) {
                    msg_warning!(Message::DbReconnecting);
                    self.conn = None;
                }
            }
        }

        if self.conn.is_none() {
            self.conn = Some(self.connect()?);
        }

        self.conn
            .as_mut()
            .ok_or_else(|| msg_error_anyhow!(Message::DbConnectionFailed(describe(&self.target))))
    }

    /// Connectivity probe used at startup.
    pub fn test_connection(&mut self) -> bool {
        match self.connection() {
            Ok(conn) => is_alive(conn),
            Err(e) => {
                msg_error!(Message::DbConnectionFailed(e.to_string()));
                false
            }
        }
    }

    /// Drops the connection. The next call to [`Db::connection`] reopens it.
    pub fn close(&mut self) {
        if let Some(conn) = self.conn.take() {
            match conn.close() {
                Ok(()) => msg_debug!(Message::DbConnectionClosed),
                Err((_, e)) => msg_error!(Message::DbConnectionFailed(e.to_string())),
            }
        }
    }

    fn connect(&self) -> Result<Connection> {
        let conn = match &self.target {
            DbTarget::File(path) => Connection::open(path)?,
            DbTarget::InMemory => Connection::open_in_memory()?,
        };
        conn.execute(SCHEMA_STUDENTS, [])?;
        msg_debug!(Message::DbConnected(describe(&self.target)));
        Ok(conn)
    }
}

fn is_alive(conn: &Connection) -> bool {
    conn.query_row(LIVENESS_PROBE, [], |row| row.get::<_, i64>(0)).is_ok()
}

fn describe(target: &DbTarget) -> String {
    match target {
        DbTarget::File(path) => path.display().to_string(),
        DbTarget::InMemory => crate::libs::config::IN_MEMORY.to_string(),
    }
}
