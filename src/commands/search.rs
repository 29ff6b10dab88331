//! Search by roll number or name.
//!
//! An exact roll-number match wins. Otherwise names containing the query are
//! listed. When nothing matches the full roster is shown again.

use super::refresh;
use crate::{
    db::{db::Db, students::Students},
    libs::{messages::Message, view::View},
    msg_info, msg_print, msg_warning,
};
use anyhow::Result;

pub fn cmd(db: &mut Db, query: &str) -> Result<()> {
    let query = query.trim();
    if query.is_empty() {
        msg_warning!(Message::EmptySearch);
        return Ok(());
    }

    let mut students = Students::new(db);
    let found = match students.get(query) {
        Some(student) => vec![student],
        None => students.search(query),
    };

    if found.is_empty() {
        msg_info!(Message::NoStudentsMatching(query.to_string()));
        refresh(db);
        return Ok(());
    }

    msg_print!(Message::SearchResults(query.to_string()), true);
    View::students(&found);
    msg_print!(Message::StudentsCount(found.len()));
    Ok(())
}
