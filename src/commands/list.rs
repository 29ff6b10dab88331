use super::refresh;
use crate::{
    db::{db::Db, students::Students},
    libs::{messages::Message, view::View},
    msg_info, msg_print,
};
use anyhow::Result;

pub fn cmd(db: &mut Db) -> Result<()> {
    if Students::new(db).count() == 0 {
        msg_info!(Message::NoStudentsFound);
        return Ok(());
    }
    refresh(db);
    Ok(())
}

pub fn show(db: &mut Db, id: &str) -> Result<()> {
    match Students::new(db).get(id.trim()) {
        Some(student) => {
            msg_print!(Message::StudentsHeader, true);
            View::students(&[student]);
        }
        None => msg_info!(Message::StudentNotFound(id.trim().to_string())),
    }
    Ok(())
}
