use super::{refresh, select_student, FieldArgs};
use crate::{
    db::{db::Db, students::Students},
    libs::{form, messages::Message},
    msg_error, msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args, Default)]
pub struct UpdateArgs {
    /// Roll number of the student to edit; selected from a list when omitted
    id: Option<String>,

    #[command(flatten)]
    fields: FieldArgs,
}

pub fn cmd(db: &mut Db, args: UpdateArgs) -> Result<()> {
    let id = match args.id {
        Some(id) => id.trim().to_string(),
        None => match select_student(db, Message::SelectStudentToEdit)? {
            Some(id) => id,
            None => return Ok(()),
        },
    };

    let existing = match Students::new(db).get(&id) {
        Some(student) => student,
        None => {
            msg_error!(Message::StudentNotFound(id));
            return Ok(());
        }
    };

    msg_info!(Message::EditingStudent(existing.id.clone()));
    let student = form::fill_edit(&existing, args.fields.into_values(None))?;

    if let Err(e) = student.validate() {
        msg_error!(e);
        return Ok(());
    }

    if Students::new(db).update(&student) {
        msg_success!(Message::StudentUpdated(student.id));
        refresh(db);
    } else {
        msg_error!(Message::StudentUpdateFailed);
    }
    Ok(())
}
