use super::{refresh, FieldArgs};
use crate::{
    db::{db::Db, students::Students},
    libs::{form, messages::Message},
    msg_error, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args, Default)]
pub struct AddArgs {
    /// Roll number
    #[arg(long)]
    id: Option<String>,

    #[command(flatten)]
    fields: FieldArgs,
}

/// Collects a record (flags first, prompts for the rest) and stores it.
pub fn cmd(db: &mut Db, args: AddArgs) -> Result<()> {
    let student = form::fill_new(args.fields.into_values(args.id))?;

    if let Err(e) = student.validate() {
        msg_error!(e);
        return Ok(());
    }

    if Students::new(db).add(&student) {
        msg_success!(Message::StudentAdded(student.id));
        refresh(db);
    } else {
        msg_error!(Message::StudentAddFailed);
    }
    Ok(())
}
