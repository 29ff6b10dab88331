use super::{refresh, select_student};
use crate::{
    db::{db::Db, students::Students},
    libs::messages::Message,
    msg_error, msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args, Default)]
pub struct DeleteArgs {
    /// Roll number of the student to delete; selected from a list when omitted
    id: Option<String>,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(db: &mut Db, args: DeleteArgs) -> Result<()> {
    let id = match args.id {
        Some(id) => id.trim().to_string(),
        None => match select_student(db, Message::SelectStudentToDelete)? {
            Some(id) => id,
            None => return Ok(()),
        },
    };

    if !args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteStudent(id.clone()).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    if Students::new(db).delete(&id) {
        msg_success!(Message::StudentDeleted(id));
        refresh(db);
    } else {
        msg_error!(Message::StudentDeleteFailed);
    }
    Ok(())
}
