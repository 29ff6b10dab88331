//! Interactive menu.
//!
//! Shows the roster, then loops over the action menu until Exit is chosen or
//! the prompt is dismissed.

use super::{add, delete, refresh, search, update};
use crate::{
    db::db::Db,
    libs::messages::Message,
    msg_error, msg_print,
};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Select};

const ACTIONS: [&str; 6] = ["Add", "Update", "Delete", "Search", "Refresh", "Exit"];

pub fn cmd(db: &mut Db) -> Result<()> {
    msg_print!(Message::AppBanner, true);
    refresh(db);

    loop {
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::SelectAction.to_string())
            .items(&ACTIONS[..])
            .default(0)
            .interact_opt()?;

        let outcome = match selection {
            Some(0) => add::cmd(db, add::AddArgs::default()),
            Some(1) => update::cmd(db, update::UpdateArgs::default()),
            Some(2) => delete::cmd(db, delete::DeleteArgs::default()),
            Some(3) => prompt_search(db),
            Some(4) => {
                refresh(db);
                Ok(())
            }
            _ => break,
        };

        // A failed action (e.g. an aborted prompt) must not end the session.
        if let Err(e) = outcome {
            msg_error!(e);
        }
    }

    db.close();
    msg_print!(Message::Goodbye);
    Ok(())
}

fn prompt_search(db: &mut Db) -> Result<()> {
    let query: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptSearch.to_string())
        .allow_empty(true)
        .interact_text()?;
    search::cmd(db, &query)
}
