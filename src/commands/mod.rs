//! Command-line interface and bootstrap.
//!
//! [`Cli::menu`] parses arguments, installs logging, probes the database and
//! dispatches to a subcommand. Without a subcommand the interactive menu is
//! started.

pub mod add;
pub mod delete;
pub mod export;
pub mod init;
pub mod interactive;
pub mod list;
pub mod search;
pub mod update;

use crate::db::db::Db;
use crate::db::students::Students;
use crate::libs::form::FormValues;
use crate::libs::logging::init_tracing;
use crate::libs::messages::Message;
use crate::libs::student;
use crate::libs::view::View;
use crate::{msg_bail_anyhow, msg_debug, msg_error, msg_info, msg_print};
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use dialoguer::{theme::ColorfulTheme, Select};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configure the database location")]
    Init(init::InitArgs),
    #[command(about = "Add a student")]
    Add(add::AddArgs),
    #[command(about = "List all students")]
    List,
    #[command(about = "Show one student by roll number")]
    Show {
        /// Roll number
        id: String,
    },
    #[command(about = "Search by roll number or name")]
    Search {
        /// Roll number, or part of a name
        query: String,
    },
    #[command(about = "Update a student")]
    Update(update::UpdateArgs),
    #[command(about = "Delete a student")]
    Delete(delete::DeleteArgs),
    #[command(about = "Export all students to CSV or JSON")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Route messages through tracing with debug-level output
    #[arg(long, global = true)]
    debug: bool,
}

/// Student fields that can be given on the command line instead of being prompted.
#[derive(Debug, Args, Default)]
pub struct FieldArgs {
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    phone: Option<String>,
    #[arg(long)]
    course: Option<String>,
    /// Marks between 0 and 100
    #[arg(long, value_parser = student::parse_score)]
    score: Option<f64>,
}

impl FieldArgs {
    fn into_values(self, id: Option<String>) -> FormValues {
        FormValues {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            course: self.course,
            score: self.score,
        }
    }
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        dotenv::dotenv().ok();
        init_tracing(cli.debug)?;

        let command = match cli.command {
            Some(Commands::Init(args)) => return init::cmd(args),
            command => command,
        };

        let mut db = connect()?;

        match command {
            None => interactive::cmd(&mut db),
            Some(Commands::Add(args)) => add::cmd(&mut db, args),
            Some(Commands::List) => list::cmd(&mut db),
            Some(Commands::Show { id }) => list::show(&mut db, &id),
            Some(Commands::Search { query }) => search::cmd(&mut db, &query),
            Some(Commands::Update(args)) => update::cmd(&mut db, args),
            Some(Commands::Delete(args)) => delete::cmd(&mut db, args),
            Some(Commands::Export(args)) => export::cmd(&mut db, args),
            Some(Commands::Init(_)) => Ok(()),
        }
    }
}

/// Opens the configured database and verifies it answers.
fn connect() -> Result<Db> {
    msg_debug!(Message::TestingConnection);
    let mut db = Db::new()?;
    if !db.test_connection() {
        msg_error!(Message::ConnectionFailed);
        msg_print!(Message::ConnectionChecklist);
        msg_bail_anyhow!(Message::DbConnectionFailed(db.describe_target()));
    }
    msg_debug!(Message::ConnectionSuccessful);
    Ok(db)
}

/// Lets the user pick a record. Returns `None` when there is nothing to pick.
fn select_student(db: &mut Db, prompt: Message) -> Result<Option<String>> {
    let students = Students::new(db).list();
    if students.is_empty() {
        msg_info!(Message::NoStudentsFound);
        return Ok(None);
    }

    let items: Vec<String> = students.iter().map(|s| format!("{} - {}", s.id, s.name)).collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .items(&items)
        .default(0)
        .interact()?;

    Ok(Some(students[selection].id.clone()))
}

/// Re-reads all records and prints them. Called after every change.
fn refresh(db: &mut Db) {
    let mut students = Students::new(db);
    let all = students.list();
    msg_print!(Message::StudentsHeader, true);
    View::students(&all);
    msg_print!(Message::StudentsCount(all.len()));
}
