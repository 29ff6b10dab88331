//! Roster export command for backup and external analysis.

use crate::{
    db::{db::Db, students::Students},
    libs::{
        export::{ExportFormat, Exporter},
        messages::Message,
    },
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    /// Output file path
    ///
    /// Defaults to `roster_export_YYYYMMDD_HHMMSS.<ext>` in the current directory.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn cmd(db: &mut Db, args: ExportArgs) -> Result<()> {
    let students = Students::new(db).list();
    let exporter = Exporter::new(args.format, args.output);

    msg_info!(Message::ExportingStudents(students.len(), args.format.to_string()));
    exporter.export(&students)?;
    msg_success!(Message::ExportCompleted(exporter.output_path().display().to_string()));
    Ok(())
}
