//! Student roster export for backup and external analysis.
//!
//! Writes every record, ordered by roll number, either as CSV (one row per
//! student with a header) or as a pretty-printed JSON array.
//!
//! ## File Naming
//!
//! Without an explicit output path the file is named
//! `roster_export_YYYYMMDD_HHMMSS.<ext>` in the current directory.
//!
//! ```rust,no_run
//! use roster::libs::export::{Exporter, ExportFormat};
//! use roster::libs::student::Student;
//!
//! let students = vec![Student::new("S1", "Ann", "ann@x.com", "1234567890", "CS", 88.5)];
//! let exporter = Exporter::new(ExportFormat::Csv, None);
//! exporter.export(&students)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::libs::formatter::format_timestamp;
use crate::libs::student::Student;
use crate::libs::view::COLUMN_NAMES;
use anyhow::Result;
use chrono::Local;
use std::fmt;
use std::fs::File;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values with a header row.
    Csv,
    /// Pretty-printed JSON array of records.
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension().to_uppercase())
    }
}

pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let default_name = format!("roster_export_{}", Local::now().format("%Y%m%d_%H%M%S"));
        let output_path = output_path.unwrap_or_else(|| PathBuf::from(format!("{}.{}", default_name, format.extension())));

        Self { format, output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn export(&self, students: &[Student]) -> Result<()> {
        match self.format {
            ExportFormat::Csv => self.export_csv(students),
            ExportFormat::Json => self.export_json(students),
        }
    }

    fn export_csv(&self, students: &[Student]) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        let mut header: Vec<&str> = COLUMN_NAMES.to_vec();
        header.extend(["Created", "Updated"]);
        wtr.write_record(&header)?;

        for student in students {
            wtr.write_record([
                student.id.clone(),
                student.name.clone(),
                student.email.clone(),
                student.phone.clone(),
                student.course.clone(),
                student.score.to_string(),
                format_timestamp(&student.created_at),
                format_timestamp(&student.updated_at),
            ])?;
        }

        wtr.flush()?;
        Ok(())
    }

    fn export_json(&self, students: &[Student]) -> Result<()> {
        let file = File::create(&self.output_path)?;
        serde_json::to_writer_pretty(file, students)?;
        Ok(())
    }
}
