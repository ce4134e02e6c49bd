//! CLI commands for data export
//!
//! Full-state exports in JSON or YAML, to a file or stdout.

use crate::error::{TrakrError, TrakrResult};
use crate::export::{export_full_json, export_full_yaml};
use crate::storage::Storage;
use clap::Subcommand;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export all data as JSON
    Json {
        /// Output file path (writes to stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Export all data as YAML
    Yaml {
        /// Output file path (writes to stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle export commands
pub fn handle_export_command(storage: &Storage, cmd: ExportCommands) -> TrakrResult<()> {
    match cmd {
        ExportCommands::Json { output, pretty } => match output {
            Some(path) => {
                let mut writer = create_file_writer(&path)?;
                export_full_json(storage, &mut writer, pretty)?;
                println!("Full data export written to: {}", path.display());
            }
            None => {
                let stdout = std::io::stdout();
                let mut writer = stdout.lock();
                export_full_json(storage, &mut writer, pretty)?;
            }
        },

        ExportCommands::Yaml { output } => match output {
            Some(path) => {
                let mut writer = create_file_writer(&path)?;
                export_full_yaml(storage, &mut writer)?;
                println!("Full data export written to: {}", path.display());
            }
            None => {
                let stdout = std::io::stdout();
                let mut writer = stdout.lock();
                export_full_yaml(storage, &mut writer)?;
            }
        },
    }

    Ok(())
}

fn create_file_writer(path: &Path) -> TrakrResult<BufWriter<File>> {
    let file = File::create(path).map_err(|e| {
        TrakrError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    Ok(BufWriter::new(file))
}
