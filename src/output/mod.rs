//! Output module for persisting and displaying harvested records
//!
//! This module handles:
//! - Writing records as a JSON array and as CSV
//! - Saving both files next to each other under one base name
//! - Printing a result table to the terminal

mod csv_writer;
mod display;
mod json_writer;
mod traits;

pub use csv_writer::CsvWriter;
pub use display::{format_records, print_records};
pub use json_writer::JsonWriter;
pub use traits::{OutputError, OutputResult, RecordWriter};

use crate::config::OutputConfig;
use crate::record::ArticleRecord;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Paths of the files written by [`save_records`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedFiles {
    pub json: PathBuf,
    pub csv: PathBuf,
}

/// Writes records with one writer to `<directory>/<base_name>.<ext>`
pub fn write_file(
    writer: &dyn RecordWriter,
    records: &[ArticleRecord],
    directory: &Path,
    base_name: &str,
) -> OutputResult<PathBuf> {
    let path = directory.join(format!("{}.{}", base_name, writer.extension()));
    let mut file = BufWriter::new(File::create(&path)?);
    writer.write_records(records, &mut file)?;
    Ok(path)
}

/// Saves records as JSON and CSV
///
/// # Returns
///
/// * `Ok(Some(SavedFiles))` - Both files were written
/// * `Ok(None)` - There was nothing to save; no file was created
/// * `Err(OutputError)` - Writing failed
pub fn save_records(
    records: &[ArticleRecord],
    config: &OutputConfig,
) -> OutputResult<Option<SavedFiles>> {
    if records.is_empty() {
        tracing::warn!("No records to save, skipping output");
        return Ok(None);
    }

    let directory = Path::new(&config.directory);
    std::fs::create_dir_all(directory)?;

    let json = write_file(&JsonWriter, records, directory, &config.base_name)?;
    let csv = write_file(&CsvWriter, records, directory, &config.base_name)?;

    tracing::info!(
        "Saved {} records to {} and {}",
        records.len(),
        json.display(),
        csv.display()
    );

    Ok(Some(SavedFiles { json, csv }))
}
