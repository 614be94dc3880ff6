//! CSV output of collected records.
//!
//! The file is UTF-8 with a byte-order mark so spreadsheet applications pick the
//! right encoding for non-Latin titles and names.

use crate::error::{Error, Result};
use crate::types::MovieRecord;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// UTF-8 byte-order mark
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Result of a write attempt
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WriteOutcome {
    /// Records were written to `path`
    Written {
        /// Number of data rows
        count: usize,
        /// Output file
        path: PathBuf,
    },
    /// Nothing to write; no file was created
    NoData,
}

impl std::fmt::Display for WriteOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WriteOutcome::Written { count, path } => {
                write!(f, "saved {} movies to {}", count, path.display())
            }
            WriteOutcome::NoData => write!(f, "no valid data collected"),
        }
    }
}

/// Write `records` to a CSV file at `path`
///
/// One header row with the [`MovieRecord::FIELDS`] names, then one row per record
/// in the given order. An empty slice writes nothing and returns
/// [`WriteOutcome::NoData`].
///
/// # Errors
/// Returns [`Error::Io`] or [`Error::Csv`] if the file cannot be created or written.
pub fn write_records(records: &[MovieRecord], path: &Path) -> Result<WriteOutcome> {
    if records.is_empty() {
        info!("No records to write");
        return Ok(WriteOutcome::NoData);
    }

    let io_err = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut out = BufWriter::new(file);
    out.write_all(UTF8_BOM).map_err(io_err)?;

    let mut writer = csv::Writer::from_writer(out);
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush().map_err(io_err)?;

    info!(count = records.len(), path = %path.display(), "Wrote movie records");

    Ok(WriteOutcome::Written {
        count: records.len(),
        path: path.to_path_buf(),
    })
}
