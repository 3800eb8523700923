//! Record source and output sink.
//!
//! ## Input Format
//!
//! One input file per data size, named `{size}.txt`, containing
//! whitespace-delimited fields in the order
//! `year squad name date shift_number`, with the record count known a priori.
//!
//! A file shorter than the declared count is not an error: the reader keeps
//! producing records whose remaining fields are empty strings, exactly as the
//! declared-size contract requires. An unopenable file is fatal to the whole
//! run and surfaces as [`DatasetError::Read`].
//!
//! ## Output Format
//!
//! The sort benchmark persists one sorted copy per size as
//! `data_{size}_sorted.txt`, one [`Camp`] display line per record
//! (`year squad shift_number name`; `date` is dropped).

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::record::Camp;

/// I/O failures of the record source and sink.
///
/// Both variants carry the offending path; the driver treats either as fatal.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The input file could not be opened or read.
    #[error("couldn't read input file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The sorted output file could not be created or written.
    #[error("couldn't write output file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Input file name for a benchmark size: `{size}.txt`.
pub fn input_file_name(size: usize) -> String {
    format!("{size}.txt")
}

/// Sorted-artifact file name for a benchmark size: `data_{size}_sorted.txt`.
pub fn sorted_file_name(size: usize) -> String {
    format!("data_{size}_sorted.txt")
}

/// Load exactly `count` records from a whitespace-delimited file.
///
/// Fields are consumed five at a time in input order
/// (`year squad name date shift_number`). When the file runs out of tokens
/// early, the remaining fields stay empty; short input is loose by contract,
/// not an error.
///
/// # Errors
///
/// [`DatasetError::Read`] when the file cannot be opened or read at all.
pub fn read_records(path: impl AsRef<Path>, count: usize) -> Result<Vec<Camp>, DatasetError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| DatasetError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut tokens = content.split_whitespace();
    let mut next_field = || tokens.next().unwrap_or_default().to_string();

    let mut records = Vec::with_capacity(count);
    for _ in 0..count {
        let year = next_field();
        let squad = next_field();
        let name = next_field();
        let date = next_field();
        let shift_number = next_field();
        records.push(Camp::new(year, squad, name, date, shift_number));
    }

    Ok(records)
}

/// Persist a sorted record sequence, one display line per record.
///
/// # Errors
///
/// [`DatasetError::Write`] when the file cannot be created or a line cannot
/// be written.
pub fn write_sorted(path: impl AsRef<Path>, records: &[Camp]) -> Result<(), DatasetError> {
    let path = path.as_ref();
    let wrap = |source| DatasetError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(wrap)?;
    let mut out = BufWriter::new(file);
    for record in records {
        writeln!(out, "{record}").map_err(wrap)?;
    }
    out.flush().map_err(wrap)
}

// ============================================================================
// Unit Tests
// ============================================================================
