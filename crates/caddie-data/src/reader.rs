//! CSV discovery and loading for the caddie dashboard.
//!
//! Reads shot rows exported by a launch monitor and converts them into
//! [`ShotRecord`] structs for downstream processing. This module owns the
//! whole-ingestion-fails policy: one malformed data row rejects the file,
//! because silently dropping shots would skew every aggregate built on top.

use std::path::{Path, PathBuf};

use caddie_core::error::{CaddieError, Result};
use caddie_core::models::{ShotCollection, ShotRecord};
use caddie_core::schema::{self, ColumnIndex};
use tracing::{debug, warn};

// ── Public API ────────────────────────────────────────────────────────────────

/// Find all `.csv` files recursively under `data_path`, sorted by path.
pub fn find_csv_files(data_path: &Path) -> Vec<PathBuf> {
    if !data_path.exists() {
        warn!("Data path does not exist: {}", data_path.display());
        return Vec::new();
    }

    let mut files: Vec<PathBuf> = walkdir::WalkDir::new(data_path)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry.file_type().is_file()
                && entry
                    .path()
                    .extension()
                    .map(|ext| ext == "csv")
                    .unwrap_or(false)
        })
        .map(|entry| entry.into_path())
        .collect();

    files.sort();
    files
}

/// Load and validate one launch-monitor CSV export.
///
/// Returns `(shots, summary_rows_skipped)`. Shots keep their source row
/// order; loading the same file twice yields identical collections.
///
/// Summary rows (an empty club cell or the monitor's `"Average"` footer) are
/// not shots and are skipped with a count. Any other defect is fatal to the
/// whole load:
///
/// * a missing required header → [`CaddieError::MissingColumns`]
/// * a non-numeric or absent value in a numeric field →
///   [`CaddieError::MalformedRow`] naming the 1-based data row and column
pub fn load_shots(file_path: &Path) -> Result<(ShotCollection, usize)> {
    let file = std::fs::File::open(file_path).map_err(|source| CaddieError::FileRead {
        path: file_path.to_path_buf(),
        source,
    })?;

    // flexible() so short rows surface as MalformedRow with the column named,
    // instead of the csv crate's opaque unequal-lengths error.
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let headers = reader.headers()?.clone();
    let index = ColumnIndex::from_headers(headers.iter())?;

    let mut shots: ShotCollection = Vec::new();
    let mut summary_rows = 0usize;

    for (i, record) in reader.records().enumerate() {
        let record = record?;
        let row = i + 1;

        let club = record.get(index.club).unwrap_or("").trim();
        if schema::is_summary_row(club) {
            summary_rows += 1;
            continue;
        }

        shots.push(ShotRecord {
            club: club.to_string(),
            carry: parse_numeric(&record, index.carry, schema::COL_CARRY, row)?,
            offline: parse_numeric(&record, index.offline, schema::COL_OFFLINE, row)?,
            total: parse_numeric(&record, index.total, schema::COL_TOTAL, row)?,
            ball_speed: parse_numeric(&record, index.ball_speed, schema::COL_BALL_SPEED, row)?,
            launch_angle: parse_numeric(&record, index.launch_angle, schema::COL_LAUNCH_ANGLE, row)?,
            spin_rate: parse_numeric(&record, index.spin_rate, schema::COL_SPIN_RATE, row)?,
        });
    }

    debug!(
        "Loaded {} shots from {} ({} summary rows skipped)",
        shots.len(),
        file_path.display(),
        summary_rows,
    );

    Ok((shots, summary_rows))
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Parse the numeric field at `column_index`, failing with a
/// [`CaddieError::MalformedRow`] that identifies the offending cell.
fn parse_numeric(
    record: &csv::StringRecord,
    column_index: usize,
    column: &str,
    row: usize,
) -> Result<f64> {
    let raw = record.get(column_index).unwrap_or("").trim();
    raw.parse::<f64>().map_err(|_| CaddieError::MalformedRow {
        row,
        column: column.to_string(),
        value: raw.to_string(),
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
