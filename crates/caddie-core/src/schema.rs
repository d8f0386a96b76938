//! CSV schema contract for launch-monitor exports.
//!
//! This is the single boundary where stringly-typed column lookups happen;
//! everything downstream works with the typed [`crate::models::ShotRecord`].

use crate::error::{CaddieError, Result};

/// Header cell for the club name column.
pub const COL_CLUB: &str = "Club";
/// Header cell for carry distance, yards.
pub const COL_CARRY: &str = "Carry(yd)";
/// Header cell for lateral deviation, yards (signed).
pub const COL_OFFLINE: &str = "Offline(yd)";
/// Header cell for total distance, yards.
pub const COL_TOTAL: &str = "Total(yd)";
/// Header cell for ball speed, mph.
pub const COL_BALL_SPEED: &str = "Ball Speed(mph)";
/// Header cell for launch angle, degrees.
pub const COL_LAUNCH_ANGLE: &str = "Launch Angle";
/// Header cell for spin rate, rpm.
pub const COL_SPIN_RATE: &str = "Spin Rate";

/// Every column an export must carry to be ingestible.
///
/// Matching is case-sensitive after surrounding whitespace is trimmed
/// (monitors pad some header cells). Column order is irrelevant and extra
/// columns are ignored.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    COL_CLUB,
    COL_CARRY,
    COL_OFFLINE,
    COL_TOTAL,
    COL_BALL_SPEED,
    COL_LAUNCH_ANGLE,
    COL_SPIN_RATE,
];

/// Club-cell label the monitor writes on its per-club summary rows.
/// Such rows are footer output, not shots, and are skipped at ingestion.
pub const SUMMARY_CLUB_LABEL: &str = "Average";

/// Returns `true` for rows that are summary/footer output rather than shots:
/// an empty club cell or the monitor's `"Average"` label.
pub fn is_summary_row(club: &str) -> bool {
    club.is_empty() || club == SUMMARY_CLUB_LABEL
}

// ── ColumnIndex ───────────────────────────────────────────────────────────────

/// Resolved positions of the required columns within one file's header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnIndex {
    pub club: usize,
    pub carry: usize,
    pub offline: usize,
    pub total: usize,
    pub ball_speed: usize,
    pub launch_angle: usize,
    pub spin_rate: usize,
}

impl ColumnIndex {
    /// Locate every required column in `headers` (cells trimmed before
    /// comparison). Fails with [`CaddieError::MissingColumns`] listing all
    /// absent headers, so the user can fix the export in one pass.
    pub fn from_headers<'a, I>(headers: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let trimmed: Vec<&str> = headers.into_iter().map(str::trim).collect();

        let mut missing: Vec<String> = Vec::new();
        let mut require = |name: &str| match trimmed.iter().position(|h| *h == name) {
            Some(idx) => idx,
            None => {
                missing.push(name.to_string());
                // Unused: a non-empty `missing` list fails the whole call.
                usize::MAX
            }
        };

        let index = Self {
            club: require(COL_CLUB),
            carry: require(COL_CARRY),
            offline: require(COL_OFFLINE),
            total: require(COL_TOTAL),
            ball_speed: require(COL_BALL_SPEED),
            launch_angle: require(COL_LAUNCH_ANGLE),
            spin_rate: require(COL_SPIN_RATE),
        };

        if missing.is_empty() {
            Ok(index)
        } else {
            Err(CaddieError::MissingColumns(missing))
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
