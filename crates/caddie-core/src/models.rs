use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A single measured shot read from a launch-monitor CSV export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShotRecord {
    /// Club name as exported, e.g. `"Driver"` or `"7 Iron"`. Never empty.
    pub club: String,
    /// Carry distance in yards.
    pub carry: f64,
    /// Lateral deviation from the target line in yards.
    /// Negative values are left of target, positive values right.
    pub offline: f64,
    /// Total distance (carry + rollout) in yards. Not validated against
    /// `carry`; the monitor occasionally reports total < carry on chunks.
    pub total: f64,
    /// Ball speed in mph.
    pub ball_speed: f64,
    /// Launch angle in degrees.
    pub launch_angle: f64,
    /// Spin rate in rpm.
    pub spin_rate: f64,
}

/// Ordered sequence of shots; insertion order equals source row order.
pub type ShotCollection = Vec<ShotRecord>;

// ── ClubFilter ────────────────────────────────────────────────────────────────

/// A selection of club names used to narrow a shot collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClubFilter {
    selected: BTreeSet<String>,
}

impl ClubFilter {
    /// Policy: an empty selection selects every club.
    ///
    /// Clearing the last club from the filter controls would otherwise blank
    /// the whole dashboard, a state users only reach by accident. Callers
    /// must route all membership checks through [`ClubFilter::matches`] so
    /// the policy lives in exactly one place.
    pub const EMPTY_SELECTION_SELECTS_ALL: bool = true;

    /// A filter that selects all clubs.
    pub fn all() -> Self {
        Self::default()
    }

    /// Build a filter from an explicit list of club names.
    pub fn from_clubs<I, S>(clubs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            selected: clubs.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `club` passes this filter, applying the empty-selection policy.
    pub fn matches(&self, club: &str) -> bool {
        (Self::EMPTY_SELECTION_SELECTS_ALL && self.selected.is_empty())
            || self.selected.contains(club)
    }

    /// Whether `club` is explicitly part of the selection.
    ///
    /// Unlike [`ClubFilter::matches`] this does NOT apply the
    /// empty-selection policy; filter controls use it to draw checkboxes.
    pub fn is_selected(&self, club: &str) -> bool {
        self.selected.contains(club)
    }

    /// Add `club` to the selection if absent, remove it otherwise.
    pub fn toggle(&mut self, club: &str) {
        if !self.selected.remove(club) {
            self.selected.insert(club.to_string());
        }
    }

    /// Remove every club from the selection (back to "all clubs").
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Number of explicitly selected clubs.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// `true` when no club is explicitly selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

// ── Derived views ─────────────────────────────────────────────────────────────

/// Per-club aggregate over a filtered shot sequence.
///
/// Derived on every filter change and never cached; a club with zero
/// matching shots is simply absent from the output.
#[derive(Debug, Clone, PartialEq)]
pub struct ClubSummary {
    /// Club name.
    pub club: String,
    /// Number of shots contributing to the means. Always >= 1.
    pub shot_count: usize,
    /// Arithmetic mean carry in yards.
    pub mean_carry: f64,
    /// Arithmetic mean offline in yards (signed).
    pub mean_offline: f64,
}

/// One point of the dispersion scatter: a shot projected onto
/// (offline, carry), keeping the club for colour-coding.
#[derive(Debug, Clone, PartialEq)]
pub struct DispersionPoint {
    pub club: String,
    /// X coordinate: offline in yards, signed.
    pub offline: f64,
    /// Y coordinate: carry in yards.
    pub carry: f64,
}

impl From<&ShotRecord> for DispersionPoint {
    fn from(shot: &ShotRecord) -> Self {
        Self {
            club: shot.club.clone(),
            offline: shot.offline,
            carry: shot.carry,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
