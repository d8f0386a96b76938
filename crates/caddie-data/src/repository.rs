//! Per-session shot repository.
//!
//! One [`ShotRepository`] is built per ingested file and owned by that
//! session alone; there is no process-wide store, so concurrent sessions
//! can never observe each other's filtered view. The repository is
//! read-only after construction.

use std::collections::BTreeSet;

use caddie_core::models::{ClubFilter, DispersionPoint, ShotCollection, ShotRecord};

/// Read-only view over one session's validated shots, answering filter
/// queries for the display layer.
#[derive(Debug, Clone)]
pub struct ShotRepository {
    shots: ShotCollection,
}

impl ShotRepository {
    /// Wrap a validated shot collection.
    pub fn new(shots: ShotCollection) -> Self {
        Self { shots }
    }

    /// All shots in source row order.
    pub fn shots(&self) -> &[ShotRecord] {
        &self.shots
    }

    /// Total number of shots in the session.
    pub fn len(&self) -> usize {
        self.shots.len()
    }

    /// `true` when the session holds no shots (header-only export).
    pub fn is_empty(&self) -> bool {
        self.shots.is_empty()
    }

    /// The club names present in this session, sorted, for populating
    /// filter controls deterministically.
    pub fn distinct_clubs(&self) -> BTreeSet<String> {
        self.shots.iter().map(|s| s.club.clone()).collect()
    }

    /// The shots passing `filter`, preserving source row order.
    ///
    /// An empty selection yields every shot
    /// ([`ClubFilter::EMPTY_SELECTION_SELECTS_ALL`]); a selection matching
    /// nothing yields an empty sequence, which is a valid result, not an
    /// error.
    pub fn filter(&self, filter: &ClubFilter) -> Vec<&ShotRecord> {
        self.shots.iter().filter(|s| filter.matches(&s.club)).collect()
    }

    /// The filtered shots projected onto (offline, carry) for the
    /// dispersion scatter. Pure projection of [`ShotRepository::filter`];
    /// no additional computation.
    pub fn dispersion(&self, filter: &ClubFilter) -> Vec<DispersionPoint> {
        self.filter(filter)
            .into_iter()
            .map(DispersionPoint::from)
            .collect()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
