//! Per-club gapping aggregation over a filtered shot sequence.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use caddie_core::models::{ClubSummary, ShotRecord};

// ── OverallSummary ────────────────────────────────────────────────────────────

/// Whole-sequence totals shown under the shot table.
#[derive(Debug, Clone, PartialEq)]
pub struct OverallSummary {
    pub shot_count: usize,
    pub mean_carry: f64,
    pub mean_offline: f64,
}

// ── ClubAggregator ────────────────────────────────────────────────────────────

/// Stateless helper that groups a filtered shot sequence by club.
///
/// Pure function of its input: no state is retained between calls, and sums
/// accumulate in the input sequence's iteration order, so recomputing with
/// the same sequence yields bit-identical means.
pub struct ClubAggregator;

/// Running sums for one club.
#[derive(Debug, Clone, Default)]
struct ClubSums {
    count: usize,
    carry_sum: f64,
    offline_sum: f64,
}

impl ClubAggregator {
    /// Produce one [`ClubSummary`] per distinct club represented in `shots`.
    ///
    /// A club with zero matching shots is simply absent from the output,
    /// never emitted with a NaN or zero placeholder. Output is ordered by
    /// descending mean carry; ties are broken by ascending club name so the
    /// result is total-ordered and reproducible.
    pub fn aggregate(shots: &[&ShotRecord]) -> Vec<ClubSummary> {
        let mut sums: BTreeMap<String, ClubSums> = BTreeMap::new();

        for shot in shots {
            let entry = sums.entry(shot.club.clone()).or_default();
            entry.count += 1;
            entry.carry_sum += shot.carry;
            entry.offline_sum += shot.offline;
        }

        let mut summaries: Vec<ClubSummary> = sums
            .into_iter()
            .map(|(club, s)| ClubSummary {
                club,
                shot_count: s.count,
                mean_carry: s.carry_sum / s.count as f64,
                mean_offline: s.offline_sum / s.count as f64,
            })
            .collect();

        summaries.sort_by(|a, b| {
            b.mean_carry
                .partial_cmp(&a.mean_carry)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.club.cmp(&b.club))
        });

        summaries
    }

    /// Sum of `shot_count` across all summaries. Equals the input length of
    /// [`ClubAggregator::aggregate`] when the filter covers every record.
    pub fn total_shots(summaries: &[ClubSummary]) -> usize {
        summaries.iter().map(|s| s.shot_count).sum()
    }

    /// Mean carry/offline across the whole sequence, for the table footer.
    ///
    /// Returns `None` for an empty sequence; means over nothing are
    /// undefined and must not be fabricated.
    pub fn overall(shots: &[&ShotRecord]) -> Option<OverallSummary> {
        if shots.is_empty() {
            return None;
        }

        let mut carry_sum = 0.0;
        let mut offline_sum = 0.0;
        for shot in shots {
            carry_sum += shot.carry;
            offline_sum += shot.offline;
        }

        let count = shots.len();
        Some(OverallSummary {
            shot_count: count,
            mean_carry: carry_sum / count as f64,
            mean_offline: offline_sum / count as f64,
        })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
