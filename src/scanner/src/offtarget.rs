use rayon::prelude::*;

use codec::{symbol_hamming_distance, PAM_OFF, PAM_RIGHT_BIT};

use crate::query::Query;

/// Distances at or below which a guide is reported as an off-target.
const MAX_DISTANCE: u8 = 4;

/// Convention from reference GPU deployments of this kernel: the bounded
/// device-side result buffer holds at most this many IDs per query.
pub const OVERFLOW_THRESHOLD: usize = 2000;

/// Score one stored guide word against a query's precomputed strand
/// encodings. Pure and allocation-free so a GPU port only needs to wrap it
/// in a per-thread kernel body.
///
/// Returns the symbol-Hamming distance over the 20-nt protospacer if it is
/// at most [`MAX_DISTANCE`], `None` otherwise (including for a guide whose
/// protospacer contained an `N`, since [`codec::ERROR_WORD`] cannot land
/// within 4 substitutions of any legal query encoding).
#[must_use]
pub fn score_one(guide: u64, query: &Query) -> Option<u8> {
    let comparand = if (guide >> PAM_RIGHT_BIT) & 1 == 1 { query.q1 } else { query.q0 };
    let diff = (guide ^ comparand) & PAM_OFF;
    let distance = symbol_hamming_distance(diff) as u8;
    (distance <= MAX_DISTANCE).then_some(distance)
}

/// Result of scanning an entire guide array for off-targets of one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OffTargetResult {
    /// `summary[d]` is the number of guides at Hamming distance `d`.
    pub summary: [u32; 5],
    /// Ascending 1-based IDs of every guide at distance ≤ [`MAX_DISTANCE`].
    pub off_target_ids: Vec<usize>,
    /// Set when more than [`OVERFLOW_THRESHOLD`] IDs were found, so callers
    /// emulating a bounded-buffer GPU path can detect truncation-worthy
    /// queries without this implementation actually truncating.
    pub overflow: bool,
}

/// Scan every guide in `guides` against `query`, in parallel.
///
/// The per-guide work (`score_one`) is embarrassingly parallel; `rayon`'s
/// indexed iterators preserve input order through the `filter_map` +
/// `collect` below even though individual guides are scored out of order,
/// so `off_target_ids` comes out ascending with no extra sort.
///
/// A query containing `N` short-circuits to an empty result: its strand
/// encodings equal [`codec::ERROR_WORD`], which would otherwise spuriously
/// score distance 0 against every `N`-bearing stored guide.
#[must_use]
pub fn scan(guides: &[u64], query: &Query) -> OffTargetResult {
    if query.contains_n {
        return OffTargetResult { summary: [0; 5], off_target_ids: Vec::new(), overflow: false };
    }

    let summary = guides
        .par_iter()
        .fold(
            || [0u32; 5],
            |mut acc, &guide| {
                if let Some(d) = score_one(guide, query) {
                    acc[d as usize] += 1;
                }
                acc
            },
        )
        .reduce(
            || [0u32; 5],
            |mut a, b| {
                for i in 0..5 {
                    a[i] += b[i];
                }
                a
            },
        );

    let off_target_ids: Vec<usize> = guides
        .par_iter()
        .enumerate()
        .filter_map(|(i, &guide)| score_one(guide, query).map(|_| i + 1))
        .collect();

    let overflow = off_target_ids.len() > OVERFLOW_THRESHOLD;
    OffTargetResult { summary, off_target_ids, overflow }
}
