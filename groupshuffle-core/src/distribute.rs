/// Round-robin distribution of contributor lists.
///
/// Input is N contributor lists laid end to end, each `songs_per_contributor`
/// long. Output position `p` holds contributor `p % N`'s item number `p / N`,
/// so reading in strides of N visits contributors 0, 1, .., N-1 repeatedly
/// and each contributor's own order is preserved.
use tracing::{debug, warn};

use crate::error::{check_contributors, Result, ShuffleError};

/// What to do when contributors do not bring the same number of songs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnevenPolicy {
    /// Keep the largest equal share and drop the rest from the tail.
    #[default]
    Truncate,
    /// Refuse to distribute.
    Reject,
}

/// Result of [`distribute_lists`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distribution<T> {
    pub items: Vec<T>,
    pub songs_per_contributor: usize,
    /// Items left out by `UnevenPolicy::Truncate`.
    pub dropped: usize,
}

/// Equal share of `total` items between `contributors`, rounded down.
pub fn songs_per_contributor(total: usize, contributors: usize) -> Result<usize> {
    check_contributors(contributors)?;
    Ok(total / contributors)
}

/// Distribute an already-concatenated sequence.
///
/// Under `Truncate` the first `songs_per_contributor * contributors` items are
/// kept and the tail is dropped. The split is positional: if the lists that
/// were concatenated had unequal lengths, items near the seams land in a
/// neighbouring contributor's bucket. Use [`distribute_lists`] when the
/// per-contributor boundaries are known.
pub fn distribute<T>(combined: Vec<T>, contributors: usize, policy: UnevenPolicy) -> Result<Vec<T>> {
    let total = combined.len();
    let per = songs_per_contributor(total, contributors)?;

    if total % contributors != 0 {
        match policy {
            UnevenPolicy::Reject => {
                return Err(ShuffleError::LengthMismatch { total, contributors });
            }
            UnevenPolicy::Truncate => {
                warn!(
                    total,
                    contributors,
                    dropped = total - per * contributors,
                    "Uneven combined sequence, truncating tail"
                );
            }
        }
    }

    Ok(interleave(combined, contributors, per))
}

/// Distribute separate contributor lists, one list per contributor.
///
/// Under `Truncate` every list is cut to the shortest list's length, so a
/// contributor with an empty list empties the whole result.
pub fn distribute_lists<T>(lists: Vec<Vec<T>>, policy: UnevenPolicy) -> Result<Distribution<T>> {
    let contributors = lists.len();
    check_contributors(contributors)?;

    let shortest = lists.iter().map(Vec::len).min().unwrap_or(0);
    let longest = lists.iter().map(Vec::len).max().unwrap_or(0);
    let total: usize = lists.iter().map(Vec::len).sum();

    if shortest != longest {
        match policy {
            UnevenPolicy::Reject => {
                return Err(ShuffleError::UnequalLists { shortest, longest });
            }
            UnevenPolicy::Truncate => {
                warn!(
                    shortest,
                    longest,
                    dropped = total - shortest * contributors,
                    "Contributor lists differ in length, keeping {shortest} songs each"
                );
            }
        }
    }

    let combined: Vec<T> = lists
        .into_iter()
        .flat_map(|list| list.into_iter().take(shortest))
        .collect();

    Ok(Distribution {
        items: interleave(combined, contributors, shortest),
        songs_per_contributor: shortest,
        dropped: total - shortest * contributors,
    })
}

/// Place source index `i` at `i / per + contributors * (i % per)`.
///
/// Written as the inverse walk over destinations so every item is moved
/// exactly once without requiring `Clone`.
fn interleave<T>(combined: Vec<T>, contributors: usize, per: usize) -> Vec<T> {
    let kept = per * contributors;
    debug!(contributors, songs_per_contributor = per, kept, "Distributing round-robin");

    let mut source: Vec<Option<T>> = combined.into_iter().take(kept).map(Some).collect();

    (0..kept)
        .filter_map(|dest| {
            let contributor = dest % contributors;
            let local_index = dest / contributors;
            source[contributor * per + local_index].take()
        })
        .collect()
}
