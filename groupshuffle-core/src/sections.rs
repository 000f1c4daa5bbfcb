/// Per-window shuffle of a round-robin sequence.
///
/// Each window of N consecutive items is one full cycle, one item per
/// contributor. Shuffling inside a window hides the contributor order while
/// keeping these bounds:
///
/// - no contributor appears twice in a window;
/// - at most `2 * (N - 1)` items sit between two songs of one contributor
///   (last in one window, first in the next, e.g. `ABCD-DBCA` for A);
/// - at most two songs of one contributor play back to back, and only across
///   a window boundary.
use rand::Rng;
use tracing::debug;

use crate::error::{check_contributors, Result};
use crate::shuffle::shuffle;

/// Shuffle every complete window of `contributors` items independently.
///
/// A trailing partial window (length not a multiple of `contributors`) is
/// left in place. `distribute` never produces one.
pub fn shuffle_sections<T, R: Rng + ?Sized>(
    mut distributed: Vec<T>,
    contributors: usize,
    rng: &mut R,
) -> Result<Vec<T>> {
    check_contributors(contributors)?;

    let mut windows = distributed.chunks_exact_mut(contributors);
    for window in &mut windows {
        shuffle(window, rng);
    }
    let remainder = windows.into_remainder().len();

    debug!(
        contributors,
        windows = distributed.len() / contributors,
        remainder,
        "Shuffled sections"
    );

    Ok(distributed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShuffleError;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// (contributor, round) pairs in round-robin order.
    fn round_robin(contributors: usize, rounds: usize) -> Vec<(usize, usize)> {
        (0..rounds)
            .flat_map(|r| (0..contributors).map(move |c| (c, r)))
            .collect()
    }

    #[test]
    fn test_windows_keep_their_members() {
        let mut rng = StdRng::seed_from_u64(11);
        let input = round_robin(4, 6);
        let out = shuffle_sections(input, 4, &mut rng).unwrap();

        assert_eq!(out.len(), 24);
        for (round, window) in out.chunks(4).enumerate() {
            let mut contributors: Vec<usize> = window.iter().map(|&(c, _)| c).collect();
            contributors.sort();
            assert_eq!(contributors, vec![0, 1, 2, 3]);
            assert!(window.iter().all(|&(_, r)| r == round), "item left its window");
        }
    }

    #[test]
    fn test_windows_are_actually_shuffled() {
        let mut rng = StdRng::seed_from_u64(3);
        let input = round_robin(5, 40);
        let out = shuffle_sections(input.clone(), 5, &mut rng).unwrap();
        assert_ne!(out, input);
    }

    #[test]
    fn test_remainder_left_untouched() {
        let mut rng = StdRng::seed_from_u64(8);
        let input: Vec<u32> = (0..11).collect();
        let out = shuffle_sections(input, 3, &mut rng).unwrap();
        assert_eq!(&out[9..], &[9, 10]);

        let mut head = out[..9].to_vec();
        head.sort();
        assert_eq!(head, (0..9).collect::<Vec<u32>>());
    }

    #[test]
    fn test_single_contributor_unchanged() {
        let mut rng = StdRng::seed_from_u64(0);
        let input = vec!["a", "b", "c"];
        assert_eq!(shuffle_sections(input.clone(), 1, &mut rng).unwrap(), input);
    }

    #[test]
    fn test_zero_contributors() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            shuffle_sections(vec![1, 2, 3], 0, &mut rng),
            Err(ShuffleError::InvalidArgument { contributors: 0 })
        );
    }

    #[test]
    fn test_empty_input() {
        let mut rng = StdRng::seed_from_u64(0);
        let out: Vec<u8> = shuffle_sections(vec![], 3, &mut rng).unwrap();
        assert!(out.is_empty());
    }
}
