/// Fisher-Yates shuffle.
///
/// Randomness is always supplied by the caller. Two shuffles that should be
/// independent must draw from a source that keeps advancing between them
/// (one owned generator, threaded through), never from freshly re-seeded copies.
use rand::Rng;

/// Shuffle `items` in place into a uniformly random permutation.
///
/// Walks `i` from the last index down to 1, swapping with a uniform `k` in
/// `0..=i`. Slices of length 0 or 1 are left untouched and draw nothing from
/// `rng`. Callers that need the original order must copy it first.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let k = rng.random_range(0..=i);
        items.swap(i, k);
    }
}

/// Ownership-taking form of [`shuffle`].
pub fn shuffled<T, R: Rng + ?Sized>(mut items: Vec<T>, rng: &mut R) -> Vec<T> {
    shuffle(&mut items, rng);
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    #[test]
    fn test_shuffle_empty_and_single() {
        let mut rng = StdRng::seed_from_u64(1);

        let mut empty: Vec<u32> = vec![];
        shuffle(&mut empty, &mut rng);
        assert!(empty.is_empty());

        let mut single = vec![42];
        shuffle(&mut single, &mut rng);
        assert_eq!(single, vec![42]);
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        let original: Vec<u32> = (0..100).collect();
        let mut v = shuffled(original.clone(), &mut rng);
        assert_ne!(v, original, "100 items should not come back in order");
        v.sort();
        assert_eq!(v, original);
    }

    #[test]
    fn test_shuffle_deterministic_for_seed() {
        let a = shuffled((0..20).collect::<Vec<u32>>(), &mut StdRng::seed_from_u64(99));
        let b = shuffled((0..20).collect::<Vec<u32>>(), &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_consecutive_shuffles_differ() {
        // One advancing generator: back-to-back shuffles are not correlated.
        let mut rng = StdRng::seed_from_u64(5);
        let a = shuffled((0..20).collect::<Vec<u32>>(), &mut rng);
        let b = shuffled((0..20).collect::<Vec<u32>>(), &mut rng);
        assert_ne!(a, b);
    }

    /// Chi-square goodness of fit over the 3! = 6 permutations of [0, 1, 2].
    ///
    /// df = 5; 20.52 is the critical value at p = 0.001.
    #[test]
    fn test_shuffle_uniformity_chi_square() {
        let trials = 60_000;
        let mut rng = StdRng::seed_from_u64(2024);
        let mut counts: HashMap<[u8; 3], usize> = HashMap::new();

        for _ in 0..trials {
            let mut v = [0u8, 1, 2];
            shuffle(&mut v, &mut rng);
            *counts.entry(v).or_insert(0) += 1;
        }

        assert_eq!(counts.len(), 6, "every permutation should appear");

        let expected = trials as f64 / 6.0;
        let chi_square: f64 = counts
            .values()
            .map(|&observed| {
                let diff = observed as f64 - expected;
                diff * diff / expected
            })
            .sum();

        assert!(chi_square < 20.52, "chi-square {chi_square:.2} too high for a uniform shuffle");
    }
}
