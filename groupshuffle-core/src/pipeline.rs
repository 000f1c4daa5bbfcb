/// Full pipeline: shuffle each contributor, distribute round-robin, shuffle
/// each window.
///
/// One `GroupShuffler` owns one random source and threads it through every
/// shuffle it performs. Seed it for reproducible output.
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::distribute::{distribute_lists, UnevenPolicy};
use crate::error::{check_contributors, Result};
use crate::sections::shuffle_sections;
use crate::shuffle::shuffle;
use crate::types::{Playlist, Tagged};

/// Options for [`blend`].
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShuffleOptions {
    pub policy: UnevenPolicy,
    /// Fixed seed for reproducible output. `None` seeds from the OS.
    pub seed: Option<u64>,
}

pub struct GroupShuffler<R = StdRng> {
    rng: R,
    policy: UnevenPolicy,
}

impl GroupShuffler<StdRng> {
    pub fn from_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn from_os_rng() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    pub fn from_options(options: &ShuffleOptions) -> Self {
        let shuffler = match options.seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::from_os_rng(),
        };
        shuffler.policy(options.policy)
    }
}

impl<R: Rng> GroupShuffler<R> {
    pub fn with_rng(rng: R) -> Self {
        GroupShuffler {
            rng,
            policy: UnevenPolicy::default(),
        }
    }

    pub fn policy(mut self, policy: UnevenPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Shuffle one contributor's list in place.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        shuffle(items, &mut self.rng);
    }

    /// Run the whole pipeline over `lists`, one list per contributor, in
    /// contributor order. Each list is shuffled independently before
    /// distribution; the lists are consumed.
    pub fn run<T>(&mut self, lists: Vec<Vec<T>>) -> Result<Playlist<T>> {
        let contributors = lists.len();
        check_contributors(contributors)?;

        let tagged: Vec<Vec<Tagged<T>>> = lists
            .into_iter()
            .enumerate()
            .map(|(contributor, list)| {
                let mut list: Vec<Tagged<T>> = list
                    .into_iter()
                    .map(|item| Tagged { contributor, item })
                    .collect();
                shuffle(&mut list, &mut self.rng);
                debug!(contributor, songs = list.len(), "Shuffled contributor list");
                list
            })
            .collect();

        let distribution = distribute_lists(tagged, self.policy)?;
        let entries = shuffle_sections(distribution.items, contributors, &mut self.rng)?;

        debug!(
            contributors,
            songs = entries.len(),
            dropped = distribution.dropped,
            "Playlist ready"
        );

        Ok(Playlist::new(
            entries,
            contributors,
            distribution.songs_per_contributor,
            distribution.dropped,
        ))
    }

    pub fn into_rng(self) -> R {
        self.rng
    }
}

/// Run the pipeline once with a fresh shuffler built from `options`.
pub fn blend<T>(lists: Vec<Vec<T>>, options: &ShuffleOptions) -> Result<Playlist<T>> {
    GroupShuffler::from_options(options).run(lists)
}
