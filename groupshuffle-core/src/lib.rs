//! groupshuffle-core: fair interleave-and-shuffle of contributor lists.
//!
//! Each contributor's list is shuffled, the lists are dealt out round-robin
//! (one song per contributor per cycle), then every cycle is shuffled on its
//! own. Nobody plays twice in a cycle and nobody waits more than
//! `2 * (N - 1)` songs between turns. No IO, no printing: bring your own lists.
//!
//! # Quick start
//!
//! ```rust
//! use groupshuffle_core::{GroupShuffler, Song};
//!
//! let lists = vec![
//!     vec![Song::new("Hey Jude", "The Beatles"), Song::new("Yesterday", "The Beatles")],
//!     vec![Song::new("Hurt", "Johnny Cash"), Song::new("Jolene", "Dolly Parton")],
//!     vec![Song::new("Creep", "Radiohead"), Song::new("Wonderwall", "Oasis")],
//! ];
//!
//! let playlist = GroupShuffler::from_seed(7).run(lists).unwrap();
//!
//! assert_eq!(playlist.len(), 6);
//! assert!(playlist.fairness().is_within_bounds());
//! for song in playlist.items() {
//!     println!("{song}");
//! }
//! ```

pub mod distribute;
pub mod error;
pub mod fairness;
pub mod pipeline;
pub mod sections;
pub mod shuffle;
pub mod types;

// Re-export primary public API at crate root.
pub use distribute::{distribute, distribute_lists, songs_per_contributor, Distribution, UnevenPolicy};
pub use error::{Result, ShuffleError};
pub use fairness::FairnessReport;
pub use pipeline::{blend, GroupShuffler, ShuffleOptions};
pub use sections::shuffle_sections;
pub use shuffle::{shuffle, shuffled};
pub use types::{Playlist, Song, Tagged};
