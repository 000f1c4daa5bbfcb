/// Data carried through the shuffle pipeline.
///
/// The algorithms are generic over the item type; `Song` is the item the CLI
/// feeds in, and `Tagged` remembers which contributor an item came from so the
/// final order can be audited.
use std::fmt;

use crate::fairness::FairnessReport;

/// A song: the opaque item being reordered. Only the two display fields exist.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Song {
    pub title: String,
    /// Whoever the song is credited to (artist, or the person who added it).
    pub owner: String,
}

impl Song {
    pub fn new(title: impl Into<String>, owner: impl Into<String>) -> Self {
        Song {
            title: title.into(),
            owner: owner.into(),
        }
    }

    /// Parse a `title,owner` line.
    ///
    /// Exactly two comma-separated fields are required; both are trimmed.
    /// Anything else (no comma, extra commas, an empty title) yields `None`.
    pub fn parse(line: &str) -> Option<Song> {
        let mut fields = line.split(',');
        let title = fields.next()?.trim();
        let owner = fields.next()?.trim();
        if fields.next().is_some() || title.is_empty() {
            return None;
        }
        Some(Song::new(title, owner))
    }

    /// The `title,owner` form that `parse` accepts.
    pub fn to_line(&self) -> String {
        format!("{},{}", self.title, self.owner)
    }
}

impl fmt::Display for Song {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {}", self.title, self.owner)
    }
}

/// An item paired with the index of the contributor list it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tagged<T> {
    /// Position of the owning list in the caller's contributor order (0..N).
    pub contributor: usize,
    pub item: T,
}

/// Output of a full pipeline run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Playlist<T> {
    entries: Vec<Tagged<T>>,
    contributors: usize,
    songs_per_contributor: usize,
    dropped: usize,
}

impl<T> Playlist<T> {
    pub(crate) fn new(
        entries: Vec<Tagged<T>>,
        contributors: usize,
        songs_per_contributor: usize,
        dropped: usize,
    ) -> Self {
        Playlist {
            entries,
            contributors,
            songs_per_contributor,
            dropped,
        }
    }

    /// Final order, with each item's contributor index.
    pub fn entries(&self) -> &[Tagged<T>] {
        &self.entries
    }

    pub fn items(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|e| &e.item)
    }

    pub fn into_items(self) -> Vec<T> {
        self.entries.into_iter().map(|e| e.item).collect()
    }

    /// Contributor index at each position of the final order.
    pub fn contributor_order(&self) -> Vec<usize> {
        self.entries.iter().map(|e| e.contributor).collect()
    }

    /// Consecutive cycles of one item per contributor.
    pub fn windows(&self) -> std::slice::ChunksExact<'_, Tagged<T>> {
        self.entries.chunks_exact(self.contributors.max(1))
    }

    pub fn contributors(&self) -> usize {
        self.contributors
    }

    pub fn songs_per_contributor(&self) -> usize {
        self.songs_per_contributor
    }

    /// Items left out because contributor lists had unequal lengths.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn fairness(&self) -> FairnessReport {
        FairnessReport::from_order(&self.contributor_order(), self.contributors)
    }
}
