//! Audit of a final order: how evenly each contributor is spread out.
//!
//! Works on contributor indices only, so it applies to any item type.

/// Spacing statistics for one final order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FairnessReport {
    pub contributors: usize,
    /// Number of complete windows of `contributors` items.
    pub windows: usize,
    /// Every complete window holds each contributor exactly once.
    pub windows_fair: bool,
    /// Largest number of other items between two songs of one contributor.
    pub max_between: usize,
    /// Longest run of one contributor's songs played back to back.
    pub max_run: usize,
}

impl FairnessReport {
    pub fn from_order(order: &[usize], contributors: usize) -> Self {
        let width = contributors.max(1);
        let windows = order.len() / width;

        let windows_fair = order.chunks_exact(width).all(|window| {
            let mut seen = vec![false; width];
            window.iter().all(|&c| c < width && !std::mem::replace(&mut seen[c], true))
        });

        let mut last_seen: Vec<Option<usize>> = vec![None; width];
        let mut max_between = 0;
        let mut max_run = 0;
        let mut run = 0;

        for (pos, &c) in order.iter().enumerate() {
            if let Some(slot) = last_seen.get_mut(c) {
                if let Some(prev) = slot.replace(pos) {
                    max_between = max_between.max(pos - prev - 1);
                }
            }

            run = if pos > 0 && order[pos - 1] == c { run + 1 } else { 1 };
            max_run = max_run.max(run);
        }

        FairnessReport {
            contributors,
            windows,
            windows_fair,
            max_between,
            max_run,
        }
    }

    /// Worst-case gap: last in one window, first in the next.
    pub fn bound_between(contributors: usize) -> usize {
        2 * contributors.saturating_sub(1)
    }

    /// With a single contributor every song is theirs, so there is no bound.
    pub fn bound_run(contributors: usize) -> Option<usize> {
        (contributors >= 2).then_some(2)
    }

    pub fn is_within_bounds(&self) -> bool {
        self.windows_fair
            && self.max_between <= Self::bound_between(self.contributors)
            && Self::bound_run(self.contributors).map_or(true, |bound| self.max_run <= bound)
    }
}
