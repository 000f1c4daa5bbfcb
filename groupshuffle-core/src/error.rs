/// Precondition failures reported by the pipeline stages.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ShuffleError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShuffleError {
    /// Contributor count below one. Nothing can be distributed.
    #[error("contributor count must be at least 1, got {contributors}")]
    InvalidArgument { contributors: usize },

    /// Strict policy: a combined sequence that does not split evenly.
    #[error("{total} songs cannot be split evenly between {contributors} contributors")]
    LengthMismatch { total: usize, contributors: usize },

    /// Strict policy: contributor lists of different lengths.
    #[error("contributor lists have unequal lengths (shortest {shortest}, longest {longest})")]
    UnequalLists { shortest: usize, longest: usize },
}

/// Shared guard for every stage that takes a contributor count.
pub(crate) fn check_contributors(contributors: usize) -> Result<()> {
    if contributors < 1 {
        return Err(ShuffleError::InvalidArgument { contributors });
    }
    Ok(())
}
