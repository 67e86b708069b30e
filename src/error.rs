use super::{MultiIndex};

/// The type of error returned by fallible operations in this crate.
///
/// All of these represent mistakes by the caller. None of them is transient,
/// so there is nothing to be gained by retrying.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    #[error("rank mismatch: expected {expected}, got {got}")]
    RankMismatch { expected: usize, got: usize },

    #[error("index {index} out of range {lower}..={upper}")]
    IndexOutOfRange {
        index: MultiIndex,
        lower: MultiIndex,
        upper: MultiIndex,
    },
}

impl Error {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Error::InvalidArgument {reason: reason.into()}
    }

    /// Returns `Ok(())` if `expected == got`, otherwise `RankMismatch`.
    pub(crate) fn check_rank(expected: usize, got: usize) -> Result<()> {
        if expected == got { Ok(()) } else { Err(Error::RankMismatch {expected, got}) }
    }
}

/// Convenience alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
