//! Error types surfaced by the search entry points.
//!
//! "Not found" is never an error: searches return `Option<usize>`. Errors are
//! reserved for contract violations at the value boundary and for patterns
//! that fail to compile.

use smol_str::SmolStr;
use thiserror::Error;

use crate::regexp::RegexpError;

/// Result alias used throughout the crate.
pub type SearchResult<T> = Result<T, SearchError>;

/// Failures raised while preparing or running an index search.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The pattern is not a byte value, byte string, regexp, or string-convertible object.
    #[error("no implicit conversion of {type_name} into String")]
    UnsupportedPatternKind { type_name: SmolStr },

    /// The start offset is neither an integer nor integer-convertible.
    #[error("no implicit conversion of {type_name} into Integer")]
    OffsetConversion { type_name: SmolStr },

    /// Argument count outside the accepted range.
    #[error("wrong number of arguments (given {given}, expected {min}..{max})")]
    WrongArgumentCount { given: usize, min: usize, max: usize },

    /// A pattern source failed to compile.
    #[error(transparent)]
    Regexp(#[from] RegexpError),
}
