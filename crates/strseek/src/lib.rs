// strseek
// Offset-aware index search over byte strings: single byte values, literal
// substrings and regular expressions, with Ruby-style last-match tracking.

#[cfg(test)]
mod test;

pub mod context;
pub mod error;
pub mod match_state;
pub mod regexp;
pub mod search;
pub mod stdlib;
pub mod value;

pub use context::SearchContext;
pub use error::{SearchError, SearchResult};
pub use match_state::{LastMatch, MatchData};
pub use regexp::{EngineLimits, Regexp, RegexpError, RegexpOptions};
pub use search::{Pattern, index, index_in_thread};
pub use value::{Convert, Value};
