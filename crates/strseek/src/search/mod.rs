// Index search entry point.
//
// Flow: raw offset -> normalize_offset -> route by pattern kind -> matcher.
// Regex outcomes are written to the caller's `LastMatch`; byte and literal
// searches leave it alone.

mod byte;
mod literal;
mod offset;
mod pattern;

pub use byte::find_byte;
pub use literal::find_literal;
pub use offset::normalize_offset;
pub use pattern::find_regex;

use crate::match_state::{LastMatch, with_thread_last_match};
use crate::regexp::Regexp;

/// What to look for. The three kinds are fixed; dispatch is exhaustive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    /// A single byte value. Values outside `0..=255` never match.
    Byte(i64),
    /// A byte sequence matched verbatim.
    Literal(Vec<u8>),
    /// A compiled regular expression.
    Regex(Regexp),
}

impl Pattern {
    pub fn byte(value: i64) -> Self {
        Pattern::Byte(value)
    }

    pub fn literal(needle: impl AsRef<[u8]>) -> Self {
        Pattern::Literal(needle.as_ref().to_vec())
    }

    pub fn regex(regexp: Regexp) -> Self {
        Pattern::Regex(regexp)
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Pattern::Byte(_) => "byte",
            Pattern::Literal(_) => "literal",
            Pattern::Regex(_) => "regexp",
        }
    }
}

impl From<Regexp> for Pattern {
    fn from(regexp: Regexp) -> Self {
        Pattern::Regex(regexp)
    }
}

/// Index of the first occurrence of `pattern` in `subject` at or after
/// `offset` (default 0; negative counts from the end).
///
/// Regex searches record their match in `last_match`, or clear it when they
/// fail, including when the offset is out of range.
pub fn index(
    subject: &[u8],
    pattern: &Pattern,
    offset: Option<i64>,
    last_match: &mut LastMatch,
) -> Option<usize> {
    let len = subject.len();
    let raw = offset.unwrap_or(0);

    let Some(start) = normalize_offset(raw, len) else {
        tracing::trace!(raw, len, kind = pattern.kind_name(), "offset out of range");
        if let Pattern::Regex(_) = pattern {
            last_match.clear();
        }
        return None;
    };

    tracing::trace!(start, len, kind = pattern.kind_name(), "index search");
    match pattern {
        Pattern::Byte(value) => find_byte(subject, *value, start),
        Pattern::Literal(needle) => find_literal(subject, needle, start),
        Pattern::Regex(regexp) => match find_regex(subject, regexp, start) {
            Some(data) => {
                let begin = data.begin(0);
                last_match.record(data);
                begin
            }
            None => {
                last_match.clear();
                None
            }
        },
    }
}

/// [`index`] against the calling thread's recorder.
pub fn index_in_thread(subject: &[u8], pattern: &Pattern, offset: Option<i64>) -> Option<usize> {
    with_thread_last_match(|last_match| index(subject, pattern, offset, last_match))
}
