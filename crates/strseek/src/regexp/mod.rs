// Compiled regular expressions.
//
// Wraps regex-automata's meta engine and exposes the two search primitives
// the index search needs:
// - `search_from`: first match starting at or after a position
// - `match_at`:    a match starting exactly at a position, no advancing
// Both evaluate boundary assertions (`\A`, `^`, `$`, `\z`) against the whole
// haystack; the start position only narrows where a match may begin.
//
// The engine runs in byte mode: `.` and classes consume one byte, and empty
// matches may fall inside a multi-byte character. Every reported offset is a
// byte offset, the same unit the literal and byte matchers use.

mod dialect;
mod options;

use std::fmt;
use std::ops::Range;

use regex_automata::util::syntax;
use regex_automata::{Anchored, Input, PatternID, meta};
use smol_str::SmolStr;
use thiserror::Error;

pub use options::{EngineLimits, RegexpOptions};

/// Failures raised while compiling a pattern.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegexpError {
    /// The engine rejected the (rewritten) pattern.
    #[error("invalid pattern /{pattern}/: {message}")]
    Syntax { pattern: SmolStr, message: String },

    /// `\G` appears somewhere other than the very start of the pattern.
    #[error("\\G is only supported as the first token of a pattern (found at byte {position})")]
    MisplacedAnchor { position: usize },

    /// A flag character other than `i`, `m` or `x`.
    #[error("unknown regexp option '{flag}'")]
    UnknownFlag { flag: char },
}

/// Group spans of one successful match; index 0 is the whole match.
pub type GroupSpans = Vec<Option<Range<usize>>>;

/// A compiled pattern. Cloning is cheap: the engine is shared.
#[derive(Clone)]
pub struct Regexp {
    source: SmolStr,
    options: RegexpOptions,
    anchored: bool,
    engine: meta::Regex,
}

impl Regexp {
    pub fn new(source: &str) -> Result<Self, RegexpError> {
        Self::with_options(source, RegexpOptions::default())
    }

    pub fn with_options(source: &str, options: RegexpOptions) -> Result<Self, RegexpError> {
        Self::with_limits(source, options, &EngineLimits::default())
    }

    pub fn with_limits(
        source: &str,
        options: RegexpOptions,
        limits: &EngineLimits,
    ) -> Result<Self, RegexpError> {
        let translated = dialect::translate(source, options.extended)?;

        let syntax_config = syntax::Config::new()
            .utf8(false)
            .unicode(false)
            .multi_line(true)
            .case_insensitive(options.ignore_case)
            .dot_matches_new_line(options.multiline)
            .ignore_whitespace(options.extended);
        let engine_config = meta::Config::new()
            .utf8_empty(false)
            .nfa_size_limit(limits.nfa_size_limit)
            .hybrid_cache_capacity(limits.hybrid_cache_capacity);

        let engine = meta::Regex::builder()
            .configure(engine_config)
            .syntax(syntax_config)
            .build(&translated.pattern)
            .map_err(|err| RegexpError::Syntax {
                pattern: SmolStr::new(source),
                message: err.to_string(),
            })?;

        tracing::debug!(
            source,
            anchored = translated.anchored,
            flags = %options.to_flags(),
            "compiled regexp"
        );

        Ok(Self {
            source: SmolStr::new(source),
            options,
            anchored: translated.anchored,
            engine,
        })
    }

    /// Quote every metacharacter so the result matches `literal` verbatim.
    pub fn escape(literal: &str) -> String {
        let mut out = String::with_capacity(literal.len() * 2);
        for ch in literal.chars() {
            match ch {
                '\n' => out.push_str(r"\n"),
                '\t' => out.push_str(r"\t"),
                '\r' => out.push_str(r"\r"),
                '\x0C' => out.push_str(r"\f"),
                '\x0B' => out.push_str(r"\x0B"),
                ' ' => out.push_str(r"\x20"),
                _ if regex_syntax::is_meta_character(ch) => {
                    out.push('\\');
                    out.push(ch);
                }
                _ => out.push(ch),
            }
        }
        out
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn options(&self) -> RegexpOptions {
        self.options
    }

    /// True when the pattern opened with `\G`.
    pub fn is_anchored(&self) -> bool {
        self.anchored
    }

    /// Number of capture groups, not counting the implicit whole-match group.
    pub fn group_count(&self) -> usize {
        self.engine
            .group_info()
            .group_len(PatternID::ZERO)
            .saturating_sub(1)
    }

    /// Names of the capture groups, indexed like the groups themselves.
    pub fn group_names(&self) -> Vec<Option<SmolStr>> {
        self.engine
            .group_info()
            .pattern_names(PatternID::ZERO)
            .map(|name| name.map(SmolStr::new))
            .collect()
    }

    /// First match that begins at or after `start`.
    pub fn search_from(&self, haystack: &[u8], start: usize) -> Option<GroupSpans> {
        self.run(haystack, start, Anchored::No)
    }

    /// Match that begins exactly at `start`; a single trial position.
    pub fn match_at(&self, haystack: &[u8], start: usize) -> Option<GroupSpans> {
        self.run(haystack, start, Anchored::Yes)
    }

    fn run(&self, haystack: &[u8], start: usize, anchored: Anchored) -> Option<GroupSpans> {
        if start > haystack.len() {
            return None;
        }
        let input = Input::new(haystack).range(start..).anchored(anchored);
        let mut caps = self.engine.create_captures();
        self.engine.search_captures(&input, &mut caps);
        if !caps.is_match() {
            return None;
        }
        let spans = (0..caps.group_len())
            .map(|group| caps.get_group(group).map(|span| span.start..span.end))
            .collect();
        Some(spans)
    }
}

impl PartialEq for Regexp {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.options == other.options
    }
}

impl Eq for Regexp {}

impl fmt::Debug for Regexp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.source, self.options.to_flags())
    }
}

impl fmt::Display for Regexp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start_of(spans: Option<GroupSpans>) -> Option<usize> {
        spans.and_then(|groups| groups[0].as_ref().map(|span| span.start))
    }

    #[test]
    fn test_search_from_advances() {
        let re = Regexp::new("x.").unwrap();
        assert_eq!(start_of(re.search_from(b"xblaxbla", 0)), Some(0));
        assert_eq!(start_of(re.search_from(b"xblaxbla", 1)), Some(4));
        assert_eq!(start_of(re.search_from(b"xblaxbla", 5)), None);
    }

    #[test]
    fn test_match_at_does_not_advance() {
        let re = Regexp::new("x.").unwrap();
        assert_eq!(start_of(re.match_at(b"xblaxbla", 4)), Some(4));
        assert_eq!(start_of(re.match_at(b"xblaxbla", 1)), None);
    }

    #[test]
    fn test_assertions_see_whole_haystack() {
        let re = Regexp::new(r"\Abla").unwrap();
        assert_eq!(start_of(re.search_from(b"blabla", 3)), None);

        let re = Regexp::new("^bla").unwrap();
        assert_eq!(start_of(re.search_from(b"blabla", 1)), None);
        assert_eq!(start_of(re.search_from(b"bla\nbla", 1)), Some(4));
    }

    #[test]
    fn test_start_past_end_never_matches() {
        let re = Regexp::new("").unwrap();
        assert_eq!(start_of(re.search_from(b"ruby", 4)), Some(4));
        assert_eq!(start_of(re.search_from(b"ruby", 12)), None);
        assert_eq!(start_of(re.match_at(b"ruby", 12)), None);
    }

    #[test]
    fn test_options_are_applied() {
        let re = Regexp::with_options("BLA", RegexpOptions::new().ignore_case(true)).unwrap();
        assert_eq!(start_of(re.search_from(b"blablabla", 0)), Some(0));

        let re = Regexp::with_options("a.b", RegexpOptions::new().multiline(true)).unwrap();
        assert_eq!(start_of(re.search_from(b"a\nb", 0)), Some(0));
        let re = Regexp::new("a.b").unwrap();
        assert_eq!(start_of(re.search_from(b"a\nb", 0)), None);

        let re = Regexp::with_options("a b # comment", RegexpOptions::new().extended(true))
            .unwrap();
        assert_eq!(start_of(re.search_from(b"xab", 0)), Some(1));

        let re = Regexp::with_options("b # unlike \\G", RegexpOptions::new().extended(true))
            .unwrap();
        assert_eq!(start_of(re.search_from(b"xab", 0)), Some(2));
    }

    #[test]
    fn test_groups_and_names() {
        let re = Regexp::new(r"(?<first>.)(.)").unwrap();
        assert_eq!(re.group_count(), 2);
        assert_eq!(
            re.group_names(),
            vec![None, Some(SmolStr::new("first")), None]
        );
        let spans = re.search_from(b"hello", 1).unwrap();
        assert_eq!(spans, vec![Some(1..3), Some(1..2), Some(2..3)]);
    }

    #[test]
    fn test_escape_quotes_metacharacters() {
        assert_eq!(Regexp::escape("d."), r"d\.");
        assert_eq!(Regexp::escape("a+b (c)"), r"a\+b\x20\(c\)");
        assert_eq!(Regexp::escape("tab\there"), r"tab\there");

        let re = Regexp::new(&Regexp::escape("o c")).unwrap();
        assert_eq!(start_of(re.search_from(b"hello cruel", 0)), Some(4));
    }

    #[test]
    fn test_compile_errors() {
        assert!(matches!(
            Regexp::new("(unclosed"),
            Err(RegexpError::Syntax { .. })
        ));
        assert_eq!(
            Regexp::new(r"a\Gb").err(),
            Some(RegexpError::MisplacedAnchor { position: 1 })
        );
    }

    #[test]
    fn test_matches_by_byte() {
        let subject = "é".as_bytes();
        let re = Regexp::new("").unwrap();
        assert_eq!(start_of(re.search_from(subject, 1)), Some(1));
        assert_eq!(start_of(re.match_at(subject, 1)), Some(1));

        let re = Regexp::new(".b").unwrap();
        assert_eq!(start_of(re.search_from(b"a\xffb", 0)), Some(1));
        let re = Regexp::new("^.$").unwrap();
        assert_eq!(start_of(re.search_from(subject, 0)), None);
        let re = Regexp::new("^..$").unwrap();
        assert_eq!(start_of(re.search_from(subject, 0)), Some(0));

        let re = Regexp::new(&Regexp::escape("é")).unwrap();
        assert_eq!(start_of(re.search_from("caféé".as_bytes(), 4)), Some(5));
        assert_eq!(start_of(re.search_from("caféé".as_bytes(), 6)), None);
    }

    #[test]
    fn test_display_uses_literal_form() {
        let re = Regexp::with_options("bla", RegexpOptions::from_flags("i").unwrap()).unwrap();
        assert_eq!(re.to_string(), "/bla/i");
        assert!(re.clone() == re);
    }
}
