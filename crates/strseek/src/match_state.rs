// Last-match bookkeeping.
//
// `LastMatch` is the recorder: written only by regex searches, cleared when a
// regex search fails, never touched by byte or literal searches. It is an
// explicit value owned by the caller; `with_thread_last_match` offers one
// recorder per thread for callers that want implicit `$~`-style state.

use std::cell::RefCell;
use std::sync::Arc;

use ahash::AHashMap;
use smol_str::SmolStr;

use crate::regexp::{GroupSpans, Regexp};

/// Snapshot of a successful regex match. Owns a copy of the subject so it
/// stays valid after the searched buffer goes away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchData {
    subject: Arc<[u8]>,
    spans: GroupSpans,
    names: AHashMap<SmolStr, usize>,
    regexp: Regexp,
}

impl MatchData {
    pub fn new(subject: &[u8], regexp: &Regexp, spans: GroupSpans) -> Self {
        let names = regexp
            .group_names()
            .into_iter()
            .enumerate()
            .filter_map(|(group, name)| name.map(|name| (name, group)))
            .collect();
        Self {
            subject: Arc::from(subject),
            spans,
            names,
            regexp: regexp.clone(),
        }
    }

    /// Text of group `group` (0 is the whole match), if it participated.
    pub fn get(&self, group: usize) -> Option<&[u8]> {
        let span = self.spans.get(group)?.as_ref()?;
        Some(&self.subject[span.clone()])
    }

    /// Text of the group named `name`.
    pub fn named(&self, name: &str) -> Option<&[u8]> {
        let group = *self.names.get(name)?;
        self.get(group)
    }

    pub fn begin(&self, group: usize) -> Option<usize> {
        self.offset(group).map(|(begin, _)| begin)
    }

    pub fn end(&self, group: usize) -> Option<usize> {
        self.offset(group).map(|(_, end)| end)
    }

    pub fn offset(&self, group: usize) -> Option<(usize, usize)> {
        let span = self.spans.get(group)?.as_ref()?;
        Some((span.start, span.end))
    }

    /// Number of groups, the whole match included.
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Groups 1.. in order; `None` for groups that did not participate.
    pub fn captures(&self) -> Vec<Option<&[u8]>> {
        (1..self.spans.len()).map(|group| self.get(group)).collect()
    }

    pub fn pre_match(&self) -> &[u8] {
        match self.offset(0) {
            Some((begin, _)) => &self.subject[..begin],
            None => &[],
        }
    }

    pub fn post_match(&self) -> &[u8] {
        match self.offset(0) {
            Some((_, end)) => &self.subject[end..],
            None => &[],
        }
    }

    pub fn subject(&self) -> &[u8] {
        &self.subject
    }

    pub fn regexp(&self) -> &Regexp {
        &self.regexp
    }

    /// Plain-data view used for reporting.
    pub fn summary(&self) -> MatchSummary {
        let (begin, end) = self.offset(0).unwrap_or((0, 0));
        MatchSummary {
            begin,
            end,
            groups: (0..self.spans.len())
                .map(|group| {
                    self.get(group)
                        .map(|text| String::from_utf8_lossy(text).into_owned())
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MatchSummary {
    pub begin: usize,
    pub end: usize,
    pub groups: Vec<Option<String>>,
}

/// Recorder for the most recent regex search outcome.
#[derive(Debug, Clone, Default)]
pub struct LastMatch {
    current: Option<MatchData>,
}

impl LastMatch {
    pub fn new() -> Self {
        Self { current: None }
    }

    pub fn record(&mut self, data: MatchData) {
        self.current = Some(data);
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn get(&self) -> Option<&MatchData> {
        self.current.as_ref()
    }

    pub fn take(&mut self) -> Option<MatchData> {
        self.current.take()
    }

    pub fn is_set(&self) -> bool {
        self.current.is_some()
    }
}

thread_local! {
    static THREAD_LAST_MATCH: RefCell<LastMatch> = RefCell::new(LastMatch::new());
}

/// Run `f` against this thread's recorder. `f` must not re-enter.
pub fn with_thread_last_match<R>(f: impl FnOnce(&mut LastMatch) -> R) -> R {
    THREAD_LAST_MATCH.with(|cell| f(&mut cell.borrow_mut()))
}

/// Clone of this thread's most recent regex match, if any.
pub fn last_match() -> Option<MatchData> {
    with_thread_last_match(|recorder| recorder.get().cloned())
}
