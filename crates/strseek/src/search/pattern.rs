use crate::match_state::MatchData;
use crate::regexp::Regexp;

/// Regex search from an absolute `start`.
///
/// Anchored patterns get exactly one trial at `start`; everything else uses
/// the engine's at-or-after search. An anchored pattern is never retried at a
/// later position.
pub fn find_regex(subject: &[u8], regexp: &Regexp, start: usize) -> Option<MatchData> {
    let spans = if regexp.is_anchored() {
        regexp.match_at(subject, start)
    } else {
        regexp.search_from(subject, start)
    }?;
    Some(MatchData::new(subject, regexp, spans))
}
