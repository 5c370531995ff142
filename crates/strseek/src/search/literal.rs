use memchr::memmem;

/// First index `>= start` where `needle` occurs verbatim.
///
/// The empty needle matches at `start` itself for any `start <= len`.
pub fn find_literal(subject: &[u8], needle: &[u8], start: usize) -> Option<usize> {
    let tail = subject.get(start..)?;
    if needle.is_empty() {
        return Some(start);
    }
    memmem::find(tail, needle).map(|pos| start + pos)
}
