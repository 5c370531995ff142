/// Turn a caller-supplied start offset into an absolute start index.
///
/// Non-negative offsets are taken as-is; negative ones count back from the
/// end. Returns `None` when no start position exists, i.e. the offset lands
/// before the first byte or past `len`. `len` itself is a valid start.
///
/// The rule is the same for every pattern kind.
pub fn normalize_offset(raw: i64, len: usize) -> Option<usize> {
    if raw >= 0 {
        let start = usize::try_from(raw).ok()?;
        (start <= len).then_some(start)
    } else {
        let back = usize::try_from(raw.unsigned_abs()).ok()?;
        len.checked_sub(back)
    }
}
