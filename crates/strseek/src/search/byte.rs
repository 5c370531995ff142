/// First index `>= start` holding the byte `value`.
///
/// Values outside `0..=255` match nothing; they are never reduced modulo 256.
pub fn find_byte(subject: &[u8], value: i64, start: usize) -> Option<usize> {
    let byte = u8::try_from(value).ok()?;
    let tail = subject.get(start..)?;
    memchr::memchr(byte, tail).map(|pos| start + pos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_occurrence_from_start() {
        assert_eq!(find_byte(b"hello", b'e' as i64, 0), Some(1));
        assert_eq!(find_byte(b"hello", b'l' as i64, 0), Some(2));
        assert_eq!(find_byte(b"blablabla", b'a' as i64, 3), Some(5));
        assert_eq!(find_byte(b"blablabla", b'b' as i64, 7), None);
        assert_eq!(find_byte(b"blablabla", b'a' as i64, 9), None);
    }

    #[test]
    fn test_out_of_range_values_never_wrap() {
        let e = b'e' as i64;
        assert_eq!(find_byte(b"hello", e + 256 * 3, 0), None);
        assert_eq!(find_byte(b"hello", -(256 - e), 0), None);
        assert_eq!(find_byte(b"hello", 0, 0), None);
    }

    #[test]
    fn test_start_past_end() {
        assert_eq!(find_byte(b"abc", b'a' as i64, 4), None);
    }
}
