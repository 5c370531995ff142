// Tests for index with a single byte value
use crate::*;

fn find(subject: &str, byte: u8, offset: Option<i64>) -> Option<usize> {
    let mut last_match = LastMatch::new();
    index(
        subject.as_bytes(),
        &Pattern::Byte(byte as i64),
        offset,
        &mut last_match,
    )
}

#[test]
fn test_index_byte_first_occurrence() {
    assert_eq!(find("hello", b'e', None), Some(1));
    assert_eq!(find("hello", b'l', None), Some(2));
}

#[test]
fn test_index_byte_offset_table() {
    let expected_b = [0, 3, 3, 3, 6, 6, 6];
    for (offset, expected) in expected_b.iter().enumerate() {
        assert_eq!(find("blablabla", b'b', Some(offset as i64)), Some(*expected));
    }

    let expected_a = [(0, 2), (2, 2), (3, 5), (4, 5), (5, 5), (6, 8), (7, 8), (8, 8)];
    for (offset, expected) in expected_a {
        assert_eq!(find("blablabla", b'a', Some(offset)), Some(expected));
    }
}

#[test]
fn test_index_byte_negative_offsets() {
    let subject = "blablabla";
    let len = subject.len() as i64;
    for needle in [b'a', b'b'] {
        for offset in -len..=-1 {
            assert_eq!(
                find(subject, needle, Some(offset)),
                find(subject, needle, Some(offset + len))
            );
        }
    }
    assert_eq!(find(subject, b'b', Some(-9)), Some(0));
    assert_eq!(find(subject, b'b', Some(-10)), None);
    assert_eq!(find(subject, b'b', Some(-20)), None);
}

#[test]
fn test_index_byte_not_found() {
    assert_eq!(find("hello", 0, None), None);
    assert_eq!(find("hello", b'H', None), None);
    assert_eq!(find("hello", b'z', None), None);
    assert_eq!(find("hello", b'e', Some(2)), None);
    assert_eq!(find("blablabla", b'b', Some(7)), None);
    assert_eq!(find("blablabla", b'b', Some(10)), None);
    assert_eq!(find("blablabla", b'a', Some(9)), None);
    assert_eq!(find("blablabla", b'a', Some(20)), None);
}

#[test]
fn test_index_byte_values_outside_unit_range() {
    let mut last_match = LastMatch::new();
    let e = b'e' as i64;
    for value in [e + 256 * 3, -(256 - e), 256, -1, i64::MAX, i64::MIN] {
        assert_eq!(
            index(b"hello", &Pattern::Byte(value), None, &mut last_match),
            None,
            "value {value}"
        );
    }
}
