use super::*;

#[test]
fn range_within_bounds() {
    let buf = b"wFPGA,36864,7";
    assert_eq!(range(buf, 0, 5), b"wFPGA");
    assert_eq!(range(buf, 6, 11), b"36864");
    assert_eq!(range(buf, 0, buf.len()), &buf[..]);
}

#[test]
fn range_empty_view_is_valid() {
    let buf = b"abc";
    assert_eq!(range(buf, 1, 1), b"");
    assert_eq!(range(buf, 3, 3), b"");
}

#[test]
fn range_violations_yield_empty() {
    let buf = b"abc";
    // end past the buffer
    assert_eq!(range(buf, 0, 4), b"");
    // inverted bounds
    assert_eq!(range(buf, 2, 1), b"");
    // start past the buffer
    assert_eq!(range(buf, 5, 6), b"");
}

#[test]
fn with_len_matches_range() {
    let buf = b"rFPGA,36864";
    assert_eq!(with_len(buf, 6, 5), b"36864");
    assert_eq!(with_len(buf, 6, 6), b"");
    assert_eq!(with_len(buf, 0, 0), b"");
}

#[test]
fn with_len_overflow_yields_empty() {
    let buf = b"abc";
    assert_eq!(with_len(buf, 1, usize::MAX), b"");
    assert_eq!(with_len(buf, usize::MAX, 1), b"");
}

#[test]
fn get_in_range_and_sentinel() {
    let buf = b"a\0c";
    assert_eq!(get(buf, 0), b'a');
    // a real zero byte and the out-of-range sentinel look the same
    assert_eq!(get(buf, 1), 0);
    assert_eq!(get(buf, 3), 0);
    assert_eq!(get(&[], 0), 0);
}
