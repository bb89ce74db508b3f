//! Test support utilities - only compiled in test builds.

use core::ops::Range;

/// Fills an array with a position-dependent pattern starting at 0x10.
pub fn patterned<const N: usize>() -> [u8; N] {
    core::array::from_fn(|i| (0x10 + i) as u8)
}

/// Asserts that `buf` matches `snapshot` everywhere outside `touched`.
pub fn assert_untouched_outside(snapshot: &[u8], buf: &[u8], touched: &[Range<usize>]) {
    assert_eq!(snapshot.len(), buf.len());
    for (i, (expected, actual)) in snapshot.iter().zip(buf).enumerate() {
        if touched.iter().any(|range| range.contains(&i)) {
            continue;
        }
        assert_eq!(expected, actual, "byte {i:#x} modified outside {touched:?}");
    }
}
