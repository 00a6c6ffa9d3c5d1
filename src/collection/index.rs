//! Index arithmetic shared by the list operations.
//!
//! A negative index `i` counts from the end: it means `len + i`.

use std::ops::Range;

use crate::error::{SugarError, SugarResult};

#[inline]
fn signed(len: usize) -> isize {
    isize::try_from(len).unwrap_or(isize::MAX)
}

/// Resolves a possibly negative index without any range check.
#[inline]
pub(crate) fn offset(index: isize, len: usize) -> isize {
    if index >= 0 { index } else { signed(len) + index }
}

/// Resolves an index pointing at an existing element.
#[inline]
pub(crate) fn element(index: isize, len: usize) -> Option<usize> {
    usize::try_from(offset(index, len))
        .ok()
        .filter(|resolved| *resolved < len)
}

/// Resolves an element index, failing when it lies outside the list.
pub(crate) fn checked_element(index: isize, len: usize) -> SugarResult<usize> {
    element(index, len).ok_or_else(|| out_of_bounds(index, len))
}

/// Resolves an insertion position; `len` itself is a valid position.
pub(crate) fn checked_position(index: isize, len: usize) -> SugarResult<usize> {
    usize::try_from(offset(index, len))
        .ok()
        .filter(|resolved| *resolved <= len)
        .ok_or_else(|| out_of_bounds(index, len))
}

/// Resolves a bounds-checked range.
pub(crate) fn checked_range(from: isize, to: isize, len: usize) -> SugarResult<Range<usize>> {
    let start = checked_position(from, len)?;
    let end = checked_position(to, len)?;
    if start > end {
        return Err(out_of_bounds(from, len));
    }
    Ok(start..end)
}

/// Resolves a range that never fails.
///
/// `from` is clamped at zero and `to` at `len`. A negative `from` paired with
/// a `to` that resolves to 0 extends to the end, so `(-2, 0)` and `(-2, -3)`
/// on three elements both select the last two.
/// An inverted range resolves to an empty one.
pub(crate) fn clamped_range(from: isize, to: isize, len: usize) -> Range<usize> {
    let start = offset(from, len).max(0);
    let mut end = offset(to, len);
    if (from < 0 && end == 0) || end > signed(len) {
        end = signed(len);
    }
    if end < start {
        return 0..0;
    }
    // both bounds are within 0..=len here
    let start = usize::try_from(start).unwrap_or_default();
    let end = usize::try_from(end).unwrap_or(len);
    start..end
}

fn out_of_bounds(index: isize, len: usize) -> SugarError {
    tracing::trace!(index, len, "index rejected");
    SugarError::IndexOutOfBounds { index, len }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 3, Some(0))]
    #[case(-1, 3, Some(2))]
    #[case(-3, 3, Some(0))]
    #[case(-4, 3, None)]
    #[case(3, 3, None)]
    fn test_element(#[case] index: isize, #[case] len: usize, #[case] expected: Option<usize>) {
        assert_eq!(element(index, len), expected);
    }

    #[rstest]
    #[case(-100, 100, 0..3)]
    #[case(2, 1, 0..0)]
    #[case(-2, 0, 1..3)]
    #[case(1, -1, 1..2)]
    #[case(0, -100, 0..0)]
    #[case(-2, -3, 1..3)]
    fn test_clamped_range(#[case] from: isize, #[case] to: isize, #[case] expected: Range<usize>) {
        assert_eq!(clamped_range(from, to, 3), expected);
    }

    #[rstest]
    fn test_checked_range_rejects_inverted() {
        assert_eq!(
            checked_range(2, 1, 3),
            Err(SugarError::IndexOutOfBounds { index: 2, len: 3 })
        );
        assert_eq!(checked_range(-2, 3, 3), Ok(1..3));
    }
}
