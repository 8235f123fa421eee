//! Lexicographic comparison with trailing padding

use std::cmp::Ordering;

/// How a sequence is extended once it runs out of elements.
#[derive(Debug)]
pub(crate) enum Padding<'a, T> {
    /// Compare the remaining elements of the other side against this value.
    With(&'a T),
    /// Any remaining element of the other side matches.
    Anything,
}

impl<T> Clone for Padding<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Padding<'_, T> {}

/// Compare two sequences element by element, padding the shorter one.
///
/// With `0` as padding, `[1, 2]`, `[1, 2, 0]` and `[1, 2, 0, 0]` are equal
/// while `[1, 2]` and `[1, 0, 2]` are not. `[1, 1]` is less than `[1, 2, 0]`
/// but greater than `[1, 1, -1]`.
///
/// Returns the ordering and the index where the sequences diverge, or the
/// common length when they are equal.
pub(crate) fn compare_trailing<T, F>(
    lhs: &[T],
    rhs: &[T],
    lhs_padding: Padding<'_, T>,
    rhs_padding: Padding<'_, T>,
    mut cmp: F,
) -> (Ordering, usize)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let common = lhs.len().min(rhs.len());

    for (idx, (a, b)) in lhs.iter().zip(rhs).enumerate() {
        let ord = cmp(a, b);
        if ord != Ordering::Equal {
            return (ord, idx);
        }
    }

    if let Padding::With(pad) = rhs_padding {
        for (idx, a) in lhs.iter().enumerate().skip(common) {
            let ord = cmp(a, pad);
            if ord != Ordering::Equal {
                return (ord, idx);
            }
        }
    }

    if let Padding::With(pad) = lhs_padding {
        for (idx, b) in rhs.iter().enumerate().skip(common) {
            let ord = cmp(pad, b);
            if ord != Ordering::Equal {
                return (ord, idx);
            }
        }
    }

    (Ordering::Equal, common)
}
