//! Generic traversal primitives over matrix views.
//!
//! These are the sanctioned ways for format/codec code to read or write the
//! data behind a view: a nested element visit with an optional end-of-lane
//! hook, and a rule-driven transfer into an arbitrary destination. Both are
//! restartable, finite, single-pass and never allocate.
//!
//! Order-1 views need no dedicated primitives — the cursor returned by
//! [`VectorView::iter`](crate::VectorView::iter) already composes with the
//! standard iterator adapters.

use crate::view::{Axis, MatrixView, MatrixViewMut};

/// Visit every element of `view` in the nested order implied by `axis`
/// (outer over lanes, inner along each lane).
pub fn for_each_view<T, F>(view: &MatrixView<'_, T>, axis: Axis, mut f: F)
where
    F: FnMut(&T),
{
    for lane in view.lanes(axis) {
        for x in lane.iter() {
            f(x);
        }
    }
}

/// Like [`for_each_view`], additionally invoking `end_of_lane` with the
/// lane index after each completed lane. This is the hook point for row
/// separators when printing, or end-of-row padding when serializing.
pub fn for_each_view_with<T, F, G>(view: &MatrixView<'_, T>, axis: Axis, mut f: F, mut end_of_lane: G)
where
    F: FnMut(&T),
    G: FnMut(usize),
{
    for (i, lane) in view.lanes(axis).enumerate() {
        for x in lane.iter() {
            f(x);
        }
        end_of_lane(i);
    }
}

/// Mutating visit over every element of `view`, row-nested order.
pub fn for_each_view_mut<T: Copy, F>(view: &mut MatrixViewMut<'_, T>, mut f: F)
where
    F: FnMut(T) -> T,
{
    view.apply(&mut f);
}

/// Transfer the elements of `view` (in `axis`-nested order) into `dest`
/// with a caller-supplied per-element copy rule. The rule receives the
/// destination cursor and the source element; channel reordering, format
/// widening and similar per-element rewrites all fit this shape. Returns
/// the advanced destination cursor.
///
/// # Example
/// ```
/// use stridemat::{copy_view, MatrixView, Axis};
///
/// let buf = [1u8, 2, 3, 4];
/// let m = MatrixView::from_slice(&buf, 2, 2).unwrap();
/// let mut out = Vec::new();
/// copy_view(&m, &mut out, Axis::Rows, |dest, &x| dest.push(x * 10));
/// assert_eq!(out, [10, 20, 30, 40]);
/// ```
pub fn copy_view<T, D, F>(view: &MatrixView<'_, T>, mut dest: D, axis: Axis, mut rule: F) -> D
where
    F: FnMut(&mut D, &T),
{
    for lane in view.lanes(axis) {
        for x in lane.iter() {
            rule(&mut dest, x);
        }
    }
    dest
}

/// Identity-rule transfer into a slice, row-major. Returns the number of
/// elements written.
///
/// # Errors
/// [`Error::ShapeMismatch`](crate::Error::ShapeMismatch) if `out` is
/// shorter than the view's element count.
pub fn copy_view_into<T: Copy>(view: &MatrixView<'_, T>, out: &mut [T]) -> crate::Result<usize> {
    let needed = view.size();
    if out.len() < needed {
        return Err(crate::Error::ShapeMismatch {
            expected: needed,
            got: out.len(),
        });
    }
    let mut i = 0;
    for lane in view.lanes(Axis::Rows) {
        for &x in lane.iter() {
            out[i] = x;
            i += 1;
        }
    }
    Ok(i)
}
