//! Zero-copy strided views over borrowed buffers.
//!
//! A view reinterprets a flat slice as an order-1 (vector) or order-2
//! (matrix) array through pure offset/stride arithmetic. Views never own
//! memory: their validity is bounded by the borrow they were built from,
//! and every transform (`transposed`, `reversed`, `subview`, the rotation
//! free functions) returns a *new* view over the *same* memory with
//! recomputed metadata — no element is ever moved.
//!
//! Construction validates once that the full extent of the view stays
//! inside the buffer; after that, element access is plain index arithmetic
//! with an assert on the logical index. `new_unchecked` opts out of the
//! one-time validation for callers that have already proven it.
//!
//! # Example
//! ```
//! use stridemat::{MatrixView, Axis};
//!
//! let buf = [1, 2, 3, 4, 5, 6];
//! // 2 rows x 3 cols, row-major.
//! let m = MatrixView::new(&buf, 0, 2, 3, 3, 1).unwrap();
//! let t = m.transposed();
//! assert_eq!(t.get(2, 1), &6);
//! let cols: Vec<i32> = t.lanes(Axis::Rows).flatten().copied().collect();
//! assert_eq!(cols, [1, 4, 2, 5, 3, 6]);
//! ```

use crate::iter::{Lanes, StridedIter};
use crate::{Error, Result};

/// Access sequence for order-2 traversal: which axis the *outer* iteration
/// walks. The two variants are exhaustive; there is no invalid selector
/// state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Outer iteration over rows; each lane walks the columns of one row.
    Rows,
    /// Outer iteration over columns; each lane walks the rows of one column.
    Cols,
}

/// Per-axis reversal selector for [`MatrixView::reversed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flip {
    /// Mirror along the x axis (reverses each row's element order).
    Horizontal,
    /// Mirror along the y axis (reverses the row order).
    Vertical,
    /// Both mirrors; equivalent to a half-turn rotation.
    Both,
}

/// Validates that every addressable element of a strided extent lies inside
/// a buffer of `data_len` elements. Zero-length dimensions make the extent
/// empty and always valid. Zero strides are rejected: they alias elements
/// and break cursor difference arithmetic.
fn validate_extent(data_len: usize, offset: usize, dims: &[(isize, usize)]) -> Result<()> {
    for (dim, &(stride, len)) in dims.iter().enumerate() {
        if stride == 0 && len > 1 {
            return Err(Error::ZeroStride { dim });
        }
        if len == 0 {
            return Ok(());
        }
    }
    let mut lo = offset as isize;
    let mut hi = offset as isize;
    for &(stride, len) in dims {
        let span = stride * (len as isize - 1);
        if stride >= 0 {
            hi += span;
        } else {
            lo += span;
        }
    }
    if lo < 0 || hi as usize >= data_len {
        return Err(Error::OffsetOverflow);
    }
    Ok(())
}

// ============================================================================
// Order 1: vector views
// ============================================================================

/// An immutable order-1 strided view: `len` elements starting at buffer
/// index `offset`, `stride` elements apart (stride may be negative).
#[derive(Debug, Clone, Copy)]
pub struct VectorView<'a, T> {
    data: &'a [T],
    offset: isize,
    stride: isize,
    len: usize,
}

impl<'a, T> VectorView<'a, T> {
    /// Create a view over `data` with logical element 0 at buffer index
    /// `offset`.
    ///
    /// # Errors
    /// [`Error::OffsetOverflow`] if any addressable element falls outside
    /// `data`; [`Error::ZeroStride`] for a zero stride with `len > 1`.
    pub fn new(data: &'a [T], offset: usize, len: usize, stride: isize) -> Result<Self> {
        validate_extent(data.len(), offset, &[(stride, len)])?;
        Ok(Self {
            data,
            offset: offset as isize,
            stride,
            len,
        })
    }

    /// Create a view without the one-time extent validation.
    ///
    /// # Safety
    /// Every position `offset + i * stride` for `i < len` must index into
    /// `data`.
    pub unsafe fn new_unchecked(data: &'a [T], offset: usize, len: usize, stride: isize) -> Self {
        Self {
            data,
            offset: offset as isize,
            stride,
            len,
        }
    }

    /// Internal constructor used by lane cursors, where the rebased offset
    /// is already signed.
    #[inline]
    pub(crate) unsafe fn from_raw_parts(
        data: &'a [T],
        offset: isize,
        stride: isize,
        len: usize,
    ) -> Self {
        Self {
            data,
            offset,
            stride,
            len,
        }
    }

    /// Stride-1 view over an entire slice.
    pub fn from_slice(data: &'a [T]) -> Self {
        Self {
            data,
            offset: 0,
            stride: 1,
            len: data.len(),
        }
    }

    /// Number of logical elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if the view addresses no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Signed element step between consecutive logical elements.
    #[inline]
    pub fn stride(&self) -> isize {
        self.stride
    }

    #[inline]
    fn linear(&self, i: usize) -> usize {
        (self.offset + i as isize * self.stride) as usize
    }

    /// Element at logical index `i`.
    ///
    /// # Panics
    /// Panics if `i >= len`.
    #[inline]
    pub fn get(&self, i: usize) -> &'a T {
        assert!(i < self.len, "index out of bounds");
        &self.data[self.linear(i)]
    }

    /// Element at logical index `i`, without the index assert.
    ///
    /// # Safety
    /// `i` must be less than `len`.
    #[inline]
    pub unsafe fn get_unchecked(&self, i: usize) -> &'a T {
        self.data.get_unchecked(self.linear(i))
    }

    /// Cursor over the elements in logical order.
    #[inline]
    pub fn iter(&self) -> StridedIter<'a, T> {
        StridedIter::new(self.data, self.offset, self.stride, self.len)
    }

    /// Sub-window: `len` elements starting at logical index `start`, same
    /// stride, rebased offset.
    ///
    /// # Panics
    /// Panics if `start + len` exceeds this view's length.
    pub fn subview(&self, start: usize, len: usize) -> Self {
        assert!(start + len <= self.len, "subview out of range");
        Self {
            data: self.data,
            offset: self.offset + start as isize * self.stride,
            stride: self.stride,
            len,
        }
    }

    /// The same elements in opposite order: offset rebased to the last
    /// element, stride negated. Zero-copy; an involution.
    pub fn reversed(&self) -> Self {
        if self.len == 0 {
            return Self { ..*self };
        }
        Self {
            data: self.data,
            offset: self.offset + self.stride * (self.len as isize - 1),
            stride: -self.stride,
            len: self.len,
        }
    }

    /// The backing slice region when the view is contiguous (stride 1).
    pub fn as_slice(&self) -> Option<&'a [T]> {
        if self.stride == 1 {
            let start = self.offset as usize;
            Some(&self.data[start..start + self.len])
        } else {
            None
        }
    }
}

impl<'a, T> IntoIterator for VectorView<'a, T> {
    type Item = &'a T;
    type IntoIter = StridedIter<'a, T>;

    fn into_iter(self) -> StridedIter<'a, T> {
        self.iter()
    }
}

impl<'a, 'b, T> IntoIterator for &'b VectorView<'a, T> {
    type Item = &'a T;
    type IntoIter = StridedIter<'a, T>;

    fn into_iter(self) -> StridedIter<'a, T> {
        self.iter()
    }
}

impl<T> std::ops::Index<usize> for VectorView<'_, T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        self.get(i)
    }
}

impl<T: PartialEq> PartialEq for VectorView<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: PartialEq> PartialEq<&[T]> for VectorView<'_, T> {
    fn eq(&self, other: &&[T]) -> bool {
        self.len == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for VectorView<'_, T> {
    fn eq(&self, other: &[T; N]) -> bool {
        *self == &other[..]
    }
}

/// A mutable order-1 strided view.
///
/// Transforms on the mutable flavor consume the view (`self` by value) so
/// that two overlapping mutable descriptions of the same memory can never
/// coexist.
#[derive(Debug)]
pub struct VectorViewMut<'a, T> {
    data: &'a mut [T],
    offset: isize,
    stride: isize,
    len: usize,
}

impl<'a, T> VectorViewMut<'a, T> {
    /// Mutable counterpart of [`VectorView::new`].
    pub fn new(data: &'a mut [T], offset: usize, len: usize, stride: isize) -> Result<Self> {
        validate_extent(data.len(), offset, &[(stride, len)])?;
        Ok(Self {
            data,
            offset: offset as isize,
            stride,
            len,
        })
    }

    /// # Safety
    /// Every position `offset + i * stride` for `i < len` must index into
    /// `data`.
    pub unsafe fn new_unchecked(
        data: &'a mut [T],
        offset: usize,
        len: usize,
        stride: isize,
    ) -> Self {
        Self {
            data,
            offset: offset as isize,
            stride,
            len,
        }
    }

    #[inline]
    pub(crate) unsafe fn from_raw_parts(
        data: &'a mut [T],
        offset: isize,
        stride: isize,
        len: usize,
    ) -> Self {
        Self {
            data,
            offset,
            stride,
            len,
        }
    }

    /// Stride-1 view over an entire slice.
    pub fn from_slice(data: &'a mut [T]) -> Self {
        let len = data.len();
        Self {
            data,
            offset: 0,
            stride: 1,
            len,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn stride(&self) -> isize {
        self.stride
    }

    #[inline]
    fn linear(&self, i: usize) -> usize {
        (self.offset + i as isize * self.stride) as usize
    }

    /// Reborrow as an immutable view.
    pub fn as_view(&self) -> VectorView<'_, T> {
        VectorView {
            data: &self.data[..],
            offset: self.offset,
            stride: self.stride,
            len: self.len,
        }
    }

    #[inline]
    pub fn get(&self, i: usize) -> &T {
        assert!(i < self.len, "index out of bounds");
        &self.data[self.linear(i)]
    }

    #[inline]
    pub fn get_mut(&mut self, i: usize) -> &mut T {
        assert!(i < self.len, "index out of bounds");
        let idx = self.linear(i);
        &mut self.data[idx]
    }

    #[inline]
    pub fn set(&mut self, i: usize, value: T) {
        *self.get_mut(i) = value;
    }

    /// Cursor over the elements in logical order.
    pub fn iter(&self) -> StridedIter<'_, T> {
        StridedIter::new(self.data, self.offset, self.stride, self.len)
    }

    /// Consuming counterpart of [`VectorView::subview`].
    pub fn subview(self, start: usize, len: usize) -> Self {
        assert!(start + len <= self.len, "subview out of range");
        Self {
            offset: self.offset + start as isize * self.stride,
            stride: self.stride,
            len,
            data: self.data,
        }
    }

    /// Consuming counterpart of [`VectorView::reversed`].
    pub fn reversed(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Self {
            offset: self.offset + self.stride * (self.len as isize - 1),
            stride: -self.stride,
            len: self.len,
            data: self.data,
        }
    }
}

impl<T: Copy> VectorViewMut<'_, T> {
    /// In-place map over every element, in logical order from index 0.
    pub fn apply<F: FnMut(T) -> T>(&mut self, mut f: F) {
        for i in 0..self.len {
            let idx = self.linear(i);
            self.data[idx] = f(self.data[idx]);
        }
    }

    /// In-place binary map, zipping this view with a contiguous range.
    /// Iteration stops at the shorter of the two lengths.
    pub fn apply_with<U: Copy, F: FnMut(T, U) -> T>(&mut self, range: &[U], mut f: F) {
        for (i, &u) in (0..self.len).zip(range.iter()) {
            let idx = self.linear(i);
            self.data[idx] = f(self.data[idx], u);
        }
    }

    /// Bulk-overwrite from a contiguous range, copying
    /// `min(self.len(), src.len())` elements.
    pub fn assign(&mut self, src: &[T]) {
        for (i, &v) in (0..self.len).zip(src.iter()) {
            let idx = self.linear(i);
            self.data[idx] = v;
        }
    }
}

impl<T: Copy + std::ops::Mul<Output = T>> std::ops::MulAssign<T> for VectorViewMut<'_, T> {
    fn mul_assign(&mut self, rhs: T) {
        self.apply(|x| x * rhs);
    }
}

impl<T: Copy + std::ops::Div<Output = T>> std::ops::DivAssign<T> for VectorViewMut<'_, T> {
    fn div_assign(&mut self, rhs: T) {
        self.apply(|x| x / rhs);
    }
}

impl<T> std::ops::Index<usize> for VectorViewMut<'_, T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        self.get(i)
    }
}

impl<T> std::ops::IndexMut<usize> for VectorViewMut<'_, T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        self.get_mut(i)
    }
}

// ============================================================================
// Order 2: matrix views
// ============================================================================

/// An immutable order-2 strided view: `rows x cols` elements addressed as
/// `offset + r * row_stride + c * col_stride`.
#[derive(Debug, Clone, Copy)]
pub struct MatrixView<'a, T> {
    data: &'a [T],
    offset: isize,
    strides: [isize; 2],
    dims: [usize; 2],
}

impl<'a, T> MatrixView<'a, T> {
    /// Create a view with logical element (0, 0) at buffer index `offset`.
    ///
    /// # Errors
    /// [`Error::OffsetOverflow`] if any addressable element falls outside
    /// `data`; [`Error::ZeroStride`] for a zero stride on a dimension
    /// longer than one.
    pub fn new(
        data: &'a [T],
        offset: usize,
        rows: usize,
        cols: usize,
        row_stride: isize,
        col_stride: isize,
    ) -> Result<Self> {
        validate_extent(
            data.len(),
            offset,
            &[(row_stride, rows), (col_stride, cols)],
        )?;
        Ok(Self {
            data,
            offset: offset as isize,
            strides: [row_stride, col_stride],
            dims: [rows, cols],
        })
    }

    /// Create a view without the one-time extent validation.
    ///
    /// # Safety
    /// Every position `offset + r * row_stride + c * col_stride` for
    /// `r < rows`, `c < cols` must index into `data`.
    pub unsafe fn new_unchecked(
        data: &'a [T],
        offset: usize,
        rows: usize,
        cols: usize,
        row_stride: isize,
        col_stride: isize,
    ) -> Self {
        Self {
            data,
            offset: offset as isize,
            strides: [row_stride, col_stride],
            dims: [rows, cols],
        }
    }

    /// Window a buffer at a 2-D anchor: logical (0, 0) sits at
    /// `y * row_stride + x * col_stride`. This is the constructor shape
    /// codec code uses (anchor plus extent plus per-axis deltas).
    pub fn from_buffer(
        data: &'a [T],
        x: usize,
        y: usize,
        width: usize,
        height: usize,
        row_stride: isize,
        col_stride: isize,
    ) -> Result<Self> {
        let anchor = y as isize * row_stride + x as isize * col_stride;
        if anchor < 0 {
            return Err(Error::OffsetOverflow);
        }
        Self::new(data, anchor as usize, height, width, row_stride, col_stride)
    }

    /// Row-major view over an entire slice.
    ///
    /// # Errors
    /// [`Error::OffsetOverflow`] if `rows * cols` exceeds the slice length.
    pub fn from_slice(data: &'a [T], rows: usize, cols: usize) -> Result<Self> {
        Self::new(data, 0, rows, cols, cols as isize, 1)
    }

    #[inline]
    pub fn nrows(&self) -> usize {
        self.dims[0]
    }

    #[inline]
    pub fn ncols(&self) -> usize {
        self.dims[1]
    }

    /// Total number of addressed elements.
    #[inline]
    pub fn size(&self) -> usize {
        self.dims[0] * self.dims[1]
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.dims.contains(&0)
    }

    /// Signed element step between consecutive rows.
    #[inline]
    pub fn row_stride(&self) -> isize {
        self.strides[0]
    }

    /// Signed element step between consecutive columns.
    #[inline]
    pub fn col_stride(&self) -> isize {
        self.strides[1]
    }

    #[inline]
    fn linear(&self, r: usize, c: usize) -> usize {
        (self.offset + r as isize * self.strides[0] + c as isize * self.strides[1]) as usize
    }

    /// Element at logical position (`r`, `c`).
    ///
    /// # Panics
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn get(&self, r: usize, c: usize) -> &'a T {
        assert!(r < self.dims[0] && c < self.dims[1], "index out of bounds");
        &self.data[self.linear(r, c)]
    }

    /// # Safety
    /// `r < nrows` and `c < ncols` must hold.
    #[inline]
    pub unsafe fn get_unchecked(&self, r: usize, c: usize) -> &'a T {
        self.data.get_unchecked(self.linear(r, c))
    }

    /// Degrade to an order-1 view over row `r`.
    pub fn row(&self, r: usize) -> VectorView<'a, T> {
        assert!(r < self.dims[0], "row index out of bounds");
        unsafe {
            VectorView::from_raw_parts(
                self.data,
                self.offset + r as isize * self.strides[0],
                self.strides[1],
                self.dims[1],
            )
        }
    }

    /// Degrade to an order-1 view over column `c`.
    pub fn col(&self, c: usize) -> VectorView<'a, T> {
        assert!(c < self.dims[1], "column index out of bounds");
        unsafe {
            VectorView::from_raw_parts(
                self.data,
                self.offset + c as isize * self.strides[1],
                self.strides[0],
                self.dims[0],
            )
        }
    }

    /// Outer cursor over the lanes of the chosen access sequence.
    ///
    /// `Axis::Rows` yields each row as an order-1 view (outer step = row
    /// stride); `Axis::Cols` yields each column. Either way every element
    /// is visited exactly once by the composed iteration.
    pub fn lanes(&self, axis: Axis) -> Lanes<'a, T> {
        match axis {
            Axis::Rows => Lanes::new(
                self.data,
                self.offset,
                self.strides[0],
                self.dims[0],
                self.strides[1],
                self.dims[1],
            ),
            Axis::Cols => Lanes::new(
                self.data,
                self.offset,
                self.strides[1],
                self.dims[1],
                self.strides[0],
                self.dims[0],
            ),
        }
    }

    /// All elements in row-major order.
    pub fn iter(&self) -> std::iter::Flatten<Lanes<'a, T>> {
        self.lanes(Axis::Rows).flatten()
    }

    /// Zero-copy transpose: swaps the per-axis (stride, length) pairs.
    ///
    /// The access sequence is not implicitly re-derived: iterating the
    /// transposed view with `Axis::Rows` walks what were columns.
    pub fn transposed(&self) -> Self {
        Self {
            data: self.data,
            offset: self.offset,
            strides: [self.strides[1], self.strides[0]],
            dims: [self.dims[1], self.dims[0]],
        }
    }

    /// Zero-copy per-axis reversal: for each flipped axis, the offset is
    /// rebased to that axis's last element and its stride negated.
    pub fn reversed(&self, flip: Flip) -> Self {
        let mut offset = self.offset;
        let mut strides = self.strides;
        let flip_h = matches!(flip, Flip::Horizontal | Flip::Both);
        let flip_v = matches!(flip, Flip::Vertical | Flip::Both);
        if flip_h && self.dims[1] > 0 {
            offset += strides[1] * (self.dims[1] as isize - 1);
            strides[1] = -strides[1];
        }
        if flip_v && self.dims[0] > 0 {
            offset += strides[0] * (self.dims[0] as isize - 1);
            strides[0] = -strides[0];
        }
        Self {
            data: self.data,
            offset,
            strides,
            dims: self.dims,
        }
    }

    /// Windowed view: `rows x cols` starting at logical (`r0`, `c0`),
    /// same strides, rebased offset.
    ///
    /// # Panics
    /// Panics if the window exceeds this view's extent.
    pub fn subview(&self, r0: usize, c0: usize, rows: usize, cols: usize) -> Self {
        assert!(
            r0 + rows <= self.dims[0] && c0 + cols <= self.dims[1],
            "subview out of range"
        );
        Self {
            data: self.data,
            offset: self.offset + r0 as isize * self.strides[0] + c0 as isize * self.strides[1],
            strides: self.strides,
            dims: [rows, cols],
        }
    }

    /// True when the view is row-major contiguous over its extent.
    pub fn is_contiguous(&self) -> bool {
        self.strides[1] == 1 && self.strides[0] == self.dims[1] as isize
    }

    /// The backing slice region when the view is row-major contiguous.
    pub fn as_slice(&self) -> Option<&'a [T]> {
        if self.is_contiguous() {
            let start = self.offset as usize;
            Some(&self.data[start..start + self.size()])
        } else {
            None
        }
    }
}

impl<T> std::ops::Index<(usize, usize)> for MatrixView<'_, T> {
    type Output = T;

    #[inline]
    fn index(&self, (r, c): (usize, usize)) -> &T {
        self.get(r, c)
    }
}

impl<T: PartialEq> PartialEq for MatrixView<'_, T> {
    /// Element-wise comparison, row by row.
    fn eq(&self, other: &Self) -> bool {
        self.dims == other.dims
            && self
                .lanes(Axis::Rows)
                .zip(other.lanes(Axis::Rows))
                .all(|(a, b)| a == b)
    }
}

/// A mutable order-2 strided view.
#[derive(Debug)]
pub struct MatrixViewMut<'a, T> {
    data: &'a mut [T],
    offset: isize,
    strides: [isize; 2],
    dims: [usize; 2],
}

impl<'a, T> MatrixViewMut<'a, T> {
    /// Mutable counterpart of [`MatrixView::new`].
    pub fn new(
        data: &'a mut [T],
        offset: usize,
        rows: usize,
        cols: usize,
        row_stride: isize,
        col_stride: isize,
    ) -> Result<Self> {
        validate_extent(
            data.len(),
            offset,
            &[(row_stride, rows), (col_stride, cols)],
        )?;
        Ok(Self {
            data,
            offset: offset as isize,
            strides: [row_stride, col_stride],
            dims: [rows, cols],
        })
    }

    /// # Safety
    /// Every position `offset + r * row_stride + c * col_stride` for
    /// `r < rows`, `c < cols` must index into `data`.
    pub unsafe fn new_unchecked(
        data: &'a mut [T],
        offset: usize,
        rows: usize,
        cols: usize,
        row_stride: isize,
        col_stride: isize,
    ) -> Self {
        Self {
            data,
            offset: offset as isize,
            strides: [row_stride, col_stride],
            dims: [rows, cols],
        }
    }

    /// Row-major view over an entire slice.
    pub fn from_slice(data: &'a mut [T], rows: usize, cols: usize) -> Result<Self> {
        Self::new(data, 0, rows, cols, cols as isize, 1)
    }

    #[inline]
    pub fn nrows(&self) -> usize {
        self.dims[0]
    }

    #[inline]
    pub fn ncols(&self) -> usize {
        self.dims[1]
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.dims[0] * self.dims[1]
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.dims.contains(&0)
    }

    #[inline]
    pub fn row_stride(&self) -> isize {
        self.strides[0]
    }

    #[inline]
    pub fn col_stride(&self) -> isize {
        self.strides[1]
    }

    #[inline]
    fn linear(&self, r: usize, c: usize) -> usize {
        (self.offset + r as isize * self.strides[0] + c as isize * self.strides[1]) as usize
    }

    /// Reborrow as an immutable view.
    pub fn as_view(&self) -> MatrixView<'_, T> {
        MatrixView {
            data: &self.data[..],
            offset: self.offset,
            strides: self.strides,
            dims: self.dims,
        }
    }

    #[inline]
    pub fn get(&self, r: usize, c: usize) -> &T {
        assert!(r < self.dims[0] && c < self.dims[1], "index out of bounds");
        &self.data[self.linear(r, c)]
    }

    #[inline]
    pub fn get_mut(&mut self, r: usize, c: usize) -> &mut T {
        assert!(r < self.dims[0] && c < self.dims[1], "index out of bounds");
        let idx = self.linear(r, c);
        &mut self.data[idx]
    }

    #[inline]
    pub fn set(&mut self, r: usize, c: usize, value: T) {
        *self.get_mut(r, c) = value;
    }

    /// Mutable order-1 view over row `r`, borrowing this view exclusively
    /// for its lifetime (lanes of a mutable view may alias, so only one
    /// can be live at a time).
    pub fn row_mut(&mut self, r: usize) -> VectorViewMut<'_, T> {
        assert!(r < self.dims[0], "row index out of bounds");
        let offset = self.offset + r as isize * self.strides[0];
        let (stride, len) = (self.strides[1], self.dims[1]);
        unsafe { VectorViewMut::from_raw_parts(self.data, offset, stride, len) }
    }

    /// Mutable order-1 view over column `c`.
    pub fn col_mut(&mut self, c: usize) -> VectorViewMut<'_, T> {
        assert!(c < self.dims[1], "column index out of bounds");
        let offset = self.offset + c as isize * self.strides[1];
        let (stride, len) = (self.strides[0], self.dims[0]);
        unsafe { VectorViewMut::from_raw_parts(self.data, offset, stride, len) }
    }

    /// Outer cursor over the lanes of the chosen access sequence
    /// (read-only; mutation goes through `apply`/`row_mut`/`col_mut`).
    pub fn lanes(&self, axis: Axis) -> Lanes<'_, T> {
        match axis {
            Axis::Rows => Lanes::new(
                self.data,
                self.offset,
                self.strides[0],
                self.dims[0],
                self.strides[1],
                self.dims[1],
            ),
            Axis::Cols => Lanes::new(
                self.data,
                self.offset,
                self.strides[1],
                self.dims[1],
                self.strides[0],
                self.dims[0],
            ),
        }
    }

    /// Consuming counterpart of [`MatrixView::transposed`].
    pub fn transposed(self) -> Self {
        Self {
            offset: self.offset,
            strides: [self.strides[1], self.strides[0]],
            dims: [self.dims[1], self.dims[0]],
            data: self.data,
        }
    }

    /// Consuming counterpart of [`MatrixView::reversed`].
    pub fn reversed(self, flip: Flip) -> Self {
        let mut offset = self.offset;
        let mut strides = self.strides;
        let flip_h = matches!(flip, Flip::Horizontal | Flip::Both);
        let flip_v = matches!(flip, Flip::Vertical | Flip::Both);
        if flip_h && self.dims[1] > 0 {
            offset += strides[1] * (self.dims[1] as isize - 1);
            strides[1] = -strides[1];
        }
        if flip_v && self.dims[0] > 0 {
            offset += strides[0] * (self.dims[0] as isize - 1);
            strides[0] = -strides[0];
        }
        Self {
            offset,
            strides,
            dims: self.dims,
            data: self.data,
        }
    }

    /// Consuming counterpart of [`MatrixView::subview`].
    pub fn subview(self, r0: usize, c0: usize, rows: usize, cols: usize) -> Self {
        assert!(
            r0 + rows <= self.dims[0] && c0 + cols <= self.dims[1],
            "subview out of range"
        );
        Self {
            offset: self.offset + r0 as isize * self.strides[0] + c0 as isize * self.strides[1],
            strides: self.strides,
            dims: [rows, cols],
            data: self.data,
        }
    }
}

impl<T: Copy> MatrixViewMut<'_, T> {
    /// In-place map over every element, outer loop over rows, inner over
    /// columns, visiting each element exactly once.
    pub fn apply<F: FnMut(T) -> T>(&mut self, mut f: F) {
        for r in 0..self.dims[0] {
            for c in 0..self.dims[1] {
                let idx = self.linear(r, c);
                self.data[idx] = f(self.data[idx]);
            }
        }
    }

    /// In-place binary map, zipping this view (row-major) with a
    /// contiguous range. Iteration stops at the shorter length.
    pub fn apply_with<U: Copy, F: FnMut(T, U) -> T>(&mut self, range: &[U], mut f: F) {
        let mut src = range.iter();
        'outer: for r in 0..self.dims[0] {
            for c in 0..self.dims[1] {
                let Some(&u) = src.next() else { break 'outer };
                let idx = self.linear(r, c);
                self.data[idx] = f(self.data[idx], u);
            }
        }
    }

    /// Bulk-overwrite from a contiguous row-major range, copying
    /// `min(self.size(), src.len())` elements.
    pub fn assign(&mut self, src: &[T]) {
        self.apply_with(src, |_, v| v);
    }
}

impl<T: Copy + std::ops::Mul<Output = T>> std::ops::MulAssign<T> for MatrixViewMut<'_, T> {
    /// Row-wise in-place scaling. Together with `/=` this is the only
    /// arithmetic compound assignment a view supports; add/sub live on the
    /// owning containers.
    fn mul_assign(&mut self, rhs: T) {
        self.apply(|x| x * rhs);
    }
}

impl<T: Copy + std::ops::Div<Output = T>> std::ops::DivAssign<T> for MatrixViewMut<'_, T> {
    fn div_assign(&mut self, rhs: T) {
        self.apply(|x| x / rhs);
    }
}

impl<T> std::ops::Index<(usize, usize)> for MatrixViewMut<'_, T> {
    type Output = T;

    #[inline]
    fn index(&self, (r, c): (usize, usize)) -> &T {
        self.get(r, c)
    }
}

impl<T> std::ops::IndexMut<(usize, usize)> for MatrixViewMut<'_, T> {
    #[inline]
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut T {
        self.get_mut(r, c)
    }
}

// ============================================================================
// Rigid view transforms (all zero-copy)
// ============================================================================

/// Zero-copy transpose of a matrix view.
pub fn transpose_view<'a, T>(view: &MatrixView<'a, T>) -> MatrixView<'a, T> {
    view.transposed()
}

/// Horizontal flip: each row's element order reversed.
pub fn reverse_row_view<'a, T>(view: &MatrixView<'a, T>) -> MatrixView<'a, T> {
    view.reversed(Flip::Horizontal)
}

/// Vertical flip: row order reversed. Bottom-up image formats use this to
/// present their scanlines top-down.
pub fn reverse_col_view<'a, T>(view: &MatrixView<'a, T>) -> MatrixView<'a, T> {
    view.reversed(Flip::Vertical)
}

/// Quarter-turn counterclockwise.
pub fn rotate_view_half_pi<'a, T>(view: &MatrixView<'a, T>) -> MatrixView<'a, T> {
    let last_col = view.offset + view.strides[1] * (view.dims[1] as isize - 1).max(0);
    MatrixView {
        data: view.data,
        offset: last_col,
        strides: [-view.strides[1], view.strides[0]],
        dims: [view.dims[1], view.dims[0]],
    }
}

/// Quarter-turn clockwise.
pub fn rotate_view_neg_half_pi<'a, T>(view: &MatrixView<'a, T>) -> MatrixView<'a, T> {
    let last_row = view.offset + view.strides[0] * (view.dims[0] as isize - 1).max(0);
    MatrixView {
        data: view.data,
        offset: last_row,
        strides: [view.strides[1], -view.strides[0]],
        dims: [view.dims[1], view.dims[0]],
    }
}

/// Half-turn (central symmetry); equal to reversing both axes.
pub fn rotate_view_pi<'a, T>(view: &MatrixView<'a, T>) -> MatrixView<'a, T> {
    view.reversed(Flip::Both)
}
