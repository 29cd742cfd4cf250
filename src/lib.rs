//! Fixed-size numeric containers and zero-copy strided views.
//!
//! This crate lets a single contiguous buffer be addressed as a vector, a
//! row- or column-major matrix, or an arbitrarily transposed, reversed or
//! windowed view of one — all through pure offset/stride arithmetic, with
//! cursors that compose across dimensions (iterating a matrix view yields
//! order-1 lane views, which iterate in turn).
//!
//! # Core Types
//!
//! - [`VectorView`] / [`VectorViewMut`]: order-1 strided views over
//!   borrowed slices
//! - [`MatrixView`] / [`MatrixViewMut`]: order-2 strided views, with
//!   zero-copy `transposed`/`reversed`/`subview` transforms
//! - [`Vector`] / [`Matrix`]: fixed-size owning containers with
//!   compile-time dimensions, convertible to and from views
//! - [`Binarion`] / [`Quaternion`]: generalized complex numbers built on
//!   the vector container
//!
//! # Traversal
//!
//! - [`for_each_view`] / [`for_each_view_with`]: nested element visits
//!   with an optional end-of-lane hook
//! - [`copy_view`] / [`copy_view_into`]: rule-driven transfer out of a view
//!
//! # Linear algebra
//!
//! - [`decompose_lu`]: Doolittle LU without pivoting
//! - [`det`] / [`inv`]: determinant and inverse on top of the decomposition
//! - [`identity`]: the identity matrix
//!
//! # Example
//!
//! ```rust
//! use stridemat::{Matrix, MatrixView, Axis};
//!
//! let data: Vec<f64> = (0..12).map(f64::from).collect();
//! let view = MatrixView::from_slice(&data, 3, 4).unwrap();
//!
//! // Zero-copy transpose, then materialize into an owning container.
//! let t: Matrix<f64, 4, 3> = Matrix::from_view(&view.transposed());
//! assert_eq!(t[(1, 2)], 9.0);
//!
//! // Lane-nested iteration in either access sequence.
//! let col_major: Vec<f64> = view.lanes(Axis::Cols).flatten().copied().collect();
//! assert_eq!(col_major[..3], [0.0, 4.0, 8.0]);
//! ```
//!
//! # Design notes
//!
//! Views never own memory and carry no synchronization; they are plain
//! value types whose validity is bounded by the borrow they were created
//! from. Construction validates the full extent once; element access after
//! that is index arithmetic. Owning containers pin both dimensions in the
//! type, so shape mismatches are compile errors rather than runtime
//! checks. Everything is single-threaded, synchronous and allocation-free.

mod complex;
mod fastmath;
mod iter;
mod linalg;
mod matrix;
mod scalar;
mod traverse;
mod vector;
mod view;

// ============================================================================
// Views and cursors
// ============================================================================
pub use iter::{Lanes, StridedIter};
pub use view::{
    reverse_col_view, reverse_row_view, rotate_view_half_pi, rotate_view_neg_half_pi,
    rotate_view_pi, transpose_view, Axis, Flip, MatrixView, MatrixViewMut, VectorView,
    VectorViewMut,
};

// ============================================================================
// Traversal primitives
// ============================================================================
pub use traverse::{copy_view, copy_view_into, for_each_view, for_each_view_mut, for_each_view_with};

// ============================================================================
// Owning containers
// ============================================================================
pub use matrix::Matrix;
pub use scalar::Scalar;
pub use vector::Vector;

// ============================================================================
// Linear algebra
// ============================================================================
pub use linalg::{decompose_lu, det, identity, inv};

// ============================================================================
// Generalized complex numbers
// ============================================================================
pub use complex::{Binarion, Quaternion};

// ============================================================================
// Fast scalar approximations
// ============================================================================
pub use fastmath::{
    abs_bits, cos_fast, exp_fast, ln_fast, rsqrt_fast, rsqrt_fast_f64, sgn_bits, sin_fast,
    sqrt_fast,
};

// ============================================================================
// Error types
// ============================================================================

/// Errors that can occur while constructing or transferring views.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The view's extent escapes the underlying buffer.
    #[error("view extent exceeds buffer bounds")]
    OffsetOverflow,

    /// Zero stride on a dimension longer than one element.
    #[error("invalid stride 0 for dim {dim}")]
    ZeroStride { dim: usize },

    /// Destination cannot hold the view's element count.
    #[error("size mismatch: expected {expected}, got {got}")]
    ShapeMismatch { expected: usize, got: usize },
}

/// Result type for view operations.
pub type Result<T> = std::result::Result<T, Error>;
