//! Scalar type bounds for container and view elements.

use num_traits::{One, Zero};

/// Shared trait bounds for element types usable with the fixed-size
/// containers and their arithmetic.
///
/// This is a blanket trait: anything satisfying the bounds implements it
/// automatically, so integer, float and user-defined numeric types all
/// qualify without explicit opt-in.
pub trait Scalar:
    Copy
    + PartialEq
    + std::ops::Add<Output = Self>
    + std::ops::Sub<Output = Self>
    + std::ops::Mul<Output = Self>
    + std::ops::Div<Output = Self>
    + Zero
    + One
{
}

impl<T> Scalar for T where
    T: Copy
        + PartialEq
        + std::ops::Add<Output = T>
        + std::ops::Sub<Output = T>
        + std::ops::Mul<Output = T>
        + std::ops::Div<Output = T>
        + Zero
        + One
{
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_scalar<T: Scalar>() {}

    #[test]
    fn test_standard_types() {
        assert_scalar::<f32>();
        assert_scalar::<f64>();
        assert_scalar::<i32>();
        assert_scalar::<u8>();
        assert_scalar::<usize>();
    }
}
