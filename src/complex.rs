//! Generalized complex numbers: a scalar part plus an imaginary vector.
//!
//! The family covers the power-of-two orders with closed-form products:
//! [`Binarion`] (order 2, the ordinary complex plane) and [`Quaternion`]
//! (order 4). Both share one Cayley–Dickson-shaped formula,
//!
//! ```text
//! (a · b).scalar = a.s * b.s − a.v ⋅ b.v
//! (a · b).vector = a.s * b.v + b.s * a.v + a.v × b.v
//! ```
//!
//! where the cross product degenerates to zero for order 2 and is the
//! ordinary 3-D cross product for order 4. Orders 8 and above (octonions
//! onward) are out of scope.
//!
//! Storage is contiguous, scalar first, so a value can be reinterpreted as
//! its coefficient array.

use crate::vector::Vector;
use num_traits::Float;

macro_rules! generalized_complex {
    ($(#[$meta:meta])* $name:ident, vector: $dim:literal, order: $order:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq)]
        #[repr(C)]
        pub struct $name<T> {
            scalar: T,
            vector: Vector<T, $dim>,
        }

        impl<T: Float> $name<T> {
            /// Assemble from a scalar part and an imaginary vector.
            #[inline]
            pub fn new(scalar: T, vector: Vector<T, $dim>) -> Self {
                Self { scalar, vector }
            }

            /// Purely real value.
            #[inline]
            pub fn from_real(scalar: T) -> Self {
                Self {
                    scalar,
                    vector: Vector::zeros(),
                }
            }

            /// All coefficients, scalar first.
            pub fn from_array(a: [T; $order]) -> Self {
                Self {
                    scalar: a[0],
                    vector: Vector::from_fn(|i| a[i + 1]),
                }
            }

            /// Coefficients in storage order, scalar first.
            pub fn to_array(&self) -> [T; $order] {
                std::array::from_fn(|i| {
                    if i == 0 {
                        self.scalar
                    } else {
                        self.vector[i - 1]
                    }
                })
            }

            #[inline]
            pub fn scalar(&self) -> T {
                self.scalar
            }

            #[inline]
            pub fn vector(&self) -> &Vector<T, $dim> {
                &self.vector
            }

            /// Conjugate: the imaginary vector negated.
            pub fn conjugate(&self) -> Self {
                Self {
                    scalar: self.scalar,
                    vector: -self.vector,
                }
            }

            /// Coefficient-wise inner product.
            pub fn dot(&self, rhs: &Self) -> T {
                self.scalar * rhs.scalar + self.vector.dot(&rhs.vector)
            }

            /// Squared modulus.
            pub fn norm_sqr(&self) -> T {
                self.dot(self)
            }

            /// Modulus.
            pub fn abs(&self) -> T {
                self.norm_sqr().sqrt()
            }

            /// Unit value in the same direction.
            pub fn normalized(&self) -> Self {
                *self * self.norm_sqr().sqrt().recip()
            }

            /// Multiplicative inverse: conjugate over squared modulus.
            pub fn recip(&self) -> Self {
                self.conjugate() * self.norm_sqr().recip()
            }

            /// Exponential: `exp(s) * (cos θ + v̂ sin θ)` with `θ = |v|`.
            pub fn exp(&self) -> Self {
                let theta = self.vector.length();
                let k = if theta == T::zero() {
                    T::one()
                } else {
                    theta.sin() / theta
                };
                Self {
                    scalar: theta.cos(),
                    vector: self.vector * k,
                } * self.scalar.exp()
            }
        }

        impl<T: Float> From<T> for $name<T> {
            fn from(scalar: T) -> Self {
                Self::from_real(scalar)
            }
        }

        impl<T: Float> std::ops::Add for $name<T> {
            type Output = Self;

            fn add(self, rhs: Self) -> Self {
                Self {
                    scalar: self.scalar + rhs.scalar,
                    vector: self.vector + rhs.vector,
                }
            }
        }

        impl<T: Float> std::ops::Sub for $name<T> {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self {
                Self {
                    scalar: self.scalar - rhs.scalar,
                    vector: self.vector - rhs.vector,
                }
            }
        }

        impl<T: Float> std::ops::Neg for $name<T> {
            type Output = Self;

            fn neg(self) -> Self {
                Self {
                    scalar: -self.scalar,
                    vector: -self.vector,
                }
            }
        }

        impl<T: Float> std::ops::Add<T> for $name<T> {
            type Output = Self;

            fn add(self, rhs: T) -> Self {
                Self {
                    scalar: self.scalar + rhs,
                    vector: self.vector,
                }
            }
        }

        impl<T: Float> std::ops::Sub<T> for $name<T> {
            type Output = Self;

            fn sub(self, rhs: T) -> Self {
                Self {
                    scalar: self.scalar - rhs,
                    vector: self.vector,
                }
            }
        }

        impl<T: Float> std::ops::Mul for $name<T> {
            /// Cayley–Dickson closed form; non-commutative from order 4 up.
            type Output = Self;

            fn mul(self, rhs: Self) -> Self {
                let scalar = self.scalar * rhs.scalar - self.vector.dot(&rhs.vector);
                let vector =
                    rhs.vector * self.scalar + self.vector * rhs.scalar
                        + self.vector.cross(&rhs.vector);
                Self { scalar, vector }
            }
        }

        impl<T: Float> std::ops::Div for $name<T> {
            /// Right division: `a / b = a · b⁻¹`.
            type Output = Self;

            #[allow(clippy::suspicious_arithmetic_impl)]
            fn div(self, rhs: Self) -> Self {
                self * rhs.recip()
            }
        }

        impl<T: Float> std::ops::Mul<T> for $name<T> {
            type Output = Self;

            fn mul(self, rhs: T) -> Self {
                Self {
                    scalar: self.scalar * rhs,
                    vector: self.vector * rhs,
                }
            }
        }

        impl<T: Float> std::ops::Div<T> for $name<T> {
            type Output = Self;

            fn div(self, rhs: T) -> Self {
                Self {
                    scalar: self.scalar / rhs,
                    vector: self.vector / rhs,
                }
            }
        }

        impl<T: Float> std::ops::AddAssign for $name<T> {
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl<T: Float> std::ops::SubAssign for $name<T> {
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl<T: Float> std::ops::MulAssign for $name<T> {
            fn mul_assign(&mut self, rhs: Self) {
                *self = *self * rhs;
            }
        }

        impl<T: Float> std::ops::DivAssign for $name<T> {
            fn div_assign(&mut self, rhs: Self) {
                *self = *self / rhs;
            }
        }
    };
}

generalized_complex! {
    /// Order-2 generalized complex number (the ordinary complex plane):
    /// one scalar plus a one-component imaginary vector.
    Binarion, vector: 1, order: 2
}

generalized_complex! {
    /// Order-4 generalized complex number: one scalar plus a
    /// three-component imaginary vector, multiplying by the Hamilton
    /// product.
    Quaternion, vector: 3, order: 4
}

impl<T: Float> Binarion<T> {
    /// The imaginary unit.
    pub fn i() -> Self {
        Self::new(T::zero(), Vector::new([T::one()]))
    }

    /// Construct from rectangular components.
    pub fn from_re_im(re: T, im: T) -> Self {
        Self::new(re, Vector::new([im]))
    }
}

impl<T: Float> Quaternion<T> {
    pub fn i() -> Self {
        Self::new(T::zero(), Vector::new([T::one(), T::zero(), T::zero()]))
    }

    pub fn j() -> Self {
        Self::new(T::zero(), Vector::new([T::zero(), T::one(), T::zero()]))
    }

    pub fn k() -> Self {
        Self::new(T::zero(), Vector::new([T::zero(), T::zero(), T::one()]))
    }
}
