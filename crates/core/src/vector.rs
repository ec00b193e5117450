//! Generic three-component vector for geometric computation.
//!
//! [`Vector3D`] is the value type the animation pipeline uses for positions,
//! directions, and scales. It has plain value semantics: copied and assigned
//! by value everywhere, no heap ownership, no identity beyond its three
//! components. Any component triple is a valid instance; the type enforces
//! no normalization or bounds, and NaN/Inf components propagate through the
//! arithmetic per ordinary IEEE semantics.
//!
//! Arithmetic and the dot/cross products work for any numeric component
//! (including the integer [`Vector3DI`]); the length/normalize family is
//! restricted to floating-point components via [`Scalar`].

use num_traits::{Num, NumAssign};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::scalar::Scalar;

/// A three-component vector with publicly accessible fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vector3D<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

/// Single-precision vector, the pipeline's workhorse instantiation.
pub type Vector3DF = Vector3D<f32>;

/// Double-precision vector for accumulation-sensitive computation.
pub type Vector3DD = Vector3D<f64>;

/// Integer vector for grid coordinates and index triples.
///
/// Supports arithmetic and the dot/cross products, but not the
/// floating-point length/normalize family.
pub type Vector3DI = Vector3D<i32>;

impl<T> Vector3D<T> {
    /// Create a vector from its three components. Stores them verbatim,
    /// no validation.
    #[inline]
    #[must_use]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Vector3D { x, y, z }
    }
}

impl<T: Num + Copy> Vector3D<T> {
    /// The zero vector `(0, 0, 0)`.
    #[inline]
    #[must_use]
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero(), T::zero())
    }

    /// Unit vector along the X axis.
    #[inline]
    #[must_use]
    pub fn unit_x() -> Self {
        Self::new(T::one(), T::zero(), T::zero())
    }

    /// Unit vector along the Y axis.
    #[inline]
    #[must_use]
    pub fn unit_y() -> Self {
        Self::new(T::zero(), T::one(), T::zero())
    }

    /// Unit vector along the Z axis.
    #[inline]
    #[must_use]
    pub fn unit_z() -> Self {
        Self::new(T::zero(), T::zero(), T::one())
    }

    /// Squared magnitude `x² + y² + z²`.
    ///
    /// Exact, no tolerance involved. Prefer this over [`length`] when only
    /// comparing magnitudes, to skip the square root.
    ///
    /// [`length`]: Vector3D::length
    #[inline]
    #[must_use]
    pub fn length_squared(self) -> T {
        (self.x * self.x) + (self.y * self.y) + (self.z * self.z)
    }

    /// Dot product with `rhs`. Delegates to the free function [`dot`].
    #[inline]
    #[must_use]
    pub fn dot(self, rhs: Self) -> T {
        dot(self, rhs)
    }

    /// Cross product with `rhs`. Delegates to the free function [`cross`].
    #[inline]
    #[must_use]
    pub fn cross(self, rhs: Self) -> Self {
        cross(self, rhs)
    }
}

impl<T: Scalar> Vector3D<T> {
    /// Magnitude `sqrt(x² + y² + z²)`.
    #[inline]
    #[must_use]
    pub fn length(self) -> T {
        self.length_squared().sqrt()
    }

    /// A new vector with the same direction and unit length.
    ///
    /// Returns the zero vector when the length is at or below
    /// [`Scalar::LENGTH_EPSILON`], where dividing by it would be unstable.
    /// Does not mutate `self`; the in-place counterpart is [`normalize`],
    /// whose guard behavior intentionally differs.
    ///
    /// [`normalize`]: Vector3D::normalize
    #[inline]
    #[must_use]
    pub fn normalized(self) -> Self {
        let length = self.length();
        if length > T::LENGTH_EPSILON {
            self * (T::one() / length)
        } else {
            Self::zero()
        }
    }

    /// Scale `self` to unit length in place, returning it for chaining.
    ///
    /// When the length is at or below [`Scalar::LENGTH_EPSILON`] the vector
    /// is left UNCHANGED rather than zeroed. This diverges from
    /// [`normalized`], which returns the zero vector under the same guard;
    /// callers that keep a tiny vector around rely on it surviving.
    ///
    /// [`normalized`]: Vector3D::normalized
    #[inline]
    pub fn normalize(&mut self) -> &mut Self {
        let length = self.length();
        if length > T::LENGTH_EPSILON {
            *self = *self * (T::one() / length);
        }
        self
    }

    /// Euclidean distance between two points.
    #[inline]
    #[must_use]
    pub fn distance(self, other: Self) -> T {
        (self - other).length()
    }

    /// Linear interpolation from `self` (at `t = 0`) to `other` (at `t = 1`).
    #[inline]
    #[must_use]
    pub fn lerp(self, other: Self, t: T) -> Self {
        self + (other - self) * t
    }
}

/// Dot product of two vectors.
///
/// Positive result: the vectors point in similar directions.
/// Negative result: the vectors point in opposite directions.
/// Zero result: the vectors are perpendicular.
#[inline]
#[must_use]
pub fn dot<T: Num + Copy>(lhs: Vector3D<T>, rhs: Vector3D<T>) -> T {
    (lhs.x * rhs.x) + (lhs.y * rhs.y) + (lhs.z * rhs.z)
}

/// Cross product of two vectors, right-handed convention.
///
/// The result is perpendicular to both inputs, with magnitude proportional
/// to the sine of the angle between them.
#[inline]
#[must_use]
pub fn cross<T: Num + Copy>(lhs: Vector3D<T>, rhs: Vector3D<T>) -> Vector3D<T> {
    Vector3D::new(
        (lhs.y * rhs.z) - (lhs.z * rhs.y),
        (lhs.z * rhs.x) - (lhs.x * rhs.z),
        (lhs.x * rhs.y) - (lhs.y * rhs.x),
    )
}

impl<T: Num + Copy> Add for Vector3D<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl<T: NumAssign + Copy> AddAssign for Vector3D<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl<T: Num + Copy> Sub for Vector3D<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl<T: NumAssign + Copy> SubAssign for Vector3D<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
    }
}

// Vector × vector: component-wise (Hadamard) product, i.e. non-uniform scale
impl<T: Num + Copy> Mul for Vector3D<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z)
    }
}

impl<T: NumAssign + Copy> MulAssign for Vector3D<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        self.x *= rhs.x;
        self.y *= rhs.y;
        self.z *= rhs.z;
    }
}

// Vector × scalar: uniform scale
impl<T: Num + Copy> Mul<T> for Vector3D<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl<T: NumAssign + Copy> MulAssign<T> for Vector3D<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        self.x *= rhs;
        self.y *= rhs;
        self.z *= rhs;
    }
}

// Scalar × vector needs one impl per concrete scalar: a blanket impl over T
// would claim a foreign type parameter as Self.
macro_rules! left_scalar_mul_impls {
    ($($scalar:ty),*) => {$(
        impl Mul<Vector3D<$scalar>> for $scalar {
            type Output = Vector3D<$scalar>;

            #[inline]
            fn mul(self, rhs: Vector3D<$scalar>) -> Vector3D<$scalar> {
                Vector3D::new(self * rhs.x, self * rhs.y, self * rhs.z)
            }
        }
    )*};
}

left_scalar_mul_impls!(f32, f64, i32);

impl<T: Neg<Output = T> + Copy> Neg for Vector3D<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl<T> From<[T; 3]> for Vector3D<T> {
    #[inline]
    fn from(components: [T; 3]) -> Self {
        let [x, y, z] = components;
        Vector3D { x, y, z }
    }
}

impl<T> From<Vector3D<T>> for [T; 3] {
    #[inline]
    fn from(v: Vector3D<T>) -> [T; 3] {
        [v.x, v.y, v.z]
    }
}

impl<T: fmt::Display> fmt::Display for Vector3D<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

// Three identical fields in declaration order under repr(C): no padding, so
// the byte-cast traits are sound whenever the component type carries them.
#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Vector3D<T> {}

#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Vector3D<T> {}

#[cfg(feature = "approx")]
impl<T: approx::AbsDiffEq> approx::AbsDiffEq for Vector3D<T>
where
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> T::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T::Epsilon) -> bool {
        T::abs_diff_eq(&self.x, &other.x, epsilon)
            && T::abs_diff_eq(&self.y, &other.y, epsilon)
            && T::abs_diff_eq(&self.z, &other.z, epsilon)
    }
}

#[cfg(feature = "approx")]
impl<T: approx::RelativeEq> approx::RelativeEq for Vector3D<T>
where
    T::Epsilon: Copy,
{
    fn default_max_relative() -> T::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T::Epsilon, max_relative: T::Epsilon) -> bool {
        T::relative_eq(&self.x, &other.x, epsilon, max_relative)
            && T::relative_eq(&self.y, &other.y, epsilon, max_relative)
            && T::relative_eq(&self.z, &other.z, epsilon, max_relative)
    }
}
