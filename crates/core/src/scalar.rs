//! Scalar bound for vector component types.

use num_traits::Float;

/// Floating-point scalar usable as a [`Vector3D`](crate::Vector3D) component
/// in the length/normalize family of operations.
///
/// Basic arithmetic (addition, scaling, dot and cross products) only needs
/// [`num_traits::Num`]; this trait adds the square root from
/// [`num_traits::Float`] plus the process-wide length guard applied when
/// dividing by a vector's magnitude.
pub trait Scalar: Float {
    /// Length threshold below which a vector is treated as effectively zero.
    ///
    /// Normalizing divides by the length; at or below this threshold the
    /// division would blow up into infinities or NaNs, so the normalize
    /// family bails out instead of dividing.
    const LENGTH_EPSILON: Self;
}

impl Scalar for f32 {
    const LENGTH_EPSILON: Self = 1.0e-6;
}

impl Scalar for f64 {
    const LENGTH_EPSILON: Self = 1.0e-6;
}
