//! Animation Math Core Library
//!
//! Foundational arithmetic primitives for geometric computation in the
//! animation pipeline: positions, directions, and scales are all carried as
//! [`Vector3D`] values.
//!
//! The vector type is generic over its scalar component type. Plain
//! arithmetic (addition, scaling, dot and cross products) is available for
//! any numeric component, while the length/normalize family requires a
//! floating-point component implementing [`Scalar`].
//!
//! # Usage
//! ```
//! use anim_math_core::Vector3DF;
//!
//! let up = Vector3DF::unit_y();
//! let forward = Vector3DF::unit_z();
//!
//! // Right-handed convention: up × forward = right
//! let right = up.cross(forward);
//! assert_eq!(right, Vector3DF::new(1.0, 0.0, 0.0));
//!
//! let diagonal = Vector3DF::new(3.0, 4.0, 0.0);
//! assert_eq!(diagonal.length(), 5.0);
//! ```

pub mod scalar;
pub mod vector;

// Re-export the full vector surface
pub use scalar::Scalar;
pub use vector::{cross, dot, Vector3D, Vector3DD, Vector3DF, Vector3DI};
