//! Fixed size vectors (2, 3 and 4 components) and square matrices (2x2, 3x3, 4x4)
//! over integer, single and double precision scalars, plus the usual transform
//! and projection matrix builders.
//!
//! Matrices are stored in column major order: `m[0]`, `m[1]` of a 2x2 matrix are
//! the first column. Every index formula in this crate is written against that
//! layout.

#[macro_use]
mod macros;

mod angle;
mod mat;
mod mixed;
mod projection;
mod scalar;
mod transform;
mod vec;

pub use angle::*;
pub use mat::*;
pub use projection::*;
pub use scalar::*;
pub use transform::*;
pub use vec::*;

pub use num_traits::{Float, One, Zero};
