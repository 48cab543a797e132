//! Fixed Num \
//! This crate provides:
//! - [`FixedPoint`]: arbitrary-precision signed binary fixed-point numbers. The integer part grows
//!   without bound, the fraction keeps an explicit number of bits. Sign and magnitude are stored
//!   separately.
//! - [`fixed!`]: builds a `FixedPoint` from a numeric literal.

#[macro_use]
mod macros;

mod add_sub;
mod cmp;
mod convert;
mod div;
mod error;
mod fixed_num_cache;
mod fixed_num_constants;
mod fixed_point;
mod limb;
mod mul;
mod sqrt;

pub use error::{FixedPointError, Result};
pub use fixed_num_constants::DEFAULT_FRAC_BITS;
pub use fixed_point::FixedPoint;
