//! Long Arith \
//! Consumers of [`fixed_num`]:
//! - [`pi`]: π by the Leibniz and Machin series.
//! - [`eval`]: one binary operation on two decimal operands.
//! - [`config`]: defaults for the `long-arith` binary.

pub mod config;
pub mod eval;
pub mod pi;

pub use config::{Config, Method};
pub use eval::{evaluate, Op};
