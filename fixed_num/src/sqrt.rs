use tracing::{debug, trace};

use crate::error::{FixedPointError, Result};
use crate::fixed_num_cache::ONE;
use crate::fixed_num_constants::*;
use crate::FixedPoint;

// 实现开方
impl FixedPoint {
    /// Square root at the receiver's precision, truncated.
    ///
    /// Newton's iteration `x = (x + a / x) / 2` starting from one, until two
    /// successive iterates agree.
    pub fn sqrt(&self) -> Result<FixedPoint> {
        if self.is_negative && !self.is_zero() {
            return Err(FixedPointError::NegativeSqrtArgument);
        }
        let max_iterations = SQRT_MAX_ITERATIONS + self.integer.len() * LIMB_BITS + self.fractional_bits;
        self.sqrt_capped(max_iterations)
    }

    /// Newton loop of [`FixedPoint::sqrt`], giving up after `max_iterations` steps.
    /// `self` must not be negative.
    pub(crate) fn sqrt_capped(&self, max_iterations: usize) -> Result<FixedPoint> {
        let precision = self.fractional_bits;
        if self.is_zero() {
            return Ok(FixedPoint::zero(precision));
        }

        let mut prev = FixedPoint::zero(precision);
        let mut current = ONE.clone().with_precision(precision);

        for iteration in 0..max_iterations {
            let quotient = self.restoring_div(&current);
            let mut next = (&current + &quotient).with_precision(precision);
            next.shift_right();
            trace!(iteration, "sqrt iterate {}", next);

            if next == current || next.is_zero() {
                debug!(iterations = iteration + 1, "sqrt converged");
                return Ok(next);
            }
            // truncated iterates may alternate between the root and one ulp above it
            if next == prev {
                debug!(iterations = iteration + 1, "sqrt settled in a two-cycle");
                return Ok(next.min(current));
            }
            prev = std::mem::replace(&mut current, next);
        }

        Err(FixedPointError::ConvergenceFailure { iterations: max_iterations })
    }
}
