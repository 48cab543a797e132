use std::cmp::Ordering;

use tracing::trace;

use crate::error::{FixedPointError, Result};
use crate::fixed_num_constants::LIMB_BITS;
use crate::limb;
use crate::FixedPoint;

// 实现除法
impl FixedPoint {
    /// `self / other`, or [`FixedPointError::DivisionByZero`].
    ///
    /// The quotient is truncated toward zero and its fraction is as wide as both
    /// operand fractions together.
    pub fn checked_div(&self, other: &FixedPoint) -> Result<FixedPoint> {
        if other.is_zero() {
            return Err(FixedPointError::DivisionByZero);
        }
        Ok(self.restoring_div(other))
    }

    /// Restoring long division, one dividend bit per step. `other` must be non zero.
    pub(crate) fn restoring_div(&self, other: &FixedPoint) -> FixedPoint {
        let mut divisor = limb::to_magnitude(&other.integer, &other.fractional);
        divisor.truncate(limb::significant_len(&divisor));
        debug_assert!(!divisor.is_empty(), "restoring_div by zero");

        let a_int_bits = self.integer.len() * LIMB_BITS;
        let a_frac_bits = self.fractional.len() * LIMB_BITS;
        let b_frac_bits = other.fractional.len() * LIMB_BITS;
        // padding keeps b_frac_bits of precision beyond the dividend's own fraction
        let total_bits = a_int_bits + a_frac_bits + 2 * b_frac_bits;

        let mut remainder: Vec<u32> = Vec::with_capacity(divisor.len() + 1);
        let mut quotient: Vec<u32> = Vec::with_capacity(total_bits / LIMB_BITS + 1);
        for bit_i in 0..total_bits {
            limb::shl1_with_bit(&mut remainder, self.dividend_bit(bit_i, a_int_bits, a_frac_bits));
            let fits = limb::compare_mag(&remainder, &divisor) != Ordering::Less;
            if fits {
                limb::sub_mag_assign(&mut remainder, &divisor);
            }
            limb::shl1_with_bit(&mut quotient, fits);
        }

        // the first a_int_bits + b_frac_bits quotient bits are the integer part
        let frac_words = self.fractional.len() + other.fractional.len();
        trace!(total_bits, frac_words, "restoring division done");
        let (integer, fractional) = limb::split_magnitude(quotient, frac_words);
        FixedPoint::from_parts(integer, fractional, self.is_negative ^ other.is_negative)
    }

    /// Bit `i` of the dividend counted from its most significant integer bit;
    /// zero once past the fraction.
    #[inline(always)]
    fn dividend_bit(&self, i: usize, int_bits: usize, frac_bits: usize) -> bool {
        if i < int_bits {
            let word = self.integer[self.integer.len() - 1 - i / LIMB_BITS];
            (word >> (LIMB_BITS - 1 - i % LIMB_BITS)) & 1 == 1
        } else if i < int_bits + frac_bits {
            let j = i - int_bits;
            (self.fractional[j / LIMB_BITS] >> (LIMB_BITS - 1 - j % LIMB_BITS)) & 1 == 1
        } else {
            false
        }
    }

    /// # Panics
    /// On a zero divisor, like integer division.
    fn quotient(a: &FixedPoint, b: &FixedPoint) -> FixedPoint {
        match a.checked_div(b) {
            Ok(q) => q,
            Err(err) => panic!("{}", err),
        }
    }
}

forward_binop!(Div, div, DivAssign, div_assign, FixedPoint::quotient);

#[cfg(test)]
mod tests {
    use crate::{FixedPoint, FixedPointError};

    fn num(s: &str, bits: usize) -> FixedPoint {
        FixedPoint::new(s, bits).unwrap()
    }

    #[test]
    fn test_div() {
        assert_eq!((num("21.0", 2) / num("2.0", 2)).to_string(), "10.5");
        let q = num("78.0", 32) / num("19.0", 32);
        assert_eq!(q.trunc().to_string(), "4.0");
        assert_eq!(q.to_decimal_string(6), "4.105263");
        assert_eq!((num("-7.5", 32) / num("2.5", 32)).to_string(), "-3.0");
        assert_eq!((num("-7.5", 32) / num("-0.5", 32)).to_string(), "15.0");
        assert!((num("0", 32) / num("-3", 32)).is_zero());
    }

    #[test]
    fn test_div_precision() {
        let q = num("1", 32) / num("3", 32);
        assert_eq!(q.fractional_bits(), 64);
        assert_eq!(q.fractional_limbs(), &[0x5555_5555, 0x5555_5555]);
        // integer words of the dividend all reach the quotient
        let big = num("340282366920938463463374607431768211456", 0); // 2^128
        let q = &big / &num("2", 0);
        assert_eq!(q.integer_limbs(), &[0, 0, 0, 0x8000_0000]);
    }

    #[test]
    fn test_div_by_zero() {
        assert_eq!(num("1", 32).checked_div(&num("0", 32)), Err(FixedPointError::DivisionByZero));
        assert_eq!(num("1", 32).checked_div(&num("-0.0", 96)), Err(FixedPointError::DivisionByZero));
    }

    #[test]
    #[should_panic(expected = "Attempted division by zero")]
    fn test_div_operator_panics_on_zero() {
        let _ = num("1", 32) / num("0", 32);
    }

    #[test]
    fn test_div_assign() {
        let mut acc = num("1024", 32);
        acc /= num("4", 32);
        acc /= &num("0.5", 32);
        assert_eq!(acc.to_string(), "512.0");
    }
}
