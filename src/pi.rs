//! # Pi
//! Series drivers for π on top of [`FixedPoint`].
//! Every partial result is truncated to the working precision, so the error
//! grows with the number of terms. [`pi_digits`] adds [`GUARD_BITS`] to absorb it.

use fixed_num::{FixedPoint, Result};
use tracing::debug;

/// Extra fractional bits carried while computing [`pi_digits`].
pub const GUARD_BITS: usize = 32;

/// log2(10) as a ratio, rounded up.
const LOG2_10_NUM: usize = 3_321_929;
const LOG2_10_DEN: usize = 1_000_000;

fn one(fractional_bits: usize) -> FixedPoint {
    FixedPoint::from(1u32).with_precision(fractional_bits)
}

/// `4 * (1 - 1/3 + 1/5 - ...)` over the first `terms` terms.
pub fn leibniz(terms: usize, fractional_bits: usize) -> FixedPoint {
    let one = one(fractional_bits);
    let mut sum = FixedPoint::zero(fractional_bits);
    for k in 0..terms {
        let term = (&one / FixedPoint::from(2 * k as u64 + 1)).with_precision(fractional_bits);
        if k % 2 == 0 {
            sum += term;
        } else {
            sum -= term;
        }
        sum = sum.with_precision(fractional_bits);
    }
    (sum * FixedPoint::from(4u32)).with_precision(fractional_bits)
}

/// `arctan(1/n)` by `1/n - 1/(3n^3) + 1/(5n^5) - ...`, stopping once a term
/// truncates to zero.
pub fn arctan_inv(n: u32, fractional_bits: usize) -> Result<FixedPoint> {
    let n_squared = FixedPoint::from(n as u64 * n as u64);
    let mut power = one(fractional_bits).checked_div(&FixedPoint::from(n))?.with_precision(fractional_bits);
    let mut sum = power.clone();
    let mut k = 1u64;
    loop {
        power = power.checked_div(&n_squared)?.with_precision(fractional_bits);
        let term = power.checked_div(&FixedPoint::from(2 * k + 1))?.with_precision(fractional_bits);
        if term.is_zero() {
            break;
        }
        if k % 2 == 1 {
            sum -= term;
        } else {
            sum += term;
        }
        k += 1;
    }
    debug!(n, terms = k, fractional_bits, "arctan series done");
    Ok(sum.with_precision(fractional_bits))
}

/// Machin's formula `16 arctan(1/5) - 4 arctan(1/239)`.
pub fn machin(fractional_bits: usize) -> Result<FixedPoint> {
    let a = arctan_inv(5, fractional_bits)? * FixedPoint::from(16u32);
    let b = arctan_inv(239, fractional_bits)? * FixedPoint::from(4u32);
    Ok((a - b).with_precision(fractional_bits))
}

/// Fractional bits that resolve `digits` decimal digits.
pub fn bits_for_digits(digits: usize) -> usize {
    (digits * LOG2_10_NUM + LOG2_10_DEN - 1) / LOG2_10_DEN
}

/// π with `digits` decimals by Machin's formula. The digits are truncated, not rounded.
pub fn pi_digits(digits: usize) -> Result<String> {
    let fractional_bits = bits_for_digits(digits) + GUARD_BITS;
    let pi = machin(fractional_bits)?;
    Ok(truncate_digits(&pi, digits))
}

/// Renders `value` cut after `digits` fractional digits.
pub fn truncate_digits(value: &FixedPoint, digits: usize) -> String {
    let mut s = value.to_string();
    let Some(dot) = s.find('.') else {
        return s;
    };
    if digits == 0 {
        s.truncate(dot);
        return s;
    }
    while s.len() < dot + 1 + digits {
        s.push('0');
    }
    s.truncate(dot + 1 + digits);
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    const PI_100: &str = "3.\
        1415926535897932384626433832795028841971693993751058209749445923078164062862089986280348253421170679";

    #[test]
    fn test_leibniz() {
        assert_eq!(leibniz(0, 32).to_string(), "0.0");
        assert_eq!(leibniz(1, 32).to_string(), "4.0");
        assert_eq!(leibniz(2, 32).to_decimal_string(3), "2.667");
        let pi = leibniz(1000, 64);
        assert_eq!(pi.to_decimal_string(2), "3.14");
        assert_eq!(pi.fractional_bits(), 64);
    }

    #[test]
    fn test_arctan_inv() {
        // arctan(1) = pi / 4 converges too slowly, use arctan(1/2) = 0.463647609000806...
        let v = arctan_inv(2, 64).unwrap();
        assert_eq!(v.to_decimal_string(12), "0.463647609001");
        assert!(arctan_inv(0, 32).is_err());
    }

    #[test]
    fn test_machin() {
        assert_eq!(machin(64).unwrap().to_decimal_string(15), "3.141592653589793");
    }

    #[test]
    fn test_pi_digits() {
        assert_eq!(pi_digits(0).unwrap(), "3");
        assert_eq!(pi_digits(5).unwrap(), "3.14159");
        assert_eq!(pi_digits(100).unwrap(), PI_100);
    }

    #[test]
    fn test_truncate_digits() {
        let v = FixedPoint::new("2.71875", 8).unwrap();
        assert_eq!(truncate_digits(&v, 3), "2.718");
        assert_eq!(truncate_digits(&v, 8), "2.71875000");
        assert_eq!(truncate_digits(&v, 0), "2");
    }

    #[test]
    fn test_bits_for_digits() {
        assert_eq!(bits_for_digits(0), 0);
        assert_eq!(bits_for_digits(1), 4);
        assert_eq!(bits_for_digits(100), 333);
    }
}
