//! # FixedPoint
//! Arbitrary-precision signed binary fixed-point numbers in sign-magnitude form.
//! The integer part grows as needed; the fractional part carries an explicit bit precision.
//! # Example
//! ```
//! use fixed_num::FixedPoint;
//!
//! let a = FixedPoint::new("10.5", 32).unwrap();
//! let b = FixedPoint::new("20.25", 32).unwrap();
//! assert_eq!((&a + &b).to_string(), "30.75");
//! assert_eq!((&a * &FixedPoint::new("2.0", 32).unwrap()).to_string(), "21.0");
//! assert!(a.checked_div(&FixedPoint::new("0", 32).unwrap()).is_err());
//! ```

use std::fmt;
use std::ops::Neg;

use tracing::warn;

use crate::error::{FixedPointError, Result};
use crate::fixed_num_constants::*;
use crate::limb;

#[derive(Debug, Clone)]
pub struct FixedPoint {
    /// least significant word first
    pub(crate) integer: Vec<u32>,
    /// most significant word first, index 0 follows the binary point
    pub(crate) fractional: Vec<u32>,
    pub(crate) fractional_bits: usize,
    pub(crate) is_negative: bool,
}

/// Words needed to hold `bits` fractional bits, never less than one.
#[inline(always)]
pub(crate) fn words_for(bits: usize) -> usize {
    ((bits + LIMB_BITS - 1) / LIMB_BITS).max(1)
}

// 构造
impl FixedPoint {
    pub fn zero(fractional_bits: usize) -> FixedPoint {
        FixedPoint {
            integer: vec![0],
            fractional: vec![0; words_for(fractional_bits)],
            fractional_bits,
            is_negative: false,
        }
    }

    /// Builds the result of an arithmetic operation. The value is normalized and
    /// its precision becomes the bit length of the remaining fractional words.
    pub(crate) fn from_parts(integer: Vec<u32>, fractional: Vec<u32>, is_negative: bool) -> FixedPoint {
        let mut result = FixedPoint { integer, fractional, fractional_bits: 0, is_negative };
        result.normalize();
        result
    }

    fn normalize(&mut self) {
        self.trim_integer();
        // zero words far from the binary point carry nothing
        let keep = self.fractional.iter().rposition(|&w| w != 0).map_or(1, |i| i + 1);
        self.fractional.truncate(keep);
        if self.fractional.is_empty() {
            self.fractional.push(0);
        }
        self.fractional_bits = self.fractional.len() * LIMB_BITS;
        self.canonical_sign();
    }

    pub(crate) fn trim_integer(&mut self) {
        self.integer.truncate(limb::significant_len(&self.integer).max(1));
        if self.integer.is_empty() {
            self.integer.push(0);
        }
    }

    pub(crate) fn canonical_sign(&mut self) {
        if self.is_zero() {
            self.is_negative = false;
        }
    }
}

// 查询
impl FixedPoint {
    pub fn is_zero(&self) -> bool {
        self.integer.iter().all(|&w| w == 0) && self.fractional.iter().all(|&w| w == 0)
    }

    pub fn is_negative(&self) -> bool {
        self.is_negative
    }

    pub fn fractional_bits(&self) -> usize {
        self.fractional_bits
    }

    /// Integer limbs, least significant first.
    pub fn integer_limbs(&self) -> &[u32] {
        &self.integer
    }

    /// Fractional limbs, most significant first.
    pub fn fractional_limbs(&self) -> &[u32] {
        &self.fractional
    }

    pub fn abs(&self) -> FixedPoint {
        let mut result = self.clone();
        result.is_negative = false;
        result
    }

    /// Copy with the fraction dropped, rounding toward zero.
    pub fn trunc(&self) -> FixedPoint {
        let mut result = self.clone();
        result.resize_fraction(0);
        result.canonical_sign();
        result
    }

    /// Copy with the integer part dropped, the sign is kept.
    pub fn fract(&self) -> FixedPoint {
        let mut result = self.clone();
        result.integer = vec![0];
        result.canonical_sign();
        result
    }
}

// 精度
impl FixedPoint {
    /// Reduces the precision to `precision` bits.
    ///
    /// A request above the current precision is ignored and logged, use
    /// [`FixedPoint::extend_precision`] to widen the fraction instead.
    pub fn set_precision(&mut self, precision: usize) {
        if let Err(err) = self.truncate_precision(precision) {
            warn!(%err, "set_precision ignored");
        }
    }

    pub fn truncate_precision(&mut self, precision: usize) -> Result<()> {
        if precision > self.fractional_bits {
            return Err(FixedPointError::PrecisionIncrease {
                requested: precision,
                current: self.fractional_bits,
            });
        }
        self.resize_fraction(precision);
        self.canonical_sign();
        Ok(())
    }

    /// Zero-extends the fraction to `precision` bits.
    pub fn extend_precision(&mut self, precision: usize) -> Result<()> {
        if precision < self.fractional_bits {
            return Err(FixedPointError::PrecisionDecrease {
                requested: precision,
                current: self.fractional_bits,
            });
        }
        self.resize_fraction(precision);
        Ok(())
    }

    /// Truncates or zero-extends to exactly `precision` bits.
    pub fn with_precision(mut self, precision: usize) -> FixedPoint {
        self.resize_fraction(precision);
        self.canonical_sign();
        self
    }

    fn resize_fraction(&mut self, precision: usize) {
        self.fractional.resize(words_for(precision), 0);
        self.fractional_bits = precision;
        self.mask_fraction();
    }

    /// Clears the bits below `fractional_bits` in the last word.
    fn mask_fraction(&mut self) {
        let bits = self.fractional_bits;
        if bits == 0 {
            self.fractional.iter_mut().for_each(|w| *w = 0);
            return;
        }
        let partial = bits % LIMB_BITS;
        if partial != 0 {
            if let Some(last) = self.fractional.last_mut() {
                *last &= u32::MAX << (LIMB_BITS - partial);
            }
        }
    }

    /// Halves the value in place. The bit shifted past the precision is lost.
    pub fn shift_right(&mut self) {
        let mut carry = 0u32;
        for w in self.integer.iter_mut().rev() {
            let out = *w & 1;
            *w = (*w >> 1) | (carry << 31);
            carry = out;
        }
        for w in self.fractional.iter_mut() {
            let out = *w & 1;
            *w = (*w >> 1) | (carry << 31);
            carry = out;
        }
        self.mask_fraction();
        self.trim_integer();
        self.canonical_sign();
    }
}

impl Default for FixedPoint {
    fn default() -> Self {
        FixedPoint::zero(DEFAULT_FRAC_BITS)
    }
}

// 取反
impl Neg for FixedPoint {
    type Output = FixedPoint;

    fn neg(mut self) -> Self::Output {
        self.is_negative = !self.is_negative;
        self.canonical_sign();
        self
    }
}

impl Neg for &FixedPoint {
    type Output = FixedPoint;

    fn neg(self) -> Self::Output {
        self.clone().neg()
    }
}

// 打印二进制
impl fmt::Binary for FixedPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative {
            f.write_str("-")?;
        }
        for (i, w) in self.integer.iter().rev().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{:032b}", w)?;
        }
        f.write_str(".")?;
        for (i, w) in self.fractional.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{:032b}", w)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        let v = FixedPoint::from_parts(vec![5, 0, 0], vec![0x8000_0000, 0, 0], false);
        assert_eq!(v.integer, vec![5]);
        assert_eq!(v.fractional, vec![0x8000_0000]);
        assert_eq!(v.fractional_bits, 32);

        // words next to the binary point are never dropped
        let v = FixedPoint::from_parts(vec![0], vec![0, 1, 0], false);
        assert_eq!(v.fractional, vec![0, 1]);
        assert_eq!(v.fractional_bits, 64);

        let v = FixedPoint::from_parts(vec![0, 0], vec![0, 0], true);
        assert_eq!(v.integer, vec![0]);
        assert_eq!(v.fractional, vec![0]);
        assert!(!v.is_negative());
    }

    #[test]
    fn test_set_precision() {
        let mut v = FixedPoint::new("4294967295.23", 48).unwrap();
        assert_eq!(v.fractional.len(), 2);
        let low = v.fractional[1];
        v.set_precision(40);
        assert_eq!(v.fractional_bits(), 40);
        assert_eq!(v.fractional[1], low & 0xFF00_0000);

        v.set_precision(10);
        assert_eq!(v.fractional.len(), 1);
        assert_eq!(v.fractional[0] & 0x003F_FFFF, 0);

        // increase refused
        v.set_precision(100);
        assert_eq!(v.fractional_bits(), 10);
        assert_eq!(
            v.truncate_precision(100),
            Err(FixedPointError::PrecisionIncrease { requested: 100, current: 10 })
        );

        v.set_precision(0);
        assert_eq!(v.fractional, vec![0]);
        assert_eq!(v.to_string(), "4294967295.0");
    }

    #[test]
    fn test_extend_precision() {
        let mut v = FixedPoint::new("0.75", 2).unwrap();
        v.extend_precision(70).unwrap();
        assert_eq!(v.fractional, vec![0xC000_0000, 0, 0]);
        assert_eq!(v.fractional_bits(), 70);
        assert_eq!(
            v.extend_precision(8),
            Err(FixedPointError::PrecisionDecrease { requested: 8, current: 70 })
        );
        let v = v.with_precision(1);
        assert_eq!(v.fractional, vec![0x8000_0000]);
    }

    #[test]
    fn test_shift_right() {
        let mut v = FixedPoint::new("3", 32).unwrap();
        v.shift_right();
        assert_eq!(v.integer, vec![1]);
        assert_eq!(v.fractional, vec![0x8000_0000]);

        let mut v = FixedPoint::from_parts(vec![0, 1], vec![0x0000_0001], false);
        v.shift_right();
        assert_eq!(v.integer, vec![0x8000_0000]);
        assert_eq!(v.fractional, vec![0]);

        // the bit below the precision is dropped
        let mut v = FixedPoint::new("1", 1).unwrap();
        v.shift_right();
        assert_eq!(v.to_string(), "0.5");
        v.shift_right();
        assert!(v.is_zero());
    }

    #[test]
    fn test_binary_dump() {
        let v = FixedPoint::new("-10.5", 32).unwrap();
        assert_eq!(
            format!("{:b}", v),
            "-00000000000000000000000000001010.10000000000000000000000000000000"
        );
    }

    #[test]
    fn test_trunc_and_fract() {
        let v = FixedPoint::new("-7.25", 8).unwrap();
        assert_eq!(v.trunc().to_string(), "-7.0");
        assert_eq!(v.fract().to_string(), "-0.25");
        assert_eq!(v.abs().to_string(), "7.25");
        assert_eq!((-&v).to_string(), "7.25");
        assert!(!(-FixedPoint::zero(8)).is_negative());
    }
}
