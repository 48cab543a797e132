//! Decimal strings and primitive numbers to and from the limb representation.

use std::fmt;
use std::str::FromStr;

use crate::error::{FixedPointError, Result};
use crate::fixed_num_cache::TEN;
use crate::fixed_num_constants::*;
use crate::fixed_point::{words_for, FixedPoint};

// 实现解析
impl FixedPoint {
    /// Parses `[+|-]digits[.digits]` keeping `fractional_bits` bits of the fraction.
    /// Bits beyond the precision are truncated.
    pub fn new(num: &str, fractional_bits: usize) -> Result<FixedPoint> {
        let (is_negative, int_digits, frac_digits) = split_decimal(num)?;
        let mut result = FixedPoint {
            integer: int_part_to_bin(int_digits),
            fractional: frac_part_to_bin(frac_digits, fractional_bits),
            fractional_bits,
            is_negative,
        };
        result.trim_integer();
        result.canonical_sign();
        Ok(result)
    }

    /// Exact binary expansion of `num`, truncated to `fractional_bits`.
    pub fn from_f64(num: f64, fractional_bits: usize) -> Result<FixedPoint> {
        if !num.is_finite() {
            return Err(FixedPointError::NonFinite);
        }
        let raw = num.abs().to_bits();
        let biased_exp = ((raw >> 52) & 0x7ff) as i64;
        let mut mantissa = raw & ((1u64 << 52) - 1);
        // value = mantissa * 2^exponent
        let exponent = if biased_exp == 0 {
            -1074
        } else {
            mantissa |= 1u64 << 52;
            biased_exp - 1075
        };

        let mut result = FixedPoint::zero(fractional_bits);
        result.is_negative = num.is_sign_negative();
        for i in 0..53 {
            if (mantissa >> i) & 1 == 0 {
                continue;
            }
            let pos = i + exponent;
            if pos >= 0 {
                let pos = pos as usize;
                let idx = pos / LIMB_BITS;
                if idx >= result.integer.len() {
                    result.integer.resize(idx + 1, 0);
                }
                result.integer[idx] |= 1 << (pos % LIMB_BITS);
            } else {
                // bit t after the binary point
                let t = (-pos - 1) as usize;
                if t < fractional_bits {
                    result.fractional[t / LIMB_BITS] |= 1 << (LIMB_BITS - 1 - t % LIMB_BITS);
                }
            }
        }
        result.canonical_sign();
        Ok(result)
    }

    /// Backs the [`fixed!`](crate::fixed) macro.
    ///
    /// # Panics
    /// When `lit` is not a decimal literal.
    #[doc(hidden)]
    pub fn from_literal(lit: &str, fractional_bits: usize) -> FixedPoint {
        let cleaned: String = lit.chars().filter(|c| !c.is_whitespace() && *c != '_').collect();
        match FixedPoint::new(&cleaned, fractional_bits) {
            Ok(v) => v,
            Err(err) => panic!("{}", err),
        }
    }

    fn value_of(val: u64, is_negative: bool) -> FixedPoint {
        let mut result = FixedPoint::zero(DEFAULT_FRAC_BITS);
        result.integer = vec![val as u32, (val >> 32) as u32];
        result.is_negative = is_negative;
        result.trim_integer();
        result.canonical_sign();
        result
    }

    /// An integer with no fractional precision.
    pub(crate) fn from_u32(val: u32) -> FixedPoint {
        let mut result = FixedPoint::zero(0);
        result.integer = vec![val];
        result
    }
}

fn parse_error(input: &str, reason: &'static str) -> FixedPointError {
    FixedPointError::Parse { input: input.to_string(), reason }
}

/// Splits a decimal string into sign, integer digits and fractional digits.
fn split_decimal(val: &str) -> Result<(bool, Vec<u8>, Vec<u8>)> {
    let mut is_negative = false;
    let mut body = val;
    let index_plus = val.rfind('+');
    let index_minus = val.rfind('-');
    match (index_plus, index_minus) {
        (Some(_), Some(_)) => return Err(parse_error(val, "multiple sign characters")),
        (Some(0), None) => body = &val[1..],
        (None, Some(0)) => {
            is_negative = true;
            body = &val[1..];
        },
        (Some(_), None) | (None, Some(_)) => return Err(parse_error(val, "embedded sign character")),
        (None, None) => { /* Do nothing */ },
    }

    let (int_str, frac_str) = match body.find('.') {
        Some(dot) => (&body[..dot], &body[dot + 1..]),
        None => (body, ""),
    };
    if frac_str.contains('.') {
        return Err(parse_error(val, "more than one decimal point"));
    }
    if int_str.is_empty() && frac_str.is_empty() {
        return Err(parse_error(val, "no digits"));
    }

    let to_digits = |s: &str| -> Result<Vec<u8>> {
        s.bytes()
            .map(|b| match b {
                b'0'..=b'9' => Ok(b - b'0'),
                _ => Err(parse_error(val, "invalid digit")),
            })
            .collect()
    };
    Ok((is_negative, to_digits(int_str)?, to_digits(frac_str)?))
}

/// Repeated halving of the decimal digits, remainders are the binary digits
/// from the least significant one up.
fn int_part_to_bin(digits: Vec<u8>) -> Vec<u32> {
    let mut current: Vec<u8> = digits.into_iter().skip_while(|&d| d == 0).collect();
    let mut result = vec![];
    let mut bit_added = 0;

    while !current.is_empty() {
        let mut remainder = 0;
        for d in current.iter_mut() {
            let value = *d + remainder * 10;
            *d = value / 2;
            remainder = value % 2;
        }
        let zeros = current.iter().take_while(|&&d| d == 0).count();
        current.drain(..zeros);

        if bit_added == 0 {
            result.push(0);
        }
        if let Some(last) = result.last_mut() {
            *last |= (remainder as u32) << bit_added;
        }
        bit_added = (bit_added + 1) % LIMB_BITS;
    }

    if result.is_empty() {
        result.push(0);
    }
    result
}

/// Repeated doubling of the decimal fraction, the digit carried out of the
/// front is the next binary digit after the point.
fn frac_part_to_bin(mut digits: Vec<u8>, fractional_bits: usize) -> Vec<u32> {
    let mut binary = vec![0u32; words_for(fractional_bits)];
    trim_trailing_zeros(&mut digits);

    for i in 0..fractional_bits {
        if digits.is_empty() {
            break;
        }
        let mut carry = 0;
        for d in digits.iter_mut().rev() {
            let value = *d * 2 + carry;
            *d = value % 10;
            carry = value / 10;
        }
        if carry == 1 {
            binary[i / LIMB_BITS] |= 1 << (LIMB_BITS - 1 - i % LIMB_BITS);
        }
        trim_trailing_zeros(&mut digits);
    }
    binary
}

fn trim_trailing_zeros(digits: &mut Vec<u8>) {
    while digits.last() == Some(&0) {
        digits.pop();
    }
}

impl FromStr for FixedPoint {
    type Err = FixedPointError;

    fn from_str(s: &str) -> Result<Self> {
        FixedPoint::new(s, DEFAULT_FRAC_BITS)
    }
}

impl TryFrom<f64> for FixedPoint {
    type Error = FixedPointError;

    fn try_from(val: f64) -> Result<Self> {
        FixedPoint::from_f64(val, DEFAULT_FRAC_BITS)
    }
}

macro_rules! impl_unsigned_to_fixed {
    ($($u: ty),*) => {
    $(
    impl From<$u> for FixedPoint {
        fn from(val: $u) -> Self {
            FixedPoint::value_of(val as u64, false)
        }
    }
    )*
    };
}

macro_rules! impl_signed_to_fixed {
    ($($i: ty),*) => {
    $(
    impl From<$i> for FixedPoint {
        fn from(val: $i) -> Self {
            FixedPoint::value_of((val as i64).unsigned_abs(), val < 0)
        }
    }
    )*
    };
}
impl_unsigned_to_fixed!(u8, u16, u32, usize, u64);
impl_signed_to_fixed!(i8, i16, i32, isize, i64);

// 实现打印
impl fmt::Display for FixedPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = String::new();
        if self.is_negative && !self.is_zero() {
            s.push('-');
        }
        s.extend(self.integer_digits().into_iter().map(|d| DIGITS[d as usize]));
        s.push('.');
        let frac = self.fraction_digits(digit_budget(self.fractional.len() * LIMB_BITS));
        if frac.is_empty() {
            s.push('0');
        } else {
            s.extend(frac.into_iter().map(|d| DIGITS[d as usize]));
        }
        f.write_str(&s)
    }
}

/// Decimal digits that `bits` binary fraction digits can resolve, `bits` is word rounded by the caller.
fn digit_budget(bits: usize) -> usize {
    ((bits * LOG10_2_NUM + LOG10_2_DEN - 1) / LOG10_2_DEN).max(1)
}

impl FixedPoint {
    /// Renders exactly `digits` fractional digits, rounded half up on the magnitude.
    /// With `digits == 0` only the rounded integer is printed.
    pub fn to_decimal_string(&self, digits: usize) -> String {
        let int_digits = self.integer_digits();
        let int_len = int_digits.len();
        let mut all = int_digits;
        let mut frac = self.fraction_digits(digits + 1);
        frac.resize(digits + 1, 0);
        let round_up = frac[digits] >= 5;
        frac.truncate(digits);
        all.extend(frac);

        let mut int_len = int_len;
        if round_up {
            let mut carry = true;
            for d in all.iter_mut().rev() {
                if *d == 9 {
                    *d = 0;
                } else {
                    *d += 1;
                    carry = false;
                    break;
                }
            }
            if carry {
                all.insert(0, 1);
                int_len += 1;
            }
        }

        let mut s = String::with_capacity(all.len() + 2);
        if self.is_negative && all.iter().any(|&d| d != 0) {
            s.push('-');
        }
        for (i, d) in all.into_iter().enumerate() {
            if i == int_len {
                s.push('.');
            }
            s.push(DIGITS[d as usize]);
        }
        s
    }

    /// Decimal digits of the integer part, most significant first.
    fn integer_digits(&self) -> Vec<u8> {
        let mut x = self.trunc().abs();
        let mut digits = vec![];
        while !x.is_zero() {
            let q = x.restoring_div(&TEN).trunc();
            let r = &x - &(&q * &*TEN);
            digits.push(r.integer[0] as u8);
            x = q;
        }
        if digits.is_empty() {
            digits.push(0);
        }
        digits.reverse();
        digits
    }

    /// Up to `limit` decimal digits of the fraction, stops early once the rest is zero.
    fn fraction_digits(&self, limit: usize) -> Vec<u8> {
        let mut r = self.fract().abs();
        let mut digits = Vec::with_capacity(limit);
        while digits.len() < limit && !r.is_zero() {
            r = &r * &*TEN;
            digits.push(r.integer[0] as u8);
            r = r.fract();
        }
        digits
    }
}
