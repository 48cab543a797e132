//! Word level arithmetic on limb sequences.
//!
//! Two orderings are in use:
//! - fractional limbs are most-significant first (index 0 sits right after the binary point),
//! - integer limbs and plain magnitudes are least-significant first.

use std::cmp::Ordering;

/// One word of `a + b + carry`, returns the word and the outgoing carry.
#[inline(always)]
pub fn add(a: u32, b: u32, carry: bool) -> (u32, bool) {
    let (sum, c1) = a.overflowing_add(b);
    let (sum, c2) = sum.overflowing_add(carry as u32);
    (sum, c1 | c2)
}

/// One word of `a - b - borrow`, returns the word and the outgoing borrow.
#[inline(always)]
pub fn subtract(a: u32, b: u32, borrow: bool) -> (u32, bool) {
    let (diff, b1) = a.overflowing_sub(b);
    let (diff, b2) = diff.overflowing_sub(borrow as u32);
    (diff, b1 | b2)
}

/// Adds two fractional parts aligned at the binary point.
/// The carry out of the most significant word is returned for the integer part.
pub fn add_frac(a: &[u32], b: &[u32], mut carry: bool) -> (Vec<u32>, bool) {
    let len = a.len().max(b.len());
    let mut result = vec![0u32; len];
    for i in (0..len).rev() {
        let (sum, c) = add(word(a, i), word(b, i), carry);
        result[i] = sum;
        carry = c;
    }
    (result, carry)
}

/// Adds two integer parts, `carry` comes in from the fractional addition.
pub fn add_int(a: &[u32], b: &[u32], mut carry: bool) -> (Vec<u32>, bool) {
    let len = a.len().max(b.len());
    let mut result = Vec::with_capacity(len + 1);
    for i in 0..len {
        let (sum, c) = add(word(a, i), word(b, i), carry);
        result.push(sum);
        carry = c;
    }
    (result, carry)
}

/// `a - b` over fractional parts aligned at the binary point.
/// The borrow out of the most significant word is returned for the integer part.
pub fn sub_frac(a: &[u32], b: &[u32], mut borrow: bool) -> (Vec<u32>, bool) {
    let len = a.len().max(b.len());
    let mut result = vec![0u32; len];
    for i in (0..len).rev() {
        let (diff, br) = subtract(word(a, i), word(b, i), borrow);
        result[i] = diff;
        borrow = br;
    }
    (result, borrow)
}

/// `a - b` over integer parts, `borrow` comes in from the fractional subtraction.
pub fn sub_int(a: &[u32], b: &[u32], mut borrow: bool) -> (Vec<u32>, bool) {
    let len = a.len().max(b.len());
    let mut result = Vec::with_capacity(len);
    for i in 0..len {
        let (diff, br) = subtract(word(a, i), word(b, i), borrow);
        result.push(diff);
        borrow = br;
    }
    (result, borrow)
}

#[inline(always)]
fn word(v: &[u32], i: usize) -> u32 {
    v.get(i).copied().unwrap_or(0)
}

/// Number of words up to and including the most significant non-zero one.
pub fn significant_len(mag: &[u32]) -> usize {
    mag.iter().rposition(|&w| w != 0).map_or(0, |i| i + 1)
}

/// Compares two magnitudes of possibly different lengths.
pub fn compare_mag(a: &[u32], b: &[u32]) -> Ordering {
    let a_len = significant_len(a);
    let b_len = significant_len(b);
    if a_len != b_len {
        return a_len.cmp(&b_len);
    }
    for i in (0..a_len).rev() {
        if a[i] != b[i] {
            return a[i].cmp(&b[i]);
        }
    }
    Ordering::Equal
}

/// `a -= b`, requires `a >= b`.
pub fn sub_mag_assign(a: &mut Vec<u32>, b: &[u32]) {
    debug_assert!(compare_mag(a, b) != Ordering::Less);
    let mut borrow = false;
    for i in 0..a.len() {
        if i >= b.len() && !borrow {
            break;
        }
        let (diff, br) = subtract(a[i], word(b, i), borrow);
        a[i] = diff;
        borrow = br;
    }
    a.truncate(significant_len(a));
}

/// Shifts a magnitude left by one bit, `bit` enters at the bottom.
pub fn shl1_with_bit(mag: &mut Vec<u32>, bit: bool) {
    if mag.last().map_or(true, |&w| w & 0x8000_0000 != 0) {
        mag.push(0);
    }
    let mut carry = bit as u32;
    for w in mag.iter_mut() {
        let out = *w >> 31;
        *w = (*w << 1) | carry;
        carry = out;
    }
}

/// Schoolbook product of two magnitudes, `x.len() + y.len()` words long.
pub fn mul_mag(x: &[u32], y: &[u32]) -> Vec<u32> {
    let mut z = vec![0u32; x.len() + y.len()];
    for (i, &xi) in x.iter().enumerate() {
        if xi == 0 {
            continue;
        }
        let mut carry: u64 = 0;
        for (j, &yj) in y.iter().enumerate() {
            let product = (xi as u64) * (yj as u64) + (z[i + j] as u64) + carry;
            z[i + j] = product as u32;
            carry = product >> u32::BITS;
        }
        z[i + y.len()] = carry as u32;
    }
    z
}

/// Joins a number into one least-significant-first magnitude: fractional words reversed, then integer words.
pub fn to_magnitude(integer: &[u32], fractional: &[u32]) -> Vec<u32> {
    fractional
        .iter()
        .rev()
        .chain(integer.iter())
        .copied()
        .collect()
}

/// Inverse of [`to_magnitude`]: the lowest `frac_words` words become the fractional part.
pub fn split_magnitude(mut mag: Vec<u32>, frac_words: usize) -> (Vec<u32>, Vec<u32>) {
    if mag.len() <= frac_words {
        mag.resize(frac_words + 1, 0);
    }
    let integer = mag.split_off(frac_words);
    mag.reverse();
    (integer, mag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_carry_and_borrow() {
        assert_eq!(add(u32::MAX, 1, false), (0, true));
        assert_eq!(add(u32::MAX, 0, true), (0, true));
        assert_eq!(add(1, 2, true), (4, false));
        assert_eq!(subtract(0, 1, false), (u32::MAX, true));
        assert_eq!(subtract(5, 5, true), (u32::MAX, true));
        assert_eq!(subtract(5, 3, true), (1, false));
    }

    #[test]
    fn test_add_frac_carries_into_integer() {
        // 0.5 + 0.5
        let (frac, carry) = add_frac(&[0x8000_0000], &[0x8000_0000], false);
        assert_eq!(frac, vec![0]);
        assert!(carry);
        // carry crosses a word boundary, the longer tail is kept
        let (frac, carry) = add_frac(&[0, u32::MAX, 7], &[0, 1], false);
        assert_eq!(frac, vec![1, 0, 7]);
        assert!(!carry);
    }

    #[test]
    fn test_add_and_sub_int() {
        let (int, carry) = add_int(&[u32::MAX, u32::MAX], &[1], false);
        assert_eq!(int, vec![0, 0]);
        assert!(carry);
        let (int, borrow) = sub_int(&[0, 1], &[1], false);
        assert_eq!(int, vec![u32::MAX, 0]);
        assert!(!borrow);
        let (frac, borrow) = sub_frac(&[0x8000_0000], &[0x8000_0000, 1], false);
        assert_eq!(frac, vec![u32::MAX, u32::MAX]);
        assert!(borrow);
    }

    #[test]
    fn test_magnitude_helpers() {
        assert_eq!(significant_len(&[1, 0, 0]), 1);
        assert_eq!(significant_len(&[0, 0]), 0);
        assert_eq!(compare_mag(&[5, 0, 0], &[5]), Ordering::Equal);
        assert_eq!(compare_mag(&[0, 1], &[u32::MAX]), Ordering::Greater);

        let mut a = vec![0, 1];
        sub_mag_assign(&mut a, &[1]);
        assert_eq!(a, vec![u32::MAX]);

        let mut m = vec![0x8000_0000];
        shl1_with_bit(&mut m, true);
        assert_eq!(m, vec![1, 1]);

        assert_eq!(mul_mag(&[u32::MAX], &[u32::MAX]), vec![1, 0xFFFF_FFFE]);
        assert_eq!(mul_mag(&[2, 1], &[3]), vec![6, 3, 0]);
    }

    #[test]
    fn test_magnitude_round_trip() {
        let mag = to_magnitude(&[3, 4], &[1, 2]);
        assert_eq!(mag, vec![2, 1, 3, 4]);
        assert_eq!(split_magnitude(mag, 2), (vec![3, 4], vec![1, 2]));
        assert_eq!(split_magnitude(vec![9], 2), (vec![0], vec![0, 9]));
    }
}
