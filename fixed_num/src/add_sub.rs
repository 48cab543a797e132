use std::cmp::Ordering;

use crate::limb;
use crate::FixedPoint;

// 实现加减法
impl FixedPoint {
    fn add_mag(&self, other: &FixedPoint) -> (Vec<u32>, Vec<u32>) {
        let (fractional, carry) = limb::add_frac(&self.fractional, &other.fractional, false);
        let (mut integer, carry) = limb::add_int(&self.integer, &other.integer, carry);
        if carry {
            integer.push(1);
        }
        (integer, fractional)
    }

    /// `|big| - |little|`, requires `|big| >= |little|`.
    fn sub_mag(big: &FixedPoint, little: &FixedPoint) -> (Vec<u32>, Vec<u32>) {
        let (fractional, borrow) = limb::sub_frac(&big.fractional, &little.fractional, false);
        let (integer, borrow) = limb::sub_int(&big.integer, &little.integer, borrow);
        debug_assert!(!borrow, "magnitude subtraction underflow");
        (integer, fractional)
    }

    /// `self + other`, or `self - other` when `negate_other` is set.
    fn signed_add(&self, other: &FixedPoint, negate_other: bool) -> FixedPoint {
        let other_negative = other.is_negative ^ negate_other;
        if self.is_negative == other_negative {
            let (integer, fractional) = self.add_mag(other);
            return FixedPoint::from_parts(integer, fractional, self.is_negative);
        }

        match self.compare_abs(other) {
            Ordering::Less => {
                let (integer, fractional) = FixedPoint::sub_mag(other, self);
                FixedPoint::from_parts(integer, fractional, other_negative)
            },
            Ordering::Equal => {
                let words = self.fractional.len().max(other.fractional.len());
                FixedPoint::from_parts(vec![0], vec![0; words], false)
            },
            Ordering::Greater => {
                let (integer, fractional) = FixedPoint::sub_mag(self, other);
                FixedPoint::from_parts(integer, fractional, self.is_negative)
            },
        }
    }

    fn plus(a: &FixedPoint, b: &FixedPoint) -> FixedPoint {
        a.signed_add(b, false)
    }

    fn minus(a: &FixedPoint, b: &FixedPoint) -> FixedPoint {
        a.signed_add(b, true)
    }
}

forward_binop!(Add, add, AddAssign, add_assign, FixedPoint::plus);
forward_binop!(Sub, sub, SubAssign, sub_assign, FixedPoint::minus);
