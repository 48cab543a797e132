use crate::limb;
use crate::FixedPoint;

// 实现乘法
impl FixedPoint {
    /// Exact product. The fraction of the result is as wide as both operand fractions together.
    fn multiply(a: &FixedPoint, b: &FixedPoint) -> FixedPoint {
        let x = limb::to_magnitude(&a.integer, &a.fractional);
        let y = limb::to_magnitude(&b.integer, &b.fractional);
        let product = limb::mul_mag(&x, &y);
        let frac_words = a.fractional.len() + b.fractional.len();
        let (integer, fractional) = limb::split_magnitude(product, frac_words);
        FixedPoint::from_parts(integer, fractional, a.is_negative ^ b.is_negative)
    }
}

forward_binop!(Mul, mul, MulAssign, mul_assign, FixedPoint::multiply);
