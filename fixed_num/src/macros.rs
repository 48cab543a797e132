/// Implements a binary operator and its assigning form for every owned/borrowed
/// combination, forwarding to `$method(&FixedPoint, &FixedPoint) -> FixedPoint`.
macro_rules! forward_binop {
    ($op: ident, $op_fn: ident, $assign: ident, $assign_fn: ident, $method: path) => {
        impl std::ops::$op<&FixedPoint> for &FixedPoint {
            type Output = FixedPoint;

            fn $op_fn(self, rhs: &FixedPoint) -> Self::Output {
                $method(self, rhs)
            }
        }

        impl std::ops::$op for FixedPoint {
            type Output = FixedPoint;

            fn $op_fn(self, rhs: FixedPoint) -> Self::Output {
                $method(&self, &rhs)
            }
        }

        impl std::ops::$op<&FixedPoint> for FixedPoint {
            type Output = FixedPoint;

            fn $op_fn(self, rhs: &FixedPoint) -> Self::Output {
                $method(&self, rhs)
            }
        }

        impl std::ops::$op<FixedPoint> for &FixedPoint {
            type Output = FixedPoint;

            fn $op_fn(self, rhs: FixedPoint) -> Self::Output {
                $method(self, &rhs)
            }
        }

        impl std::ops::$assign for FixedPoint {
            fn $assign_fn(&mut self, rhs: FixedPoint) {
                *self = $method(self, &rhs);
            }
        }

        impl std::ops::$assign<&FixedPoint> for FixedPoint {
            fn $assign_fn(&mut self, rhs: &FixedPoint) {
                *self = $method(self, rhs);
            }
        }
    };
}

/// Builds a [`FixedPoint`](crate::FixedPoint) from a numeric literal, at
/// [`DEFAULT_FRAC_BITS`](crate::DEFAULT_FRAC_BITS) or at an explicit width.
///
/// ```
/// use fixed_num::fixed;
///
/// assert_eq!(fixed!(2.5).to_string(), "2.5");
/// assert_eq!(fixed!(-0.75, 8).to_string(), "-0.75");
/// ```
///
/// # Panics
/// When the literal is not a plain decimal (exponents and type suffixes are rejected).
#[macro_export]
macro_rules! fixed {
    (- $lit: literal) => {
        $crate::FixedPoint::from_literal(concat!("-", stringify!($lit)), $crate::DEFAULT_FRAC_BITS)
    };
    (- $lit: literal, $bits: expr) => {
        $crate::FixedPoint::from_literal(concat!("-", stringify!($lit)), $bits)
    };
    ($lit: literal) => {
        $crate::FixedPoint::from_literal(stringify!($lit), $crate::DEFAULT_FRAC_BITS)
    };
    ($lit: literal, $bits: expr) => {
        $crate::FixedPoint::from_literal(stringify!($lit), $bits)
    };
}
