use std::cmp::Ordering;

use crate::limb;
use crate::FixedPoint;

// 实现大小比较
impl FixedPoint {
    /// Orders the magnitudes, signs are ignored.
    pub fn compare_abs(&self, other: &FixedPoint) -> Ordering {
        match limb::compare_mag(&self.integer, &other.integer) {
            Ordering::Equal => {},
            ord => return ord,
        }
        // shorter fraction is padded with zero words
        let len = self.fractional.len().max(other.fractional.len());
        for i in 0..len {
            let a = self.fractional.get(i).copied().unwrap_or(0);
            let b = other.fractional.get(i).copied().unwrap_or(0);
            if a != b {
                return a.cmp(&b);
            }
        }
        Ordering::Equal
    }

    pub fn bigger_abs(&self, other: &FixedPoint) -> bool {
        self.compare_abs(other).is_gt()
    }

    pub fn less_abs(&self, other: &FixedPoint) -> bool {
        self.compare_abs(other).is_lt()
    }

    /// Negative and not zero.
    fn is_strictly_negative(&self) -> bool {
        self.is_negative && !self.is_zero()
    }
}

impl PartialEq for FixedPoint {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}
impl Eq for FixedPoint {}

impl PartialOrd for FixedPoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FixedPoint {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.is_strictly_negative(), other.is_strictly_negative()) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => self.compare_abs(other),
            (true, true) => self.compare_abs(other).reverse(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::FixedPoint;

    fn num(s: &str, bits: usize) -> FixedPoint {
        FixedPoint::new(s, bits).unwrap()
    }

    #[test]
    fn test_compare() {
        let a = num("10.5", 32);
        let b = num("20.25", 32);
        assert!(a < b);
        assert!(!(a > b));
        assert!(a != b);
        assert!(a <= b && b >= a);
        assert!(num("-20.25", 32) < num("-10.5", 32));
        assert!(num("-0.5", 32) < num("0.25", 32));
        assert!(b.bigger_abs(&num("-3", 32)));
        assert!(num("-3", 32).less_abs(&b));
    }

    #[test]
    fn test_compare_fraction_tails() {
        let a = num("837387287387192891829137827382.98329831891029090909000000000000000000000000000000000000001", 500);
        let b = num("837387287387192891829137827382.98329831891029090909000000000000000000000000000000000000000", 700);
        assert!(a > b);
        assert!(a != b);
        // equal values at different precisions
        assert_eq!(num("1.5", 8), num("1.5", 300));
        assert_eq!(num("7", 0), num("7.0", 96));
        // a longer fraction with a non-zero tail is larger
        assert!(num("1.5", 32) < num("1.5000000000000000000001", 128));
    }

    #[test]
    fn test_signed_zero() {
        // a raw negative zero still equals zero
        let mut z = num("0", 32);
        z.is_negative = true;
        assert_eq!(z, num("0", 8));
        assert!(!(z < num("0", 32)));
        assert!(!(z > num("0", 32)));
        assert!(z > num("-0.5", 32));
    }
}
