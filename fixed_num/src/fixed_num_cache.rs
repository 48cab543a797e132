use lazy_static::*;

use crate::FixedPoint;

lazy_static! {
    pub static ref ONE: FixedPoint = FixedPoint::from_u32(1);
    pub static ref TEN: FixedPoint = FixedPoint::from_u32(10);
}
