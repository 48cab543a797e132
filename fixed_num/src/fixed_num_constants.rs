pub const LIMB_BITS: usize = u32::BITS as usize;

pub const DEFAULT_FRAC_BITS: usize = 32;

pub const DIGITS: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

// log10(2) ~= LOG10_2_NUM / LOG10_2_DEN
pub const LOG10_2_NUM: usize = 30103;

pub const LOG10_2_DEN: usize = 100000;

pub const SQRT_MAX_ITERATIONS: usize = 64;
