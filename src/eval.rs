//! Binary operations on decimal operands for the `eval` subcommand.

use std::fmt;
use std::str::FromStr;

use fixed_num::{FixedPoint, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl FromStr for Op {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "+" => Ok(Op::Add),
            "-" => Ok(Op::Sub),
            "*" | "x" => Ok(Op::Mul),
            "/" => Ok(Op::Div),
            _ => Err(format!("unknown operator `{}`, expected one of + - * /", s)),
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Op::Add => "+",
            Op::Sub => "-",
            Op::Mul => "*",
            Op::Div => "/",
        };
        f.write_str(symbol)
    }
}

impl Op {
    pub fn apply(self, a: &FixedPoint, b: &FixedPoint) -> Result<FixedPoint> {
        Ok(match self {
            Op::Add => a + b,
            Op::Sub => a - b,
            Op::Mul => a * b,
            Op::Div => a.checked_div(b)?,
        })
    }
}

/// Parses both operands at `fractional_bits` and applies `op`.
pub fn evaluate(a: &str, op: Op, b: &str, fractional_bits: usize) -> Result<FixedPoint> {
    let a = FixedPoint::new(a, fractional_bits)?;
    let b = FixedPoint::new(b, fractional_bits)?;
    op.apply(&a, &b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fixed_num::FixedPointError;

    #[test]
    fn test_parse_op() {
        assert_eq!("+".parse::<Op>(), Ok(Op::Add));
        assert_eq!("x".parse::<Op>(), Ok(Op::Mul));
        assert!("%".parse::<Op>().is_err());
        assert_eq!(Op::Div.to_string(), "/");
    }

    #[test]
    fn test_evaluate() {
        assert_eq!(evaluate("10.5", Op::Add, "20.25", 32).unwrap().to_string(), "30.75");
        assert_eq!(evaluate("10.5", Op::Sub, "20.25", 32).unwrap().to_string(), "-9.75");
        assert_eq!(evaluate("10.5", Op::Mul, "2.0", 32).unwrap().to_string(), "21.0");
        assert_eq!(evaluate("21.0", Op::Div, "2.0", 2).unwrap().to_string(), "10.5");
        assert_eq!(evaluate("1", Op::Div, "0", 32), Err(FixedPointError::DivisionByZero));
        assert!(matches!(evaluate("1.2.3", Op::Add, "1", 32), Err(FixedPointError::Parse { .. })));
    }
}
