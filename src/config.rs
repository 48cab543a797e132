//! Runtime defaults for the `long-arith` binary.

use clap::ValueEnum;

/// Series used to compute π.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Method {
    Machin,
    Leibniz,
}

/// Defaults for command line arguments left unset.
#[derive(Clone, Debug)]
pub struct Config {
    /// Decimal digits of π to print
    pub digits: usize,
    pub method: Method,
    /// Terms summed by the Leibniz series
    pub terms: usize,
    /// Fractional bits used by `eval` and `sqrt`
    pub bits: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            digits: 100,
            method: Method::Machin,
            terms: 10_000,
            bits: 128,
        }
    }
}

impl Config {
    /// Defaults overridden by `LONG_ARITH_*` environment variables.
    /// Unparsable values are ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(digits) = std::env::var("LONG_ARITH_DIGITS") {
            if let Ok(d) = digits.parse() {
                config.digits = d;
            }
        }

        if let Ok(method) = std::env::var("LONG_ARITH_METHOD") {
            if let Ok(m) = Method::from_str(&method, true) {
                config.method = m;
            }
        }

        if let Ok(terms) = std::env::var("LONG_ARITH_TERMS") {
            if let Ok(t) = terms.parse() {
                config.terms = t;
            }
        }

        if let Ok(bits) = std::env::var("LONG_ARITH_BITS") {
            if let Ok(b) = bits.parse() {
                config.bits = b;
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.digits, 100);
        assert_eq!(config.method, Method::Machin);
        assert_eq!(config.bits, 128);
    }

    #[test]
    fn test_method_names() {
        assert_eq!(Method::from_str("leibniz", true), Ok(Method::Leibniz));
        assert_eq!(Method::from_str("MACHIN", true), Ok(Method::Machin));
        assert!(Method::from_str("chudnovsky", true).is_err());
    }
}
