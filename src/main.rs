//! Long Arith CLI
//!
//! ```bash
//! long-arith pi --digits 1000
//! long-arith pi --method leibniz --terms 100000 --digits 4
//! long-arith eval 78 / 19 --bits 64
//! long-arith sqrt 2 --bits 256
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fixed_num::FixedPoint;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use long_arith::{evaluate, pi, Config, Method, Op};

#[derive(Parser)]
#[command(name = "long-arith")]
#[command(version)]
#[command(about = "Arbitrary-precision fixed-point calculator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print digits of π
    Pi {
        /// Decimal digits after the point [env: LONG_ARITH_DIGITS]
        #[arg(short, long)]
        digits: Option<usize>,

        /// Series to sum [env: LONG_ARITH_METHOD]
        #[arg(short, long, value_enum)]
        method: Option<Method>,

        /// Terms of the Leibniz series [env: LONG_ARITH_TERMS]
        #[arg(short, long)]
        terms: Option<usize>,
    },

    /// Apply one of + - * / to two decimal numbers
    #[command(allow_negative_numbers = true)]
    Eval {
        a: String,
        op: Op,
        b: String,

        /// Fractional bits of the operands [env: LONG_ARITH_BITS]
        #[arg(short, long)]
        bits: Option<usize>,
    },

    /// Square root of a decimal number
    Sqrt {
        x: String,

        /// Fractional bits of the result [env: LONG_ARITH_BITS]
        #[arg(short, long)]
        bits: Option<usize>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "long_arith=info,fixed_num=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    let cli = Cli::parse();

    match cli.command {
        Commands::Pi { digits, method, terms } => {
            let digits = digits.unwrap_or(config.digits);
            let method = method.unwrap_or(config.method);
            run_pi(digits, method, terms.unwrap_or(config.terms))?;
        }
        Commands::Eval { a, op, b, bits } => {
            let bits = bits.unwrap_or(config.bits);
            let result = evaluate(&a, op, &b, bits).with_context(|| format!("evaluating {} {} {}", a, op, b))?;
            println!("{}", result);
        }
        Commands::Sqrt { x, bits } => {
            let bits = bits.unwrap_or(config.bits);
            let x = FixedPoint::new(&x, bits)?;
            let root = x.sqrt().context("computing the square root")?;
            println!("{}", root);
        }
    }

    Ok(())
}

fn run_pi(digits: usize, method: Method, terms: usize) -> Result<()> {
    tracing::info!(digits, ?method, "computing pi");
    let start = std::time::Instant::now();
    let rendered = match method {
        Method::Machin => pi::pi_digits(digits)?,
        Method::Leibniz => {
            let bits = pi::bits_for_digits(digits) + pi::GUARD_BITS;
            pi::truncate_digits(&pi::leibniz(terms, bits), digits)
        }
    };
    tracing::info!(elapsed_ms = start.elapsed().as_millis() as u64, "pi done");
    println!("{}", rendered);
    Ok(())
}
