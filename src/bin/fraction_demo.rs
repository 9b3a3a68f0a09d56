//! Prints sample computations on reduced fractions.
//!
//! Run with: cargo run --bin fraction-demo -- --width 64 --verbose

use clap::{Parser, ValueEnum};
use std::io::Write;
use reduced_fraction::{Fraction, FractionInteger};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Operand pairs, each operand as raw `(numerator, denominator)`.
const SAMPLE_PAIRS: [((i16, i16), (i16, i16)); 4] = [
    ((1, 2), (1, 2)),
    ((1, 2), (1, 3)),
    ((3, 12), (3, 8)),
    ((7, 16), (3, 8)),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Width {
    #[value(name = "16")]
    W16,
    #[value(name = "32")]
    W32,
    #[value(name = "64")]
    W64,
    #[value(name = "128")]
    W128,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "fraction-demo")]
#[command(about = "Print sample computations on reduced fractions")]
struct DemoConfig {
    #[arg(long, value_enum, default_value = "32", help = "Integer width of the fraction fields")]
    width: Width,

    #[arg(long, help = "Enable verbose output")]
    verbose: bool,
}

fn init_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("reduced_fraction=debug,fraction_demo=debug,info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("reduced_fraction=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn report<T: FractionInteger>(
    out: &mut impl Write,
    a: Fraction<T>,
    b: Fraction<T>,
) -> anyhow::Result<()> {
    writeln!(out, "{a} * {b} => {}", a * b)?;
    writeln!(out, "{a} / {b} => {}", (a / b)?)?;
    writeln!(out, "{a} + {b} => {}", a + b)?;
    writeln!(out, "{a} - {b} => {}", a - b)?;
    writeln!(out, "{a} == {b} => {}", a == b)?;
    writeln!(out, "{a} < {b} => {}", a < b)?;
    writeln!(out)?;
    Ok(())
}

fn run<T: FractionInteger + From<i16>>(out: &mut impl Write) -> anyhow::Result<()> {
    for ((n1, d1), (n2, d2)) in SAMPLE_PAIRS {
        let a = Fraction::new(T::from(n1), T::from(d1))?;
        let b = Fraction::new(T::from(n2), T::from(d2))?;
        tracing::debug!(%a, %b, "sample pair");
        report(out, a, b)?;
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let config = DemoConfig::parse();

    init_logger(config.verbose);
    tracing::debug!("Demo config: {:?}", config);

    let mut out = std::io::stdout().lock();
    match config.width {
        Width::W16 => run::<i16>(&mut out),
        Width::W32 => run::<i32>(&mut out),
        Width::W64 => run::<i64>(&mut out),
        Width::W128 => run::<i128>(&mut out),
    }
}
