//! End-to-end cases running the full computation.


use {
    crate::{domain::eclp::Params, infra::cli::Args},
    bigdecimal::BigDecimal,
    clap::Parser,
};

pub fn dec(value: &str) -> BigDecimal {
    value.parse().unwrap()
}

/// Parses command line arguments as the binary would.
pub fn args(extra: &[&str]) -> Args {
    Args::try_parse_from(["eclp-params"].iter().chain(extra)).unwrap()
}

/// Runs the program for the given arguments and returns its stdout.
pub fn output(extra: &[&str]) -> String {
    let mut out = Vec::new();
    crate::run(&args(extra), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

/// The built-in deployment parameters.
pub fn deployment_params() -> Params {
    Params {
        alpha: dec("1.035905"),
        beta: dec("1.144947"),
        c: dec("1"),
        s: dec("0"),
        lambda: dec("50"),
    }
}
