//! Resolution of the pool parameters from their different sources.

use {
    crate::{
        domain::eclp::Params,
        infra::{cli::Args, config::Config},
    },
    anyhow::{Context as _, Result},
    bigdecimal::BigDecimal,
    clap::ValueEnum,
    serde::Deserialize,
    std::fmt,
};

/// Built-in deployment parameters as 18-decimal integers. The bounds are the
/// sUSDS rate over the upper and lower phUSD price ($1.0877 / $1.05 and
/// $1.0877 / $0.95), with no rotation.
pub mod defaults {
    pub const ALPHA: &str = "1035905000000000000";
    pub const BETA: &str = "1144947000000000000";
    pub const C: &str = "1000000000000000000";
    pub const S: &str = "0";
    pub const LAMBDA: &str = "50000000000000000000";
}

/// How a parameter literal is to be read.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// A plain decimal such as `1.035905`.
    #[default]
    Decimal,
    /// An 18-decimal fixed point integer such as `1035905000000000000`.
    Wei18,
}

impl Unit {
    pub fn parse(self, literal: &str) -> Result<BigDecimal> {
        match self {
            Self::Decimal => Ok(literal.trim().parse()?),
            Self::Wei18 => Ok(number::conversions::parse_wei18(literal)?),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Decimal => "decimal",
            Self::Wei18 => "wei18",
        })
    }
}

/// Resolves every parameter from the command line, then the config file, and
/// finally the built-in defaults.
pub fn resolve(args: &Args, config: Option<&Config>) -> Result<Params> {
    Ok(Params {
        alpha: parameter(
            "alpha",
            layered(args.alpha.as_deref(), args.unit, config, |config| config.alpha.as_deref()),
            defaults::ALPHA,
        )?,
        beta: parameter(
            "beta",
            layered(args.beta.as_deref(), args.unit, config, |config| config.beta.as_deref()),
            defaults::BETA,
        )?,
        c: parameter(
            "c",
            layered(args.c.as_deref(), args.unit, config, |config| config.c.as_deref()),
            defaults::C,
        )?,
        s: parameter(
            "s",
            layered(args.s.as_deref(), args.unit, config, |config| config.s.as_deref()),
            defaults::S,
        )?,
        lambda: parameter(
            "lambda",
            layered(args.lambda.as_deref(), args.unit, config, |config| {
                config.lambda.as_deref()
            }),
            defaults::LAMBDA,
        )?,
    })
}

/// The command line and config file candidates of one parameter, in order of
/// precedence.
fn layered<'a>(
    cli: Option<&'a str>,
    cli_unit: Unit,
    config: Option<&'a Config>,
    field: fn(&Config) -> Option<&str>,
) -> [Option<(&'a str, Unit)>; 2] {
    [
        cli.map(|literal| (literal, cli_unit)),
        config.and_then(|config| Some((field(config)?, config.unit))),
    ]
}

fn parameter<'a>(
    name: &str,
    candidates: [Option<(&'a str, Unit)>; 2],
    default: &'a str,
) -> Result<BigDecimal> {
    let (literal, unit) = candidates
        .into_iter()
        .flatten()
        .next()
        .unwrap_or((default, Unit::Wei18));
    let value = unit
        .parse(literal)
        .with_context(|| format!("invalid {name} {literal:?} ({unit})"))?;
    tracing::debug!(name, %value, %unit, "resolved parameter");
    Ok(value)
}
