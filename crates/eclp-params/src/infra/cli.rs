use {
    crate::infra::input::Unit,
    clap::{Parser, ValueEnum},
    std::{fmt, path::PathBuf},
};

/// Computes the derived parameters of a Gyroscope E-CLP pool as 38-decimal
/// fixed point constants.
///
/// Parameters missing from both the command line and the config file fall
/// back to the built-in deployment values.
#[derive(Debug, Parser)]
#[clap(version, about)]
pub struct Args {
    /// The log filter.
    #[clap(long, env = "ECLP_LOG", default_value = "warn,eclp_params=info")]
    pub log: String,

    /// Path to a TOML file with the pool parameters.
    #[clap(long, env = "ECLP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Lower price bound: price of token0 denominated in token1.
    #[clap(long, env = "ECLP_ALPHA", allow_hyphen_values = true)]
    pub alpha: Option<String>,

    /// Upper price bound.
    #[clap(long, env = "ECLP_BETA", allow_hyphen_values = true)]
    pub beta: Option<String>,

    /// Cosine of the rotation angle.
    #[clap(long, env = "ECLP_C", allow_hyphen_values = true)]
    pub c: Option<String>,

    /// Sine of the rotation angle.
    #[clap(long, env = "ECLP_S", allow_hyphen_values = true)]
    pub s: Option<String>,

    /// Stretch factor of the ellipse.
    #[clap(long, env = "ECLP_LAMBDA", allow_hyphen_values = true)]
    pub lambda: Option<String>,

    /// Unit of the parameters given on the command line.
    #[clap(long, env = "ECLP_UNIT", value_enum, default_value = "decimal")]
    pub unit: Unit,

    /// Significant decimal digits carried through every intermediate step.
    #[clap(
        long,
        env = "ECLP_PRECISION",
        default_value = "200",
        value_parser = clap::value_parser!(u32).range(200..)
    )]
    pub precision: u32,

    /// Output format.
    #[clap(long, env = "ECLP_FORMAT", value_enum, default_value = "text")]
    pub format: Format,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum Format {
    /// Human readable report with Solidity constant declarations.
    #[default]
    Text,
    /// A single JSON document.
    Json,
}

impl fmt::Display for Args {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            log,
            config,
            alpha,
            beta,
            c,
            s,
            lambda,
            unit,
            precision,
            format,
        } = self;

        writeln!(f, "log: {log}")?;
        writeln!(f, "config: {config:?}")?;
        writeln!(f, "alpha: {alpha:?}")?;
        writeln!(f, "beta: {beta:?}")?;
        writeln!(f, "c: {c:?}")?;
        writeln!(f, "s: {s:?}")?;
        writeln!(f, "lambda: {lambda:?}")?;
        writeln!(f, "unit: {unit}")?;
        writeln!(f, "precision: {precision}")?;
        writeln!(f, "format: {format:?}")?;
        Ok(())
    }
}
