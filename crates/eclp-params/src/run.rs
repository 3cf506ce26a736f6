use {
    crate::{
        domain::Calculation,
        infra::{
            cli::{Args, Format},
            config,
            input,
        },
        report,
    },
    anyhow::{Context as _, Result},
    clap::Parser,
    number::Context,
    std::{io::Write, num::NonZeroU32},
};

/// Parses the arguments, computes the derived parameters and prints them to
/// stdout. Exits the process with status 1 on error.
pub fn start(args: impl IntoIterator<Item = String>) {
    let args = Args::parse_from(args);
    observe::tracing::initialize(&args.log);
    tracing::info!("running eclp-params with validated arguments:\n{}", args);

    if let Err(err) = run(&args, &mut std::io::stdout().lock()) {
        tracing::error!(?err, "failed to compute derived E-CLP parameters");
        std::process::exit(1);
    }
}

/// Computes the derived parameters for the given arguments and writes the
/// report to `out`.
pub fn run(args: &Args, out: &mut impl Write) -> Result<()> {
    let config = args.config.as_deref().map(config::load).transpose()?;
    let params = input::resolve(args, config.as_ref())?;
    let ctx = Context::new(NonZeroU32::new(args.precision).context("precision must not be zero")?);

    let calculation =
        Calculation::compute(params, &ctx).context("failed to derive E-CLP parameters")?;

    match args.format {
        Format::Text => write!(out, "{}", report::Text(&calculation))?,
        Format::Json => {
            serde_json::to_writer_pretty(&mut *out, &report::dto::Report::new(&calculation))?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}
