use tracing_subscriber::{EnvFilter, filter::LevelFilter, fmt};

/// Initializes the global tracing subscriber.
///
/// Logs always go to stderr so that stdout stays reserved for the program's
/// actual output. `env_filter` uses the `EnvFilter` directive syntax
/// (`warn,eclp_params=debug`); an unparsable filter falls back to `info`.
///
/// Panics if a global subscriber was already installed.
pub fn initialize(env_filter: &str) {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse(env_filter)
        .unwrap_or_else(|err| {
            eprintln!("invalid log filter {env_filter:?}: {err}; falling back to info");
            EnvFilter::new("info")
        });

    fmt::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .init();
}
