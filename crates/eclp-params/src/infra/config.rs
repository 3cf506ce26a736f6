//! Pool parameters read from a TOML file.

use {
    crate::infra::input::Unit,
    anyhow::{Context as _, Result},
    serde::Deserialize,
    std::path::Path,
};

/// Every key is optional; values are strings so that no precision is lost to
/// TOML floats.
#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    /// Unit of the values in this file.
    #[serde(default)]
    pub unit: Unit,
    pub alpha: Option<String>,
    pub beta: Option<String>,
    pub c: Option<String>,
    pub s: Option<String>,
    pub lambda: Option<String>,
}

/// Load the pool parameters from a TOML file.
pub fn load(path: &Path) -> Result<Config> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("I/O error while reading {path:?}"))?;
    let config = toml::de::from_str(&data)
        .with_context(|| format!("TOML syntax error while reading {path:?}"))?;
    tracing::debug!(?path, ?config, "loaded config file");
    Ok(config)
}
