use anyhow::{Result, bail};
use serde::Deserialize;
use sixpin::{DEFAULT_MAX_BYTES, Grouping};

use crate::cli::{CliArgs, OutputFormat};

use super::resolved::ResolvedConfig;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
    code: CodeSection,
    output: OutputSection,
}

/// Hashing options as they are read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct CodeSection {
    max_bytes: Option<usize>,
}

/// Output options prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct OutputSection {
    format: Option<String>,
}

impl RawConfig {
    /// Apply CLI overrides on top of the raw configuration values.
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(value) = cli.max_bytes {
            self.code.max_bytes = Some(value);
        }
        if let Some(format) = cli.output {
            self.output.format = Some(format.as_str().to_string());
        }
    }

    /// Convert the raw configuration into a [`ResolvedConfig`], validating and
    /// filling defaults where required.
    pub(super) fn resolve(self) -> Result<ResolvedConfig> {
        let max_bytes = self.code.max_bytes.unwrap_or(DEFAULT_MAX_BYTES);
        let output = match self.output.format.as_deref() {
            Some(value) => parse_output(value)?,
            None => OutputFormat::Spaced,
        };

        Ok(ResolvedConfig { max_bytes, output })
    }
}

/// Parse an output format string into the strongly typed [`OutputFormat`].
fn parse_output(value: &str) -> Result<OutputFormat> {
    if value.trim().eq_ignore_ascii_case("json") {
        return Ok(OutputFormat::Json);
    }

    match value.parse::<Grouping>() {
        Ok(Grouping::Spaced) => Ok(OutputFormat::Spaced),
        Ok(Grouping::Plain) => Ok(OutputFormat::Plain),
        Err(_) => bail!(
            "unknown output format '{}', expected spaced, plain or json",
            value.trim()
        ),
    }
}
