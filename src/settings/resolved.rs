use crate::cli::OutputFormat;

/// Application-ready configuration derived from CLI arguments, config files
/// and sensible defaults.
#[derive(Debug)]
pub(crate) struct ResolvedConfig {
    pub(crate) max_bytes: usize,
    pub(crate) output: OutputFormat,
}

impl ResolvedConfig {
    /// Print a human readable summary of the effective configuration.
    pub(crate) fn print_summary(&self) {
        println!("Effective configuration:");
        println!("  Max bytes: {}", self.max_bytes);
        println!("  Output: {}", self.output.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_prints_without_panic() {
        let config = ResolvedConfig {
            max_bytes: 32,
            output: OutputFormat::Spaced,
        };

        config.print_summary();
    }
}
