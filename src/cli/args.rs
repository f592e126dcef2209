use std::fmt::Write;
use std::path::PathBuf;

use clap::{
    ArgAction, ColorChoice, Parser, ValueEnum,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use sixpin::app_dirs;

/// Produce the full version banner including the configuration directory.
fn long_version() -> &'static str {
    let config_dir = match app_dirs::get_config_dir() {
        Ok(path) => path.display().to_string(),
        Err(err) => format!("unavailable ({err})"),
    };

    let mut details = format!("sixpin {}", env!("CARGO_PKG_VERSION"));
    let _ = writeln!(details);
    let _ = writeln!(details, "config directory: {config_dir}");

    Box::leak(details.into_boxed_str())
}

/// Create the clap styles used for custom colour output.
fn cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Cyan.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
}

/// Parse command line arguments into the strongly typed [`CliArgs`] structure.
pub(crate) fn parse_cli() -> CliArgs {
    CliArgs::parse()
}

#[derive(Parser, Debug)]
#[command(
    name = "sixpin",
    version,
    long_version = long_version(),
    about = "Deterministic six-digit codes for text labels",
    color = ColorChoice::Auto,
    styles = cli_styles()
)]
/// Command-line arguments accepted by the `sixpin` binary.
pub(crate) struct CliArgs {
    #[arg(value_name = "TEXT", help = "Text to derive the code from")]
    pub(crate) text: String,
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        help = "Choose how to print the code (default: spaced)"
    )]
    pub(crate) output: Option<OutputFormat>,
    #[arg(
        short = 'b',
        long = "max-bytes",
        value_name = "NUM",
        help = "Hash at most NUM bytes of the UTF-8 input (default: 32)"
    )]
    pub(crate) max_bytes: Option<usize>,
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "SIXPIN_CONFIG",
        action = ArgAction::Append,
        help = "Additional configuration file to merge (default: none)"
    )]
    pub(crate) config: Vec<PathBuf>,
    #[arg(
        short = 'n',
        long = "no-config",
        help = "Skip loading default configuration files (default: disabled)"
    )]
    pub(crate) no_config: bool,
    #[arg(
        short = 'p',
        long = "print-config",
        help = "Print the resolved configuration before the code (default: disabled)"
    )]
    pub(crate) print_config: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
/// Output formats supported by the CLI utility.
pub(crate) enum OutputFormat {
    Spaced,
    Plain,
    Json,
}

impl OutputFormat {
    /// Return the string representation consumed by configuration loading.
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Spaced => "spaced",
            OutputFormat::Plain => "plain",
            OutputFormat::Json => "json",
        }
    }
}
