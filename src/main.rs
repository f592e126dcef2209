//! Command-line entry point for the sixpin code generator.

mod cli;
mod settings;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain, print_spaced};
use sixpin::Code;

fn main() -> Result<()> {
    let cli = parse_cli();
    let resolved = settings::load(&cli)?;

    if cli.print_config {
        resolved.print_summary();
    }

    let code = Code::with_max_bytes(&cli.text, resolved.max_bytes);

    match resolved.output {
        OutputFormat::Spaced => print_spaced(code),
        OutputFormat::Plain => print_plain(code),
        OutputFormat::Json => print_json(&cli.text, code)?,
    }

    Ok(())
}
