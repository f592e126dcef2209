use anyhow::Result;
use serde_json::json;
use sixpin::Code;

/// Print the spaced rendering of the code.
pub(crate) fn print_spaced(code: Code) {
    println!("{}", code.spaced());
}

/// Print the plain six-digit rendering of the code.
pub(crate) fn print_plain(code: Code) {
    println!("{code}");
}

/// Format the code and its source label as a JSON string.
pub(crate) fn format_code_json(text: &str, code: Code) -> Result<String> {
    let payload = json!({
        "input": text,
        "code": code.plain(),
        "spaced": code.spaced(),
        "value": code.digits(),
    });

    Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the code.
pub(crate) fn print_json(text: &str, code: Code) -> Result<()> {
    println!("{}", format_code_json(text, code)?);
    Ok(())
}
