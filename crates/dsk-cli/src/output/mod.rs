use serde::Serialize;

use crate::cli::OutputFormat;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Print a text-valued response: verbatim for raw, wrapped in a JSON
/// object under `key` otherwise.
pub fn output_text(key: &str, text: &str, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Raw => {
            println!("{text}");
            Ok(())
        }
        OutputFormat::Json => output(&serde_json::json!({ key: text }), format),
    }
}
