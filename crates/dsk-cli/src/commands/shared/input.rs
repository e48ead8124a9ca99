use std::io::Read;
use std::path::Path;

use anyhow::Context;

use crate::cli::root_commands::InputArgs;

/// Raw document bytes from a file, or stdin for `None` / `-`.
pub fn read_bytes(args: &InputArgs) -> anyhow::Result<Vec<u8>> {
    match args.input.as_deref() {
        Some(path) if path != Path::new("-") => {
            std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))
        }
        _ => {
            let mut bytes = Vec::new();
            std::io::stdin()
                .read_to_end(&mut bytes)
                .context("failed to read document from stdin")?;
            Ok(bytes)
        }
    }
}

/// Decode document bytes, replacing invalid UTF-8.
pub fn decode(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
