//! Cross-cutting error types for docsketch.
//!
//! Domain-specific errors (e.g., `ExtractError`, `DesignError`) are defined in
//! their respective crates. `anyhow` is reserved for `dsk-cli` where all crate
//! errors converge.

use thiserror::Error;

/// Errors that can be raised by any docsketch crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A color string is not `#` followed by six hexadecimal digits.
    #[error("Invalid color: {0}")]
    InvalidColor(String),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn invalid_color_names_the_input() {
        let error = CoreError::InvalidColor("blue".into());
        assert_eq!(error.to_string(), "Invalid color: blue");
    }
}
