//! Design error types for dsk-design.

#[derive(Debug, thiserror::Error)]
pub enum DesignError {
    /// An external collaborator (drafting model, design tool) failed.
    #[error("{collaborator} failed: {message}")]
    Collaborator {
        collaborator: &'static str,
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn collaborator_failure_names_collaborator() {
        let error = DesignError::Collaborator {
            collaborator: "drafting model",
            message: "timeout".into(),
        };
        assert_eq!(error.to_string(), "drafting model failed: timeout");
    }
}
