//! Caps on the lists a content analysis carries.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

const fn default_features() -> usize {
    8
}

const fn default_personas() -> usize {
    6
}

const fn default_tech_specs() -> usize {
    8
}

const fn default_workflows() -> usize {
    6
}

const fn default_data_entities() -> usize {
    6
}

const fn default_security_notes() -> usize {
    3
}

const fn default_sections() -> usize {
    5
}

const fn default_capabilities() -> usize {
    6
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct LimitsConfig {
    #[serde(default = "default_features")]
    pub features: usize,
    #[serde(default = "default_personas")]
    pub personas: usize,
    #[serde(default = "default_tech_specs")]
    pub tech_specs: usize,
    #[serde(default = "default_workflows")]
    pub workflows: usize,
    #[serde(default = "default_data_entities")]
    pub data_entities: usize,
    #[serde(default = "default_security_notes")]
    pub security_notes: usize,
    #[serde(default = "default_sections")]
    pub sections: usize,
    #[serde(default = "default_capabilities")]
    pub capabilities: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            features: default_features(),
            personas: default_personas(),
            tech_specs: default_tech_specs(),
            workflows: default_workflows(),
            data_entities: default_data_entities(),
            security_notes: default_security_notes(),
            sections: default_sections(),
            capabilities: default_capabilities(),
        }
    }
}

impl LimitsConfig {
    /// Every list that has a literal default must allow at least one entry.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for the first zero cap.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let caps = [
            ("limits.features", self.features),
            ("limits.personas", self.personas),
            ("limits.tech_specs", self.tech_specs),
            ("limits.workflows", self.workflows),
            ("limits.data_entities", self.data_entities),
            ("limits.security_notes", self.security_notes),
        ];
        match caps.iter().find(|(_, cap)| *cap == 0) {
            Some((field, _)) => Err(ConfigError::InvalidValue {
                field: (*field).to_string(),
                reason: "must be at least 1".to_string(),
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let limits = LimitsConfig::default();
        assert_eq!(
            (
                limits.features,
                limits.personas,
                limits.tech_specs,
                limits.workflows,
                limits.data_entities,
                limits.security_notes
            ),
            (8, 6, 8, 6, 6, 3)
        );
        assert!(limits.validate().is_ok());
    }

    #[test]
    fn zero_cap_rejected() {
        let limits = LimitsConfig {
            personas: 0,
            ..Default::default()
        };
        let error = limits.validate().unwrap_err();
        assert!(error.to_string().contains("limits.personas"));
    }

    #[test]
    fn keyword_caps_may_be_zero() {
        let limits = LimitsConfig {
            sections: 0,
            capabilities: 0,
            ..Default::default()
        };
        assert!(limits.validate().is_ok());
    }
}
