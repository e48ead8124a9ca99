//! Design report configuration: typography scale and component catalogue.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

fn default_typography() -> BTreeMap<String, String> {
    [
        ("display", "Poppins 800"),
        ("heading", "Poppins 700"),
        ("subheading", "Poppins 600"),
        ("body", "Inter 500"),
        ("caption", "Inter 400"),
    ]
    .into_iter()
    .map(|(role, face)| (role.to_string(), face.to_string()))
    .collect()
}

fn default_component_catalogue() -> Vec<String> {
    [
        "gradient_banner",
        "filter_chips",
        "event_cards",
        "elevated_container",
        "section_heading",
        "rounded_card",
        "bottom_sheet",
        "floating_action_button",
    ]
    .into_iter()
    .map(ToString::to_string)
    .collect()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DesignConfig {
    /// Typography role -> font face and weight.
    #[serde(default = "default_typography")]
    pub typography: BTreeMap<String, String>,

    /// Component names advertised in the report catalogue.
    #[serde(default = "default_component_catalogue")]
    pub component_catalogue: Vec<String>,
}

impl Default for DesignConfig {
    fn default() -> Self {
        Self {
            typography: default_typography(),
            component_catalogue: default_component_catalogue(),
        }
    }
}
