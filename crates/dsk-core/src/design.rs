//! Design records: palette, component descriptors, screens and the final report.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::enums::{Animation, ComponentKind, HarmonyFamily};
use crate::errors::CoreError;

/// Role-keyed palette. Every value is `#` followed by six hex digits.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Palette {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub surface: String,
    pub background: String,
}

impl Palette {
    /// All five colors, in declaration order.
    #[must_use]
    pub fn colors(&self) -> [&str; 5] {
        [
            &self.primary,
            &self.secondary,
            &self.accent,
            &self.surface,
            &self.background,
        ]
    }

    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.colors().iter().all(|color| is_hex_color(color))
    }

    /// # Errors
    ///
    /// Returns [`CoreError::InvalidColor`] naming the first malformed color.
    pub fn validate(&self) -> Result<(), CoreError> {
        match self.colors().into_iter().find(|color| !is_hex_color(color)) {
            Some(bad) => Err(CoreError::InvalidColor(bad.to_string())),
            None => Ok(()),
        }
    }
}

/// Whether `value` is `#` followed by exactly six hexadecimal digits.
#[must_use]
pub fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}

/// Styled, parameterized description of one UI building block.
///
/// `style_attributes` keys are the attribute names downstream consumers key
/// on (`gradient`, `chip_style`, `cardTitle`, ...), see `dsk-design::style`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ComponentDescriptor {
    pub kind: ComponentKind,
    pub animation: Animation,
    pub transition_spec: String,
    pub style_attributes: Map<String, Value>,
}

impl ComponentDescriptor {
    /// String attribute lookup (e.g. `title`).
    #[must_use]
    pub fn attribute_str(&self, name: &str) -> Option<&str> {
        self.style_attributes.get(name).and_then(Value::as_str)
    }
}

/// A named, ordered collection of components representing one application view.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Screen {
    pub name: String,
    pub components: Vec<ComponentDescriptor>,
    pub description: String,
}

/// The final design report handed to the drafting and design-file layers.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Report {
    pub project_name: String,
    pub summary: String,
    pub screens: Vec<Screen>,
    pub palette: Palette,
    pub harmony: HarmonyFamily,
    pub typography: BTreeMap<String, String>,
    /// Unique component names, in catalogue order.
    pub component_catalogue: Vec<String>,
    /// Opaque; filled by the drafting layer.
    #[serde(default = "empty_array")]
    pub navigation_flow: Value,
    /// Opaque; filled by the drafting layer.
    #[serde(default = "empty_object")]
    pub prototype_settings: Value,
}

/// Empty JSON array, the default `navigation_flow`.
#[must_use]
pub fn empty_array() -> Value {
    Value::Array(Vec::new())
}

#[must_use]
pub fn empty_object() -> Value {
    Value::Object(Map::new())
}
