//! Report assembly from an analysis, a harmony draw and assembled screens.

use dsk_config::DesignConfig;
use dsk_core::design::{empty_array, empty_object};
use dsk_core::{ContentAnalysis, Report, Screen};

use crate::harmony::HarmonyDraw;

/// One-line summary naming the app type, the leading features and the
/// extracted counts.
#[must_use]
pub fn summary(analysis: &ContentAnalysis) -> String {
    let leading = analysis
        .features
        .iter()
        .take(3)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "Professional {} with dynamic UI featuring {leading} ({} features, {} personas, {} workflows, {} data entities)",
        analysis.app_type(),
        analysis.features.len(),
        analysis.personas.len(),
        analysis.workflows.len(),
        analysis.data_entities.len(),
    )
}

fn unique_catalogue(catalogue: &[String]) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(catalogue.len());
    for name in catalogue {
        if !unique.contains(name) {
            unique.push(name.clone());
        }
    }
    unique
}

#[must_use]
pub fn build(
    analysis: &ContentAnalysis,
    draw: &HarmonyDraw,
    screens: Vec<Screen>,
    config: &DesignConfig,
) -> Report {
    Report {
        project_name: analysis.project_name.clone(),
        summary: summary(analysis),
        screens,
        palette: draw.palette.clone(),
        harmony: draw.family,
        typography: config.typography.clone(),
        component_catalogue: unique_catalogue(&config.component_catalogue),
        navigation_flow: empty_array(),
        prototype_settings: empty_object(),
    }
}
