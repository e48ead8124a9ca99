//! Screen assembly: one main dashboard plus a screen per leading feature.

use dsk_core::enums::ComponentKind;
use dsk_core::{ContentAnalysis, Palette, Screen};
use rand::Rng;

use crate::style::{ComponentContent, synthesize};

/// Secondary screens are built for at most this many features.
pub const MAX_FEATURE_SCREENS: usize = 3;

const MAIN_SCREEN: &str = "Main Dashboard";
const CHIP_COUNT: usize = 4;

/// Build the screen list for `analysis` using `palette`.
///
/// Always yields `1 + min(3, features)` screens, main screen first.
pub fn assemble<R: Rng + ?Sized>(
    rng: &mut R,
    analysis: &ContentAnalysis,
    palette: &Palette,
) -> Vec<Screen> {
    let mut screens = Vec::with_capacity(1 + MAX_FEATURE_SCREENS);
    screens.push(main_screen(rng, analysis, palette));

    for (index, feature) in analysis
        .features
        .iter()
        .take(MAX_FEATURE_SCREENS)
        .enumerate()
    {
        let name = analysis
            .sections
            .get(index + 1)
            .cloned()
            .unwrap_or_else(|| format!("{feature} Management"));
        screens.push(feature_screen(rng, name, feature, palette));
    }

    tracing::debug!(screens = screens.len(), "screens assembled");
    screens
}

fn main_screen<R: Rng + ?Sized>(
    rng: &mut R,
    analysis: &ContentAnalysis,
    palette: &Palette,
) -> Screen {
    let app_type = analysis.app_type();
    let first_section = analysis.sections.first();

    let chips =
        ComponentContent::items(analysis.features.iter().take(CHIP_COUNT).cloned().collect());
    let cards = ComponentContent::card(
        analysis
            .features
            .first()
            .map_or_else(|| "Feature Overview".to_string(), |f| format!("{f} Overview")),
    );

    let components = vec![
        synthesize(
            rng,
            ComponentKind::GradientBanner,
            palette,
            &ComponentContent::titled(&analysis.project_name)
                .with_subtitle(format!("Professional {app_type} Solution")),
        ),
        synthesize(rng, ComponentKind::FilterChips, palette, &chips),
        synthesize(
            rng,
            ComponentKind::SectionHeading,
            palette,
            &ComponentContent::titled(first_section.map_or("Core Features", String::as_str)),
        ),
        synthesize(rng, ComponentKind::EventCards, palette, &cards),
        synthesize(
            rng,
            ComponentKind::ElevatedContainer,
            palette,
            &ComponentContent::titled(
                analysis
                    .sections
                    .get(1)
                    .map_or("Advanced Features", String::as_str),
            ),
        ),
    ];

    Screen {
        name: first_section.map_or_else(|| MAIN_SCREEN.to_string(), Clone::clone),
        components,
        description: format!("Professional {app_type} dashboard with dynamic UI components"),
    }
}

fn feature_screen<R: Rng + ?Sized>(
    rng: &mut R,
    name: String,
    feature: &str,
    palette: &Palette,
) -> Screen {
    let components = vec![
        synthesize(
            rng,
            ComponentKind::SectionHeading,
            palette,
            &ComponentContent::titled(&name),
        ),
        synthesize(
            rng,
            ComponentKind::EventCards,
            palette,
            &ComponentContent::card(format!("{feature} Details")),
        ),
        synthesize(
            rng,
            ComponentKind::ElevatedContainer,
            palette,
            &ComponentContent::titled(format!("{feature} Configuration")),
        ),
    ];

    Screen {
        name,
        components,
        description: format!("Detailed {feature} management interface"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harmony::palette_for;
    use dsk_core::enums::HarmonyFamily;
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;
    use rstest::rstest;

    fn analysis(features: &[&str], sections: &[&str]) -> ContentAnalysis {
        let mut analysis = ContentAnalysis::placeholder("Recipe Keeper", "recipe");
        analysis.features = features.iter().map(ToString::to_string).collect();
        analysis.sections = sections.iter().map(ToString::to_string).collect();
        analysis
    }

    fn assemble_for(analysis: &ContentAnalysis) -> Vec<Screen> {
        let mut rng = Pcg64::seed_from_u64(4);
        assemble(&mut rng, analysis, &palette_for(HarmonyFamily::Triadic, 10))
    }

    #[rstest]
    #[case(0, 1)]
    #[case(1, 2)]
    #[case(3, 4)]
    #[case(5, 4)]
    fn screen_count_follows_features(#[case] features: usize, #[case] expected: usize) {
        let names: Vec<String> = (0..features).map(|i| format!("Feature {i}")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        assert_eq!(assemble_for(&analysis(&refs, &[])).len(), expected);
    }

    #[test]
    fn main_screen_without_sections() {
        let screens = assemble_for(&analysis(&["Import recipes", "Plan meals"], &[]));
        let main = &screens[0];
        assert_eq!(main.name, "Main Dashboard");
        assert_eq!(
            main.description,
            "Professional Recipe dashboard with dynamic UI components"
        );

        let kinds: Vec<ComponentKind> = main.components.iter().map(|c| c.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ComponentKind::GradientBanner,
                ComponentKind::FilterChips,
                ComponentKind::SectionHeading,
                ComponentKind::EventCards,
                ComponentKind::ElevatedContainer,
            ]
        );
        assert_eq!(main.components[0].attribute_str("title"), Some("Recipe Keeper"));
        assert_eq!(
            main.components[0].attribute_str("subtitle"),
            Some("Professional Recipe Solution")
        );
        assert_eq!(
            main.components[1].style_attributes["items"],
            serde_json::json!(["Import recipes", "Plan meals"])
        );
        assert_eq!(main.components[2].attribute_str("title"), Some("Core Features"));
        assert_eq!(
            main.components[3].attribute_str("cardTitle"),
            Some("Import recipes Overview")
        );
        assert_eq!(
            main.components[4].attribute_str("title"),
            Some("Advanced Features")
        );

        assert_eq!(screens[1].name, "Import recipes Management");
        assert_eq!(
            screens[1].description,
            "Detailed Import recipes management interface"
        );
        assert_eq!(
            screens[1].components[1].attribute_str("cardTitle"),
            Some("Import recipes Details")
        );
        assert_eq!(
            screens[1].components[2].attribute_str("title"),
            Some("Import recipes Configuration")
        );
    }

    #[test]
    fn sections_name_screens_when_present() {
        let screens = assemble_for(&analysis(
            &["Import recipes", "Plan meals", "Share lists"],
            &["Home", "Search"],
        ));
        assert_eq!(screens[0].name, "Home");
        assert_eq!(screens[0].components[2].attribute_str("title"), Some("Home"));
        assert_eq!(screens[0].components[4].attribute_str("title"), Some("Search"));
        assert_eq!(screens[1].name, "Search");
        assert_eq!(screens[1].components[0].attribute_str("title"), Some("Search"));
        assert_eq!(screens[2].name, "Plan meals Management");
        assert_eq!(screens[3].name, "Share lists Management");
    }

    #[test]
    fn no_features_gives_empty_chips_and_default_cards() {
        let screens = assemble_for(&analysis(&[], &[]));
        assert_eq!(
            screens[0].components[3].attribute_str("cardTitle"),
            Some("Feature Overview")
        );
        assert_eq!(
            screens[0].components[1].style_attributes["items"],
            serde_json::json!([])
        );
    }
}
