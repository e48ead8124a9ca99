//! Drafting prompt assembly.
//!
//! The prompt is plain text handed to an external drafting model. It
//! restates the analysis, the color directives and a domain design style,
//! then fixes the navigation and color rules the draft must follow.

use dsk_core::{ColorDirectives, ContentAnalysis};

/// Characters of source document appended to the prompt.
pub const DOCUMENT_EXCERPT_CHARS: usize = 1000;

/// Design style and default screens for one domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomainStyle {
    pub style: &'static str,
    pub screens: &'static [&'static str],
}

const GENERIC_STYLE: DomainStyle = DomainStyle {
    style: "clean, modern, user-friendly",
    screens: &["home", "dashboard", "profile"],
};

const DOMAIN_STYLES: [(&str, DomainStyle); 10] = [
    (
        "security",
        DomainStyle {
            style: "secure, alert-focused, vulnerability-oriented with clear status indicators",
            screens: &["scan", "vulnerabilities", "reports", "settings"],
        },
    ),
    (
        "development",
        DomainStyle {
            style: "code-focused, analytical, developer-friendly with syntax highlighting",
            screens: &["analysis", "code", "reports", "settings"],
        },
    ),
    (
        "calculator",
        DomainStyle {
            style: "clean, functional, number-focused with clear operation buttons",
            screens: &["calculator", "operations", "history", "settings"],
        },
    ),
    (
        "chat",
        DomainStyle {
            style: "friendly, conversational, message-focused",
            screens: &["chats", "contacts", "profile", "settings"],
        },
    ),
    (
        "productivity",
        DomainStyle {
            style: "organized, efficient, task-focused",
            screens: &["tasks", "calendar", "projects", "settings"],
        },
    ),
    (
        "food",
        DomainStyle {
            style: "appetizing, warm, inviting with food imagery",
            screens: &["browse", "restaurant", "cart", "checkout", "tracking"],
        },
    ),
    (
        "healthcare",
        DomainStyle {
            style: "clean, trustworthy, accessible with health icons",
            screens: &["booking", "dashboard", "records", "consultation"],
        },
    ),
    (
        "fintech",
        DomainStyle {
            style: "secure, professional, data-focused with charts",
            screens: &["dashboard", "transactions", "transfer", "analytics"],
        },
    ),
    (
        "ecommerce",
        DomainStyle {
            style: "attractive, product-focused, easy navigation",
            screens: &["home", "products", "cart", "checkout"],
        },
    ),
    (
        "education",
        DomainStyle {
            style: "engaging, clear, progress-oriented",
            screens: &["courses", "dashboard", "lessons", "profile"],
        },
    ),
];

const COLOR_RULES: &str = "\
1. gradient_banner: gradient primary→secondary, WHITE text, text_shadow
2. filter_chips: accent color background, WHITE text
3. event_cards: gradient secondary→accent, WHITE text on gradient
4. section_heading: primary color background, WHITE text
5. elevated_container: gradient accent→primary, WHITE text
6. floating_action_button: gradient primary→secondary, WHITE icon
7. All buttons: primary color, WHITE text
8. All cards: box_shadow with primary color";

const TEXT_RULES: &str = "\
- ALL text on colored backgrounds MUST be WHITE
- Headings on gradients: WHITE with shadow
- Never dark text on dark backgrounds";

const INTERACTIONS: &str = "\
- onClick navigation between screens
- Gradient backgrounds on ALL components
- Hover states (lighten 10%)
- 300ms transitions";

/// Style for `domain`, or the generic style for unlisted domains.
#[must_use]
pub fn domain_style(domain: &str) -> DomainStyle {
    DOMAIN_STYLES
        .iter()
        .find(|(name, _)| *name == domain)
        .map_or(GENERIC_STYLE, |(_, style)| *style)
}

/// Cyclic navigation: each screen links to the next, the last to the first.
#[must_use]
pub fn navigation_lines(screens: &[String]) -> String {
    screens
        .iter()
        .enumerate()
        .map(|(index, screen)| {
            let next = if index + 1 < screens.len() { index + 2 } else { 1 };
            format!(
                "- Screen {} ({}): Add buttons/cards that navigate to Screen {next} on click",
                index + 1,
                screen.to_uppercase()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn excerpt(text: &str, chars: usize) -> &str {
    text.char_indices().nth(chars).map_or(text, |(end, _)| &text[..end])
}

fn bullets(items: &[String], cap: usize) -> String {
    items
        .iter()
        .take(cap)
        .map(|item| format!("• {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn joined(items: &[String], cap: usize) -> String {
    items
        .iter()
        .take(cap)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Screens named in the document (lowercased), or the domain's defaults.
#[must_use]
pub fn prompt_screens(analysis: &ContentAnalysis, style: &DomainStyle) -> Vec<String> {
    if analysis.sections.is_empty() {
        style.screens.iter().map(ToString::to_string).collect()
    } else {
        analysis.sections.iter().map(|s| s.to_lowercase()).collect()
    }
}

/// Assemble the drafting prompt for one document.
#[must_use]
pub fn build_prompt(
    analysis: &ContentAnalysis,
    directives: &ColorDirectives,
    document_text: &str,
) -> String {
    let style = domain_style(&analysis.domain);
    let screens = prompt_screens(analysis, &style);
    let capabilities = if analysis.capabilities.is_empty() {
        "core functionality".to_string()
    } else {
        analysis.capabilities.join(", ")
    };

    format!(
        "Design UI for '{project}'.

=== EXTRACTED DOCUMENT CONTENT ===
BUSINESS REQUIREMENTS:
{requirements}

USER PERSONAS/ROLES:
{personas}

TECHNICAL SPECIFICATIONS:
{tech}

WORKFLOWS/PROCESSES:
{workflows}

DATA ENTITIES:
{entities}

SECURITY REQUIREMENTS:
{security}

=== UI DESIGN SPECIFICATIONS ===
COLOR SCHEME (APPLY TO ALL COMPONENTS):
{directives}

DESIGN STYLE:
{style}

SCREENS: {screen_list}
FEATURES: {capabilities}

NAVIGATION:
{navigation}

COLOR APPLICATION (CRITICAL):
{color_rules}

TEXT RULES:
{text_rules}

INTERACTIONS:
{interactions}

=== CONTENT INTEGRATION ===
Incorporate the extracted business requirements, user personas, and workflows into the UI design.
Create screens that reflect the actual processes and data entities found in the document.
Ensure the design supports the identified technical specifications and security requirements.

Document Content: {excerpt}

REQUIRED: Create a UI that reflects the ACTUAL document content, not generic templates.",
        project = analysis.project_name,
        requirements = bullets(&analysis.features, 5),
        personas = joined(&analysis.personas, 4),
        tech = bullets(&analysis.tech_specs, 4),
        workflows = bullets(&analysis.workflows, 4),
        entities = joined(&analysis.data_entities, 6),
        security = bullets(&analysis.security_notes, 3),
        style = style.style,
        screen_list = screens.join(", "),
        navigation = navigation_lines(&screens),
        color_rules = COLOR_RULES,
        text_rules = TEXT_RULES,
        interactions = INTERACTIONS,
        excerpt = excerpt(document_text, DOCUMENT_EXCERPT_CHARS),
    )
}
