//! Design Detection
//!
//! Classifies a free-text design name into a `DesignSpec` using keyword
//! substring checks. Layout precedence is an ordered rule list evaluated
//! first-match-wins; the other attributes each hang off a single keyword test.

use crate::models::{
    BackgroundStyle, DesignSpec, ImagePosition, Layout, StructureElement, DEFAULT_FONTS,
    DEFAULT_PALETTE, MODERN_FONTS, TECH_PALETTE,
};

/// Keywords selecting the tech palette
pub const TECH_KEYWORDS: &[&str] = &["tech", "futur", "robot"];

/// Keywords selecting the modern font pair
pub const MODERN_FONT_KEYWORDS: &[&str] = &["modern", "tech"];

/// Keywords selecting a gradient background
pub const GRADIENT_KEYWORDS: &[&str] = &["grad"];

/// A layout rule: the layout applies when any keyword is a substring of the
/// lower-cased name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutRule {
    pub layout: Layout,
    pub keywords: &'static [&'static str],
}

impl LayoutRule {
    pub const fn new(layout: Layout, keywords: &'static [&'static str]) -> Self {
        Self { layout, keywords }
    }

    /// Check the rule against an already lower-cased name
    pub fn matches(&self, name_lower: &str) -> bool {
        contains_any(name_lower, self.keywords)
    }
}

/// Standard layout rules, highest priority first
pub const DEFAULT_LAYOUT_RULES: &[LayoutRule] = &[
    LayoutRule::new(
        Layout::Story,
        &["story", "reel", "vertical", "instagram story"],
    ),
    LayoutRule::new(Layout::Square, &["square", "instagram", "post"]),
    LayoutRule::new(Layout::A4, &["a4", "flyer", "print"]),
];

/// Keyword-based design detector
#[derive(Debug, Clone)]
pub struct DesignDetector {
    /// Ordered layout rules; the first match wins
    layout_rules: Vec<LayoutRule>,
    /// Layout used when no rule matches
    fallback_layout: Layout,
}

impl DesignDetector {
    /// Create a detector with the standard rules
    pub fn new() -> Self {
        Self::with_layout_rules(DEFAULT_LAYOUT_RULES.to_vec())
    }

    /// Create a detector with a custom ordered rule list
    pub fn with_layout_rules(layout_rules: Vec<LayoutRule>) -> Self {
        Self {
            layout_rules,
            fallback_layout: Layout::Poster,
        }
    }

    /// The ordered layout rules this detector evaluates
    pub fn layout_rules(&self) -> &[LayoutRule] {
        &self.layout_rules
    }

    /// Detect the design spec for a name. Never fails.
    pub fn detect(&self, name: &str) -> DesignSpec {
        let name_lower = name.to_lowercase();
        let layout = self.detect_layout(&name_lower);

        let palette = if contains_any(&name_lower, TECH_KEYWORDS) {
            TECH_PALETTE
        } else {
            DEFAULT_PALETTE
        };

        let fonts = if contains_any(&name_lower, MODERN_FONT_KEYWORDS) {
            MODERN_FONTS
        } else {
            DEFAULT_FONTS
        };

        let background = if contains_any(&name_lower, GRADIENT_KEYWORDS) {
            BackgroundStyle::Gradient
        } else {
            BackgroundStyle::Solid
        };

        let image_position = if layout == Layout::Story {
            ImagePosition::Top
        } else {
            ImagePosition::Center
        };

        DesignSpec {
            layout,
            palette: palette.map(String::from),
            fonts: fonts.map(String::from),
            structure: [
                StructureElement::Background { style: background },
                StructureElement::Image {
                    position: image_position,
                },
                StructureElement::Headline {
                    weight: "700".to_string(),
                    case: "upper".to_string(),
                },
                StructureElement::Subhead {
                    weight: "500".to_string(),
                },
                StructureElement::Cta {
                    variant: "pill".to_string(),
                },
            ],
        }
    }

    fn detect_layout(&self, name_lower: &str) -> Layout {
        self.layout_rules
            .iter()
            .find(|rule| rule.matches(name_lower))
            .map(|rule| rule.layout)
            .unwrap_or(self.fallback_layout)
    }
}

impl Default for DesignDetector {
    fn default() -> Self {
        Self::new()
    }
}

fn contains_any(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| haystack.contains(keyword))
}

/// Detect the design spec for a name using the standard rules
pub fn detect_design(name: &str) -> DesignSpec {
    DesignDetector::new().detect(name)
}
