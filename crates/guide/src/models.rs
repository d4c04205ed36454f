//! Guide Models
//!
//! Data structures produced by design detection and consumed by step
//! generation.

use std::str::FromStr;

use design_tutor_core::CoreError;
use serde::{Deserialize, Serialize};

/// Palette used for tech / futuristic designs
pub const TECH_PALETTE: [&str; 3] = ["#0B0F1A", "#FF7A00", "#FFFFFF"];

/// Palette used for everything else
pub const DEFAULT_PALETTE: [&str; 3] = ["#111827", "#E5E7EB", "#FF4D4D"];

/// Font pair used for modern / tech designs
pub const MODERN_FONTS: [&str; 2] = ["Inter", "Manrope"];

/// Font pair used for everything else
pub const DEFAULT_FONTS: [&str; 2] = ["Poppins", "Montserrat"];

/// Canvas layout class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Vertical story / reel format
    Story,
    /// Square social post
    Square,
    /// Portrait poster (the fallback)
    #[default]
    Poster,
    /// Print sheet
    A4,
}

impl Layout {
    /// Canvas size in pixels for this layout
    pub fn canvas_size(&self) -> CanvasSize {
        let (width, height) = match self {
            Layout::Story => (1080, 1920),
            Layout::Square => (1080, 1080),
            Layout::Poster => (1080, 1350),
            Layout::A4 => (2480, 3508),
        };
        CanvasSize { width, height }
    }

    /// Wire name of the layout
    pub fn as_str(&self) -> &'static str {
        match self {
            Layout::Story => "story",
            Layout::Square => "square",
            Layout::Poster => "poster",
            Layout::A4 => "a4",
        }
    }

    /// Parse a layout name, falling back to `Poster` for anything unknown
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }
}

impl FromStr for Layout {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "story" => Ok(Layout::Story),
            "square" => Ok(Layout::Square),
            "poster" => Ok(Layout::Poster),
            "a4" => Ok(Layout::A4),
            other => Err(CoreError::parse(format!("unknown layout: {}", other))),
        }
    }
}

impl std::fmt::Display for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Canvas dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl std::fmt::Display for CanvasSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Background fill style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundStyle {
    Gradient,
    #[default]
    Solid,
}

/// Vertical placement of the main image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImagePosition {
    Top,
    #[default]
    Center,
}

/// One element of the fixed design structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StructureElement {
    Background { style: BackgroundStyle },
    Image { position: ImagePosition },
    Headline { weight: String, case: String },
    Subhead { weight: String },
    Cta { variant: String },
}

/// Structured design description produced by the detector.
///
/// The array lengths are part of the contract: step generation reads
/// `palette[0]` as the background color, `palette[1]` as the CTA color,
/// `fonts[0]` as the headline font and the last font as the subhead font.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignSpec {
    pub layout: Layout,
    pub palette: [String; 3],
    pub fonts: [String; 2],
    /// background, image, headline, subhead, cta (in that order)
    pub structure: [StructureElement; 5],
}

impl DesignSpec {
    /// Background style from the structure
    pub fn background_style(&self) -> BackgroundStyle {
        self.structure
            .iter()
            .find_map(|element| match element {
                StructureElement::Background { style } => Some(*style),
                _ => None,
            })
            .unwrap_or_default()
    }

    /// Image position from the structure
    pub fn image_position(&self) -> ImagePosition {
        self.structure
            .iter()
            .find_map(|element| match element {
                StructureElement::Image { position } => Some(*position),
                _ => None,
            })
            .unwrap_or_default()
    }

    pub fn background_color(&self) -> &str {
        &self.palette[0]
    }

    pub fn cta_color(&self) -> &str {
        &self.palette[1]
    }

    pub fn headline_font(&self) -> &str {
        &self.fonts[0]
    }

    pub fn subhead_font(&self) -> &str {
        &self.fonts[self.fonts.len() - 1]
    }
}

/// Design tool a guide can target.
///
/// Any name that is not a known tool resolves to `Canva`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DesignTool {
    Photoshop,
    Illustrator,
    #[default]
    Canva,
}

impl DesignTool {
    /// All supported tools, in the default request order
    pub const ALL: [DesignTool; 3] = [
        DesignTool::Photoshop,
        DesignTool::Canva,
        DesignTool::Illustrator,
    ];

    /// Resolve a tool name (case-insensitive, no trimming), defaulting to `Canva`
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }

    /// Wire name of the tool
    pub fn as_str(&self) -> &'static str {
        match self {
            DesignTool::Photoshop => "photoshop",
            DesignTool::Illustrator => "illustrator",
            DesignTool::Canva => "canva",
        }
    }

    /// Get human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            DesignTool::Photoshop => "Photoshop",
            DesignTool::Illustrator => "Illustrator",
            DesignTool::Canva => "Canva",
        }
    }
}

impl FromStr for DesignTool {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "photoshop" => Ok(DesignTool::Photoshop),
            "illustrator" => Ok(DesignTool::Illustrator),
            "canva" => Ok(DesignTool::Canva),
            other => Err(CoreError::parse(format!("unknown design tool: {}", other))),
        }
    }
}

impl std::fmt::Display for DesignTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
