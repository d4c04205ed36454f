//! Step Generation
//!
//! Expands a `DesignSpec` into an ordered list of instructions for one tool:
//! a tool-specific prefix, a shared seven-line body parameterized by the
//! spec, and a tool-specific suffix.

use crate::models::{BackgroundStyle, CanvasSize, DesignSpec, DesignTool, ImagePosition};

/// Number of lines in the shared body
pub const COMMON_STEP_COUNT: usize = 7;

/// Builds instruction lists for a single design spec
#[derive(Debug, Clone, Copy)]
pub struct StepBuilder<'a> {
    spec: &'a DesignSpec,
}

impl<'a> StepBuilder<'a> {
    pub fn new(spec: &'a DesignSpec) -> Self {
        Self { spec }
    }

    /// Canvas size for the spec's layout
    pub fn canvas(&self) -> CanvasSize {
        self.spec.layout.canvas_size()
    }

    /// Build the full instruction list for a tool
    pub fn build(&self, tool: DesignTool) -> Vec<String> {
        let canvas = self.canvas();
        let mut steps = tool_prefix(tool, canvas);
        steps.extend(self.common_steps());
        steps.extend(tool_suffix(tool));
        steps
    }

    /// The shared body every tool gets
    pub fn common_steps(&self) -> Vec<String> {
        let spec = self.spec;
        let canvas = self.canvas();

        let background = match spec.background_style() {
            BackgroundStyle::Gradient => "a subtle radial gradient",
            BackgroundStyle::Solid => spec.background_color(),
        };
        let placement = match spec.image_position() {
            ImagePosition::Center => "centered",
            ImagePosition::Top => "near the top",
        };

        vec![
            format!("Create a new document sized {} px.", canvas),
            format!("Set background to {}.", background),
            format!(
                "Place the main image {} and size it proportionally.",
                placement
            ),
            format!(
                "Add a bold headline using {} and align left.",
                spec.headline_font()
            ),
            format!(
                "Add supporting text with {} and reduce tracking slightly.",
                spec.subhead_font()
            ),
            format!(
                "Create a call-to-action button using {} and white text.",
                spec.cta_color()
            ),
            "Export as high-quality PNG (and save the source file as a reusable template)."
                .to_string(),
        ]
    }
}

fn tool_prefix(tool: DesignTool, canvas: CanvasSize) -> Vec<String> {
    match tool {
        DesignTool::Photoshop => vec![
            "Open Photoshop.".to_string(),
            "File > New.".to_string(),
            "Use Shape layers and Smart Objects for non-destructive editing.".to_string(),
        ],
        DesignTool::Illustrator => vec![
            "Open Illustrator.".to_string(),
            "File > New (RGB).".to_string(),
            "Use rectangles and Type tool; keep elements on separate layers.".to_string(),
        ],
        DesignTool::Canva => vec![
            "Open Canva.".to_string(),
            format!("Create a custom size {}.", canvas),
            "Add a gradient or color rectangle as background.".to_string(),
        ],
    }
}

fn tool_suffix(tool: DesignTool) -> Vec<String> {
    let lines: [&str; 2] = match tool {
        DesignTool::Photoshop => [
            "Group layers (BG, Image, Text, CTA).",
            "Save as PSD and export PNG.",
        ],
        DesignTool::Illustrator => [
            "Convert shapes to symbols for reusability.",
            "Save as AI and export PNG.",
        ],
        DesignTool::Canva => [
            "Use Position > Tidy up to align elements.",
            "Download PNG and save the design as a template.",
        ],
    };
    lines.iter().map(|line| line.to_string()).collect()
}

/// Build steps for a tool name. Unknown names get the Canva steps.
pub fn build_steps(tool_name: &str, spec: &DesignSpec) -> Vec<String> {
    StepBuilder::new(spec).build(DesignTool::from_name(tool_name))
}
