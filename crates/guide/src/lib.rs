//! Design Tutor Guide
//!
//! Rule-based design detection and per-tool step generation. Everything in
//! this crate is pure: no I/O and no shared state.
//!
//! - `models` - Design data types (Layout, DesignSpec, DesignTool, etc.)
//! - `detector` - Keyword-based design detection
//! - `steps` - Per-tool instruction list generation

pub mod detector;
pub mod models;
pub mod steps;

// Re-export core model types
pub use models::{
    BackgroundStyle, CanvasSize, DesignSpec, DesignTool, ImagePosition, Layout,
    StructureElement,
};

// Re-export detector
pub use detector::{detect_design, DesignDetector, LayoutRule, DEFAULT_LAYOUT_RULES};

// Re-export step generation
pub use steps::{build_steps, StepBuilder};
