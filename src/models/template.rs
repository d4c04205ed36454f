//! Template Models
//!
//! Reusable design layouts stored in the `template` collection.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

fn default_width() -> u32 {
    1080
}

fn default_height() -> u32 {
    1350
}

fn default_background() -> String {
    "#0b0f1a".to_string()
}

fn default_palette() -> Vec<String> {
    vec![
        "#FF7A00".to_string(),
        "#111827".to_string(),
        "#F3F4F6".to_string(),
    ]
}

fn default_fonts() -> Vec<String> {
    vec!["Inter".to_string(), "Manrope".to_string()]
}

/// A positioned element on a template canvas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateElement {
    pub id: String,
    /// rectangle | text | image
    #[serde(rename = "type")]
    pub element_type: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub rotation: f64,
    #[serde(default)]
    pub styles: HashMap<String, serde_json::Value>,
    /// Text content or image URL placeholder
    #[serde(default)]
    pub content: Option<String>,
}

/// A reusable design layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default = "default_background")]
    pub background: String,
    #[serde(default = "default_palette")]
    pub palette: Vec<String>,
    #[serde(default = "default_fonts")]
    pub fonts: Vec<String>,
    #[serde(default)]
    pub elements: Vec<TemplateElement>,
}
