//! Guide Models
//!
//! Request, stored document, and response shapes for guide generation.

use design_tutor_guide::{DesignSpec, DesignTool};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Steps per tool, keyed by the lower-cased tool name in request order.
/// A repeated name keeps its first position and takes the later steps.
pub type StepsByTool = IndexMap<String, Vec<String>>;

fn default_tools() -> Vec<String> {
    DesignTool::ALL
        .iter()
        .map(|tool| tool.as_str().to_string())
        .collect()
}

/// Body of `POST /api/guides`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuideRequest {
    /// Name or short description of the uploaded design
    pub source_name: String,
    /// Optional URL to the design image
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default = "default_tools")]
    pub tools: Vec<String>,
}

impl GuideRequest {
    pub fn new(source_name: impl Into<String>) -> Self {
        Self {
            source_name: source_name.into(),
            image_url: None,
            tools: default_tools(),
        }
    }

    pub fn with_tools<I, S>(mut self, tools: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tools = tools.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }
}

/// Guide document persisted in the `guide` collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuideRecord {
    pub source_name: String,
    pub detected: DesignSpec,
    pub steps: StepsByTool,
}

/// Response of `POST /api/guides`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuideResponse {
    /// Store-assigned id, `None` when the guide could not be persisted
    pub id: Option<String>,
    pub source_name: String,
    pub detected: DesignSpec,
    pub steps: StepsByTool,
    pub image_url: Option<String>,
}

impl GuideResponse {
    pub fn from_record(id: Option<String>, record: GuideRecord, image_url: Option<String>) -> Self {
        Self {
            id,
            source_name: record.source_name,
            detected: record.detected,
            steps: record.steps,
            image_url,
        }
    }
}
