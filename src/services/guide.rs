//! Guide Service
//!
//! Orchestrates guide generation: one detection pass per request, one step
//! list per requested tool, then a best-effort write of the guide document.

use design_tutor_core::DocumentKind;
use design_tutor_guide::{DesignDetector, DesignTool, StepBuilder};

use crate::models::guide::{GuideRecord, GuideRequest, GuideResponse, StepsByTool};
use crate::state::AppState;

/// Guide generation service
#[derive(Debug, Clone, Default)]
pub struct GuideService {
    detector: DesignDetector,
}

impl GuideService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the guide content without touching the store.
    ///
    /// Steps are keyed by the lower-cased tool name as given; a repeated name
    /// overwrites the earlier entry and an unknown name gets the Canva steps.
    pub fn assemble(&self, source_name: &str, tools: &[String]) -> GuideRecord {
        let detected = self.detector.detect(source_name);
        let builder = StepBuilder::new(&detected);

        let mut steps = StepsByTool::new();
        for tool in tools {
            let key = tool.to_lowercase();
            let lines = builder.build(DesignTool::from_name(&key));
            steps.insert(key, lines);
        }

        GuideRecord {
            source_name: source_name.to_string(),
            detected,
            steps,
        }
    }

    /// Generate a guide and persist it.
    ///
    /// Persistence is best-effort: if the store is missing or the write
    /// fails, the guide is still returned with `id: None`.
    pub async fn generate(&self, state: &AppState, request: GuideRequest) -> GuideResponse {
        let record = self.assemble(&request.source_name, &request.tools);
        tracing::debug!(
            "[GuideService] Detected {} layout for '{}' ({} tools)",
            record.detected.layout,
            record.source_name,
            record.steps.len()
        );

        let id = self.persist(state, &record).await;
        GuideResponse::from_record(id, record, request.image_url)
    }

    async fn persist(&self, state: &AppState, record: &GuideRecord) -> Option<String> {
        let payload = match serde_json::to_value(record) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!("[GuideService] Failed to serialize guide: {}", e);
                return None;
            }
        };

        match state
            .with_store(move |store| store.create_document(DocumentKind::Guide, payload))
            .await
        {
            Ok(id) => {
                tracing::info!("[GuideService] Stored guide {}", id);
                Some(id)
            }
            Err(e) => {
                tracing::warn!("[GuideService] Guide not persisted: {}", e);
                None
            }
        }
    }
}
