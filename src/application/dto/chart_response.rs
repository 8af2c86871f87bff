use crate::org_chart::domain::{ChartMetadata, VisualizationModel};

/// ChartResponse - Internal response DTO from the org chart use case
///
/// Formatters turn it into the requested output.
#[derive(Debug, Clone)]
pub struct ChartResponse {
    pub model: VisualizationModel,
    /// Organization and generation timestamp
    pub metadata: ChartMetadata,
}

impl ChartResponse {
    pub fn new(model: VisualizationModel, metadata: ChartMetadata) -> Self {
        Self { model, metadata }
    }

    /// Whether any organization member ended up in no team
    pub fn has_orphans(&self) -> bool {
        !self.model.members_without_team().is_empty()
    }
}
