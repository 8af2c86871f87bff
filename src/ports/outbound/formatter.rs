use crate::org_chart::domain::{ChartMetadata, VisualizationModel};
use crate::shared::Result;

/// ChartFormatter port for rendering the org chart
///
/// This port abstracts the rendering of the visualization model into a
/// textual artifact (Graphviz DOT, JSON, etc.).
pub trait ChartFormatter {
    /// Renders the visualization model
    ///
    /// # Arguments
    /// * `model` - The assembled, read-only visualization model
    /// * `metadata` - Run metadata (organization, timestamp, tool version)
    ///
    /// # Returns
    /// Rendered chart content as a string
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, model: &VisualizationModel, metadata: &ChartMetadata) -> Result<String>;
}
