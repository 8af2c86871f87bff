use crate::org_chart::domain::{ChartMetadata, VisualizationModel};
use crate::ports::outbound::ChartFormatter;
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ChartDocument<'a> {
    organization: &'a str,
    generated_at: String,
    tool: Tool<'a>,
    #[serde(flatten)]
    model: &'a VisualizationModel,
}

#[derive(Debug, Serialize)]
struct Tool<'a> {
    name: &'a str,
    version: &'a str,
}

/// JsonFormatter adapter serializing the visualization model for other tooling
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartFormatter for JsonFormatter {
    fn format(&self, model: &VisualizationModel, metadata: &ChartMetadata) -> Result<String> {
        let document = ChartDocument {
            organization: metadata.organization(),
            generated_at: metadata.generated_at().to_rfc3339(),
            tool: Tool {
                name: metadata.tool_name(),
                version: metadata.tool_version(),
            },
            model,
        };

        let mut json = serde_json::to_string_pretty(&document)?;
        json.push('\n');
        Ok(json)
    }
}
