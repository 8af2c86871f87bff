use crate::adapters::outbound::formatters::{DotFormatter, JsonFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::ChartFormatter;

/// Factory for creating chart formatters
///
/// Selects the infrastructure adapter for an application-level output format.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use orgchart::application::dto::OutputFormat;
    /// use orgchart::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Dot);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn ChartFormatter> {
        match format {
            OutputFormat::Dot => Box::new(DotFormatter::new()),
            OutputFormat::Json => Box::new(JsonFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    ///
    /// # Examples
    /// ```
    /// use orgchart::application::dto::OutputFormat;
    /// use orgchart::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::Dot);
    /// assert_eq!(message, "📝 Rendering chart as Graphviz DOT...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Dot => "📝 Rendering chart as Graphviz DOT...",
            OutputFormat::Json => "📝 Rendering chart as JSON...",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::org_chart::domain::{ChartMetadata, SubsetRelation, VisualizationModel};

    fn empty_model() -> VisualizationModel {
        VisualizationModel::new(
            Default::default(),
            Default::default(),
            Vec::new(),
            SubsetRelation::new(),
            Vec::new(),
        )
    }

    #[test]
    fn test_create_dot_formatter() {
        let formatter = FormatterFactory::create(OutputFormat::Dot);
        let output = formatter
            .format(&empty_model(), &ChartMetadata::now("acme".to_string()))
            .unwrap();
        assert!(output.contains("digraph"));
    }

    #[test]
    fn test_create_json_formatter() {
        let formatter = FormatterFactory::create(OutputFormat::Json);
        let output = formatter
            .format(&empty_model(), &ChartMetadata::now("acme".to_string()))
            .unwrap();
        assert!(serde_json::from_str::<serde_json::Value>(&output).is_ok());
    }

    #[test]
    fn test_progress_messages_mention_rendering() {
        assert!(FormatterFactory::progress_message(OutputFormat::Dot).contains("Rendering chart"));
        assert!(FormatterFactory::progress_message(OutputFormat::Json).contains("Rendering chart"));
    }
}
