use chrono::{DateTime, Utc};

/// ChartMetadata value object describing one chart run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartMetadata {
    organization: String,
    generated_at: DateTime<Utc>,
    tool_name: String,
    tool_version: String,
}

impl ChartMetadata {
    pub fn new(organization: String, generated_at: DateTime<Utc>) -> Self {
        Self {
            organization,
            generated_at,
            tool_name: env!("CARGO_PKG_NAME").to_string(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Metadata stamped with the current time
    pub fn now(organization: String) -> Self {
        Self::new(organization, Utc::now())
    }

    pub fn organization(&self) -> &str {
        &self.organization
    }

    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }
}
