use crate::org_chart::domain::ListingMode;

/// ChartRequest - Internal request DTO for the org chart use case
#[derive(Debug, Clone)]
pub struct ChartRequest {
    /// Organization login, as it appears in GitHub URLs
    pub org: String,
    /// Whether team member lists are fetched and drawn
    pub listing_mode: ListingMode,
}

impl ChartRequest {
    pub fn new(org: impl Into<String>, listing_mode: ListingMode) -> Self {
        Self {
            org: org.into(),
            listing_mode,
        }
    }
}
