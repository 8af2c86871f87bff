use crate::org_chart::domain::{Organization, Team};
use crate::shared::Result;
use async_trait::async_trait;

/// Request for one page of a paged listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based page number
    pub page: u32,
    /// Maximum number of items on the page
    pub per_page: u32,
}

impl PageRequest {
    pub fn new(page: u32, per_page: u32) -> Self {
        Self { page, per_page }
    }
}

/// One page of a paged listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Next page to request, `None` on the last page
    pub next_page: Option<u32>,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, next_page: Option<u32>) -> Self {
        Self { items, next_page }
    }

    /// A page with nothing after it
    pub fn last(items: Vec<T>) -> Self {
        Self::new(items, None)
    }
}

/// DirectoryService port for the remote membership directory
///
/// This port abstracts the external directory (e.g., the GitHub REST API)
/// that lists organizations, members, teams and team members. Listings are
/// exposed page by page; draining them is the core's job.
///
/// # Async Support
/// Implementations must be `Send + Sync` so the port can be used from the
/// tokio runtime.
#[async_trait]
pub trait DirectoryService: Send + Sync {
    /// Resolves an organization by name
    ///
    /// # Errors
    /// Returns `OrgChartError::NotFound` if the organization does not exist
    /// and `OrgChartError::Access` if the credential cannot read it.
    async fn organization(&self, org: &str) -> Result<Organization>;

    /// Fetches one page of organization member logins
    async fn members_page(&self, org: &str, page: PageRequest) -> Result<Page<String>>;

    /// Fetches one page of teams, with parent names but without members
    async fn teams_page(&self, org: &str, page: PageRequest) -> Result<Page<Team>>;

    /// Fetches one page of member logins for a team
    async fn team_members_page(
        &self,
        org_id: i64,
        team_id: i64,
        page: PageRequest,
    ) -> Result<Page<String>>;
}
