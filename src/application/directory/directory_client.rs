use super::paginator::{Paginator, DEFAULT_PER_PAGE};
use crate::org_chart::domain::{Organization, Team};
use crate::ports::outbound::DirectoryService;
use crate::shared::Result;

/// DirectoryClient exposing whole collections on top of a paged DirectoryService
///
/// Every listing is drained through the Paginator, so callers either get the
/// complete collection or an error.
pub struct DirectoryClient<DS> {
    service: DS,
    per_page: u32,
}

impl<DS: DirectoryService> DirectoryClient<DS> {
    pub fn new(service: DS) -> Self {
        Self {
            service,
            per_page: DEFAULT_PER_PAGE,
        }
    }

    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    /// Resolves the organization, with its canonical login
    pub async fn organization(&self, org: &str) -> Result<Organization> {
        self.service.organization(org).await
    }

    /// Resolves the numeric organization id used for team member lookups
    pub async fn organization_id(&self, org: &str) -> Result<i64> {
        Ok(self.organization(org).await?.id())
    }

    /// All organization member logins, in directory order
    pub async fn all_members(&self, org: &str) -> Result<Vec<String>> {
        Paginator::new(format!("members of organization '{}'", org))
            .with_per_page(self.per_page)
            .collect_all(move |page| self.service.members_page(org, page))
            .await
    }

    /// All teams of the organization, without members
    pub async fn all_teams(&self, org: &str) -> Result<Vec<Team>> {
        Paginator::new(format!("teams of organization '{}'", org))
            .with_per_page(self.per_page)
            .collect_all(move |page| self.service.teams_page(org, page))
            .await
    }

    /// All member logins of one team
    pub async fn team_members(&self, org_id: i64, team: &Team) -> Result<Vec<String>> {
        let team_id = team.id();

        Paginator::new(format!("members of team '{}'", team.name()))
            .with_per_page(self.per_page)
            .collect_all(move |page| self.service.team_members_page(org_id, team_id, page))
            .await
    }
}
