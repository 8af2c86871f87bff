use orgchart::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock DirectoryService serving an in-memory organization in fixed-size pages
///
/// Every page request is recorded as `"<listing> page <n>"` so tests can
/// check which calls were made.
#[derive(Clone)]
pub struct MockDirectoryService {
    org: String,
    org_id: i64,
    page_size: usize,
    members: Vec<String>,
    teams: Vec<Team>,
    team_members: HashMap<i64, Vec<String>>,
    access_denied: bool,
    failing_teams_page: Option<u32>,
    failing_team_members: Option<i64>,
    pub requests: Arc<Mutex<Vec<String>>>,
}

impl MockDirectoryService {
    pub fn new(org: &str, org_id: i64) -> Self {
        Self {
            org: org.to_string(),
            org_id,
            page_size: 100,
            members: Vec::new(),
            teams: Vec::new(),
            team_members: HashMap::new(),
            access_denied: false,
            failing_teams_page: None,
            failing_team_members: None,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_members(mut self, logins: &[&str]) -> Self {
        self.members.extend(logins.iter().map(|l| l.to_string()));
        self
    }

    pub fn with_team(mut self, id: i64, name: &str, parent: Option<&str>, members: &[&str]) -> Self {
        let mut team = Team::new(id, name.to_string()).unwrap();
        if let Some(parent) = parent {
            team = team.with_parent(parent);
        }
        self.teams.push(team);
        self.team_members
            .insert(id, members.iter().map(|m| m.to_string()).collect());
        self
    }

    pub fn with_access_denied(mut self) -> Self {
        self.access_denied = true;
        self
    }

    pub fn with_failing_teams_page(mut self, page: u32) -> Self {
        self.failing_teams_page = Some(page);
        self
    }

    pub fn with_failing_team_members(mut self, team_id: i64) -> Self {
        self.failing_team_members = Some(team_id);
        self
    }

    pub fn get_requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self, listing: &str) -> usize {
        self.get_requests()
            .iter()
            .filter(|r| r.starts_with(listing))
            .count()
    }

    fn record(&self, listing: &str, page: PageRequest) {
        self.requests
            .lock()
            .unwrap()
            .push(format!("{} page {}", listing, page.page));
    }

    fn page_of<T: Clone>(&self, items: &[T], page: PageRequest) -> Page<T> {
        let size = self.page_size.max(1);
        let start = (page.page as usize - 1) * size;
        let current: Vec<T> = items.iter().skip(start).take(size).cloned().collect();
        let next_page = if start + size < items.len() {
            Some(page.page + 1)
        } else {
            None
        };
        Page::new(current, next_page)
    }
}

#[async_trait::async_trait]
impl DirectoryService for MockDirectoryService {
    async fn organization(&self, org: &str) -> Result<Organization> {
        if org != self.org {
            return Err(OrgChartError::NotFound {
                org: org.to_string(),
            }
            .into());
        }
        if self.access_denied {
            return Err(OrgChartError::Access {
                org: org.to_string(),
                status: 401,
            }
            .into());
        }
        Ok(Organization::new(self.org_id, self.org.clone()))
    }

    async fn members_page(&self, _org: &str, page: PageRequest) -> Result<Page<String>> {
        self.record("members", page);
        Ok(self.page_of(&self.members, page))
    }

    async fn teams_page(&self, _org: &str, page: PageRequest) -> Result<Page<Team>> {
        self.record("teams", page);
        if self.failing_teams_page == Some(page.page) {
            anyhow::bail!("GitHub API returned status code 502 Bad Gateway");
        }
        Ok(self.page_of(&self.teams, page))
    }

    async fn team_members_page(
        &self,
        org_id: i64,
        team_id: i64,
        page: PageRequest,
    ) -> Result<Page<String>> {
        self.record(&format!("team {}", team_id), page);
        if org_id != self.org_id {
            anyhow::bail!("unexpected organization id {}", org_id);
        }
        if self.failing_team_members == Some(team_id) {
            anyhow::bail!("GitHub API returned status code 500 Internal Server Error");
        }
        let members = self.team_members.get(&team_id).cloned().unwrap_or_default();
        Ok(self.page_of(&members, page))
    }
}
