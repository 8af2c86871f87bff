use crate::org_chart::domain::{Organization, Team};
use crate::ports::outbound::{DirectoryService, Page, PageRequest};
use crate::shared::error::OrgChartError;
use crate::shared::Result;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, LINK};
use reqwest::{Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

/// Public GitHub REST API
pub const DEFAULT_API_URL: &str = "https://api.github.com";

#[derive(Debug, Deserialize)]
struct GitHubOrganization {
    id: i64,
    login: String,
}

#[derive(Debug, Deserialize)]
struct GitHubUser {
    login: String,
}

#[derive(Debug, Deserialize)]
struct GitHubTeam {
    id: i64,
    name: String,
    #[serde(default)]
    parent: Option<GitHubTeamParent>,
}

#[derive(Debug, Deserialize)]
struct GitHubTeamParent {
    name: String,
}

impl GitHubTeam {
    fn into_team(self) -> Result<Team> {
        let team = Team::new(self.id, self.name)?;
        Ok(match self.parent {
            Some(parent) => team.with_parent(parent.name),
            None => team,
        })
    }
}

/// GitHubDirectoryService adapter for the GitHub REST API
///
/// Implements the DirectoryService port. Pagination follows the `Link`
/// response header; a page without a `rel="next"` link is the last one.
/// The token is passed through as a bearer credential and never inspected.
pub struct GitHubDirectoryService {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl GitHubDirectoryService {
    const TIMEOUT_SECONDS: u64 = 30;
    const API_VERSION: &'static str = "2022-11-28";

    /// Creates a client against the public GitHub API
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::with_base_url(token, DEFAULT_API_URL)
    }

    /// Creates a client against another API root (e.g. GitHub Enterprise)
    pub fn with_base_url(token: impl Into<String>, base_url: &str) -> Result<Self> {
        Url::parse(base_url).map_err(|e| OrgChartError::InvalidConfig {
            message: format!("invalid API URL '{}': {}", base_url, e),
            hint: format!("Use an absolute URL such as {}", DEFAULT_API_URL),
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert(
            "x-github-api-version",
            HeaderValue::from_static(Self::API_VERSION),
        );

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(Self::TIMEOUT_SECONDS))
            .user_agent(format!("orgchart/{}", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.into(),
        })
    }

    fn paged_url(&self, path: &str, page: PageRequest) -> String {
        format!(
            "{}{}?per_page={}&page={}",
            self.base_url, path, page.per_page, page.page
        )
    }

    /// Sends a GET and maps failure statuses; `subject` names the organization
    async fn get(&self, url: &str, subject: &str) -> Result<Response> {
        let response = self
            .client
            .get(url)
            .bearer_auth(&self.token)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        Err(status_error(status, subject))
    }

    async fn get_page<T: DeserializeOwned>(&self, url: &str, subject: &str) -> Result<Page<T>> {
        let response = self.get(url, subject).await?;
        let next_page = next_page_from_headers(response.headers());
        let items: Vec<T> = response.json().await?;
        Ok(Page::new(items, next_page))
    }
}

#[async_trait]
impl DirectoryService for GitHubDirectoryService {
    async fn organization(&self, org: &str) -> Result<Organization> {
        let url = format!("{}/orgs/{}", self.base_url, urlencoding::encode(org));
        let organization: GitHubOrganization = self.get(&url, org).await?.json().await?;
        Ok(Organization::new(organization.id, organization.login))
    }

    async fn members_page(&self, org: &str, page: PageRequest) -> Result<Page<String>> {
        let path = format!("/orgs/{}/members", urlencoding::encode(org));
        let page: Page<GitHubUser> = self.get_page(&self.paged_url(&path, page), org).await?;
        Ok(Page::new(
            page.items.into_iter().map(|user| user.login).collect(),
            page.next_page,
        ))
    }

    async fn teams_page(&self, org: &str, page: PageRequest) -> Result<Page<Team>> {
        let path = format!("/orgs/{}/teams", urlencoding::encode(org));
        let page: Page<GitHubTeam> = self.get_page(&self.paged_url(&path, page), org).await?;
        let teams = page
            .items
            .into_iter()
            .map(GitHubTeam::into_team)
            .collect::<Result<Vec<_>>>()?;
        Ok(Page::new(teams, page.next_page))
    }

    async fn team_members_page(
        &self,
        org_id: i64,
        team_id: i64,
        page: PageRequest,
    ) -> Result<Page<String>> {
        let path = format!("/organizations/{}/team/{}/members", org_id, team_id);
        let page: Page<GitHubUser> = self
            .get_page(&self.paged_url(&path, page), &org_id.to_string())
            .await?;
        Ok(Page::new(
            page.items.into_iter().map(|user| user.login).collect(),
            page.next_page,
        ))
    }
}

fn status_error(status: StatusCode, org: &str) -> anyhow::Error {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => OrgChartError::Access {
            org: org.to_string(),
            status: status.as_u16(),
        }
        .into(),
        StatusCode::NOT_FOUND => OrgChartError::NotFound {
            org: org.to_string(),
        }
        .into(),
        _ => anyhow::anyhow!("GitHub API returned status code {}", status),
    }
}

fn next_page_from_headers(headers: &HeaderMap) -> Option<u32> {
    headers
        .get_all(LINK)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find_map(parse_next_page)
}

/// Extracts the `page` query parameter of the `rel="next"` entry of a Link header
///
/// `<https://api.github.com/orgs/x/members?page=2>; rel="next", <...>; rel="last"`
fn parse_next_page(link_header: &str) -> Option<u32> {
    link_header.split(',').find_map(|entry| {
        let mut parts = entry.split(';');
        let target = parts.next()?.trim();
        let is_next = parts.any(|param| {
            let param = param.trim();
            param == r#"rel="next""# || param == "rel=next"
        });
        if !is_next {
            return None;
        }

        let url = Url::parse(target.strip_prefix('<')?.strip_suffix('>')?).ok()?;
        url.query_pairs()
            .find(|(key, _)| key == "page")
            .and_then(|(_, value)| value.parse().ok())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        assert!(GitHubDirectoryService::new("token").is_ok());
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let err = GitHubDirectoryService::with_base_url("token", "not a url").err().unwrap();
        assert!(matches!(
            err.downcast_ref::<OrgChartError>(),
            Some(OrgChartError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_paged_url_trims_trailing_slash() {
        let client =
            GitHubDirectoryService::with_base_url("token", "https://ghe.example.com/api/v3/").unwrap();

        assert_eq!(
            client.paged_url("/orgs/acme/teams", PageRequest::new(3, 100)),
            "https://ghe.example.com/api/v3/orgs/acme/teams?per_page=100&page=3"
        );
    }

    #[test]
    fn test_parse_next_page() {
        let header = r#"<https://api.github.com/organizations/1/members?per_page=100&page=2>; rel="next", <https://api.github.com/organizations/1/members?per_page=100&page=5>; rel="last""#;
        assert_eq!(parse_next_page(header), Some(2));
    }

    #[test]
    fn test_parse_next_page_not_first_entry() {
        let header = r#"<https://api.github.com/orgs/acme/teams?page=1>; rel="prev", <https://api.github.com/orgs/acme/teams?page=3>; rel="next""#;
        assert_eq!(parse_next_page(header), Some(3));
    }

    #[test]
    fn test_parse_next_page_last_page() {
        let header = r#"<https://api.github.com/orgs/acme/teams?page=1>; rel="first", <https://api.github.com/orgs/acme/teams?page=4>; rel="prev""#;
        assert_eq!(parse_next_page(header), None);
    }

    #[test]
    fn test_parse_next_page_malformed() {
        assert_eq!(parse_next_page(""), None);
        assert_eq!(parse_next_page(r#"https://no-brackets?page=2; rel="next""#), None);
        assert_eq!(parse_next_page(r#"<https://api.github.com/x?page=abc>; rel="next""#), None);
    }

    #[test]
    fn test_next_page_from_headers() {
        let mut headers = HeaderMap::new();
        assert_eq!(next_page_from_headers(&headers), None);

        headers.insert(
            LINK,
            HeaderValue::from_static(r#"<https://api.github.com/orgs/acme/members?page=2>; rel="next""#),
        );
        assert_eq!(next_page_from_headers(&headers), Some(2));
    }

    #[test]
    fn test_status_error_mapping() {
        let err = status_error(StatusCode::UNAUTHORIZED, "acme");
        assert!(matches!(
            err.downcast_ref::<OrgChartError>(),
            Some(OrgChartError::Access { status: 401, .. })
        ));

        let err = status_error(StatusCode::FORBIDDEN, "acme");
        assert!(matches!(
            err.downcast_ref::<OrgChartError>(),
            Some(OrgChartError::Access { status: 403, .. })
        ));

        let err = status_error(StatusCode::NOT_FOUND, "acme");
        assert!(matches!(
            err.downcast_ref::<OrgChartError>(),
            Some(OrgChartError::NotFound { .. })
        ));

        let err = status_error(StatusCode::INTERNAL_SERVER_ERROR, "acme");
        assert!(err.downcast_ref::<OrgChartError>().is_none());
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn test_team_deserialize_with_parent() {
        let json = r#"[
            {"id": 1, "name": "platform", "slug": "platform", "parent": null},
            {"id": 2, "name": "infra", "slug": "infra", "parent": {"id": 1, "name": "platform"}},
            {"id": 3, "name": "design"}
        ]"#;

        let teams: Vec<GitHubTeam> = serde_json::from_str(json).unwrap();
        let teams: Vec<Team> = teams
            .into_iter()
            .map(GitHubTeam::into_team)
            .collect::<Result<_>>()
            .unwrap();

        assert_eq!(teams[0].parent(), None);
        assert_eq!(teams[1].parent(), Some("platform"));
        assert_eq!(teams[1].id(), 2);
        assert_eq!(teams[2].name(), "design");
    }

    #[test]
    fn test_user_deserialize_ignores_extra_fields() {
        let json = r#"[{"login": "octocat", "id": 1, "site_admin": false}]"#;
        let users: Vec<GitHubUser> = serde_json::from_str(json).unwrap();
        assert_eq!(users[0].login, "octocat");
    }

    #[test]
    fn test_organization_deserialize() {
        let json = r#"{"login": "acme", "id": 42, "description": null}"#;
        let org: GitHubOrganization = serde_json::from_str(json).unwrap();
        assert_eq!(org.id, 42);
        assert_eq!(org.login, "acme");
    }
}
