use crate::shared::error::OrgChartError;
use crate::shared::Result;

/// Team entity as listed by the directory service
///
/// Members are not part of the entity: they are fetched separately per team
/// and kept in the membership map, keyed by team name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    id: i64,
    name: String,
    parent: Option<String>,
}

impl Team {
    /// Creates a team entity
    ///
    /// Names are taken as the directory reports them. Only an empty name is
    /// rejected, since teams are keyed by name.
    pub fn new(id: i64, name: String) -> Result<Self> {
        if name.is_empty() {
            return Err(OrgChartError::Validation {
                message: format!("team name cannot be empty (team id {})", id),
            }
            .into());
        }

        Ok(Self {
            id,
            name,
            parent: None,
        })
    }

    /// Sets the name of the parent team
    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }
}

/// A team together with its fetched member logins
///
/// The roster is empty when team members are not listed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamRoster {
    pub team: Team,
    pub members: Vec<String>,
}

impl TeamRoster {
    pub fn new(team: Team, members: Vec<String>) -> Self {
        Self { team, members }
    }

    /// Roster for a team whose members were not fetched
    pub fn unlisted(team: Team) -> Self {
        Self::new(team, Vec::new())
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
