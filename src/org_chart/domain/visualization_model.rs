use super::SubsetRelation;
use serde::Serialize;
use std::collections::BTreeMap;

/// Reserved membership key for members that belong to no team
pub const NO_TEAM: &str = "NO_TEAM";

/// Team name -> member logins, sorted case-insensitively
pub type MembershipMap = BTreeMap<String, Vec<String>>;

/// Team name -> parent team name (only for teams that declare one)
pub type ParentMap = BTreeMap<String, String>;

/// VisualizationModel aggregate handed to the chart formatters
///
/// Built once per run after every fetch has completed. Formatters only get
/// shared references, so the snapshot cannot change after assembly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisualizationModel {
    teams: MembershipMap,
    parents: ParentMap,
    members: Vec<String>,
    subsets: SubsetRelation,
    members_without_team: Vec<String>,
}

impl VisualizationModel {
    pub fn new(
        teams: MembershipMap,
        parents: ParentMap,
        members: Vec<String>,
        subsets: SubsetRelation,
        members_without_team: Vec<String>,
    ) -> Self {
        Self {
            teams,
            parents,
            members,
            subsets,
            members_without_team,
        }
    }

    /// Membership map, including the `NO_TEAM` entry when present
    pub fn teams(&self) -> &MembershipMap {
        &self.teams
    }

    pub fn parents(&self) -> &ParentMap {
        &self.parents
    }

    /// Full organization member list in directory order
    pub fn members(&self) -> &[String] {
        &self.members
    }

    pub fn subsets(&self) -> &SubsetRelation {
        &self.subsets
    }

    /// Members without a team, empty when everyone is placed
    pub fn members_without_team(&self) -> &[String] {
        &self.members_without_team
    }

    /// Number of real teams, not counting the synthetic `NO_TEAM` entry
    ///
    /// A team that is really called `NO_TEAM` counts as long as no members
    /// without a team replaced it.
    pub fn team_count(&self) -> usize {
        let synthetic =
            !self.members_without_team.is_empty() && self.teams.contains_key(NO_TEAM);
        self.teams.len() - usize::from(synthetic)
    }
}
