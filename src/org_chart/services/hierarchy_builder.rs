use crate::org_chart::domain::{MembershipMap, ParentMap, TeamRoster};

/// HierarchyBuilder service for turning the flat team listing into maps
///
/// Pure business logic: no I/O, works on rosters that have already been
/// fetched.
pub struct HierarchyBuilder;

impl HierarchyBuilder {
    /// Builds the name-keyed membership and parent maps
    ///
    /// Every team gets a membership entry, even when its roster is empty.
    /// Rosters are sorted case-insensitively. Parent entries exist only for
    /// teams that declare a parent; the parent is not required to be listed.
    pub fn build(rosters: Vec<TeamRoster>) -> (MembershipMap, ParentMap) {
        let mut memberships = MembershipMap::new();
        let mut parents = ParentMap::new();

        for TeamRoster { team, mut members } in rosters {
            Self::sort_case_insensitive(&mut members);

            if let Some(parent) = team.parent() {
                parents.insert(team.name().to_string(), parent.to_string());
            }

            memberships.insert(team.name().to_string(), members);
        }

        (memberships, parents)
    }

    fn sort_case_insensitive(members: &mut [String]) {
        members.sort_by_cached_key(|member| member.to_lowercase());
    }
}
