use crate::org_chart::domain::{MembershipMap, SubsetRelation};
use std::collections::HashSet;

/// SubsetDetector service for finding teams whose roster is contained in another's
///
/// Teams are taken in name order and each unordered pair is compared exactly
/// once, so the result does not depend on the order in which earlier pairs
/// were discovered. Identical rosters are recorded in both directions.
pub struct SubsetDetector;

impl SubsetDetector {
    pub fn detect(memberships: &MembershipMap) -> SubsetRelation {
        // Empty teams are never a subset of anything, nor a superset.
        let teams: Vec<(&str, HashSet<&str>)> = memberships
            .iter()
            .filter(|(_, members)| !members.is_empty())
            .map(|(name, members)| {
                (
                    name.as_str(),
                    members.iter().map(String::as_str).collect::<HashSet<_>>(),
                )
            })
            .collect();

        let mut relation = SubsetRelation::new();

        for (i, (team, members)) in teams.iter().enumerate() {
            for (other_team, other_members) in &teams[i + 1..] {
                let common = members.intersection(other_members).count();
                if common == 0 {
                    continue;
                }

                if common == members.len() {
                    relation.add(team, other_team);
                }

                if common == other_members.len() {
                    relation.add(other_team, team);
                }
            }
        }

        relation
    }
}
