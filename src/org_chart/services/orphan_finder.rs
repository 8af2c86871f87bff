use crate::org_chart::domain::{ListingMode, MembershipMap};
use std::collections::HashSet;

/// OrphanFinder service for listing organization members that belong to no team
pub struct OrphanFinder;

impl OrphanFinder {
    /// Returns the members absent from every roster, in organization order
    ///
    /// Always empty in `TeamsOnly` mode: rosters were never fetched there.
    pub fn find(mode: ListingMode, memberships: &MembershipMap, members: &[String]) -> Vec<String> {
        if !mode.includes_members() {
            return Vec::new();
        }

        let placed: HashSet<&str> = memberships
            .values()
            .flatten()
            .map(String::as_str)
            .collect();

        members
            .iter()
            .filter(|member| !placed.contains(member.as_str()))
            .cloned()
            .collect()
    }
}
