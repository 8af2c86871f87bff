use crate::org_chart::domain::{
    MembershipMap, ParentMap, SubsetRelation, VisualizationModel, NO_TEAM,
};

/// ModelAssembler service for combining the computed parts into the final model
pub struct ModelAssembler;

impl ModelAssembler {
    /// Assembles the visualization model
    ///
    /// Members without a team are stored under `NO_TEAM` only when there are
    /// any. A real team called `NO_TEAM` is overwritten by that entry.
    pub fn assemble(
        mut memberships: MembershipMap,
        parents: ParentMap,
        members: Vec<String>,
        subsets: SubsetRelation,
        members_without_team: Vec<String>,
    ) -> VisualizationModel {
        if !members_without_team.is_empty() {
            memberships.insert(NO_TEAM.to_string(), members_without_team.clone());
        }

        VisualizationModel::new(memberships, parents, members, subsets, members_without_team)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_memberships() -> MembershipMap {
        let mut memberships = MembershipMap::new();
        memberships.insert("core".to_string(), vec!["alice".to_string()]);
        memberships
    }

    #[test]
    fn test_injects_no_team_when_orphans_exist() {
        let model = ModelAssembler::assemble(
            base_memberships(),
            ParentMap::new(),
            vec!["alice".to_string(), "bob".to_string()],
            SubsetRelation::new(),
            vec!["bob".to_string()],
        );

        assert_eq!(model.teams()[NO_TEAM], vec!["bob"]);
        assert_eq!(model.teams().len(), 2);
        assert_eq!(model.members_without_team(), ["bob"]);
        assert_eq!(model.team_count(), 1);
    }

    #[test]
    fn test_real_no_team_team_kept_without_orphans() {
        let mut memberships = base_memberships();
        memberships.insert(NO_TEAM.to_string(), vec!["alice".to_string()]);

        let model = ModelAssembler::assemble(
            memberships,
            ParentMap::new(),
            vec!["alice".to_string()],
            SubsetRelation::new(),
            Vec::new(),
        );

        assert_eq!(model.teams()[NO_TEAM], vec!["alice"]);
        assert!(model.members_without_team().is_empty());
        assert_eq!(model.team_count(), 2);
    }

    #[test]
    fn test_no_injection_without_orphans() {
        let model = ModelAssembler::assemble(
            base_memberships(),
            ParentMap::new(),
            vec!["alice".to_string()],
            SubsetRelation::new(),
            Vec::new(),
        );

        assert!(!model.teams().contains_key(NO_TEAM));
        assert_eq!(model.teams().len(), 1);
    }

    #[test]
    fn test_passes_parts_through() {
        let mut parents = ParentMap::new();
        parents.insert("core".to_string(), "engineering".to_string());
        let mut subsets = SubsetRelation::new();
        subsets.add("core", "engineering");

        let model = ModelAssembler::assemble(
            base_memberships(),
            parents.clone(),
            vec!["alice".to_string()],
            subsets.clone(),
            Vec::new(),
        );

        assert_eq!(model.parents(), &parents);
        assert_eq!(model.subsets(), &subsets);
        assert_eq!(model.members(), ["alice"]);
    }
}
