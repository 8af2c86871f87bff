use crate::application::directory::DirectoryClient;
use crate::application::dto::{ChartRequest, ChartResponse};
use crate::org_chart::domain::{ChartMetadata, ListingMode, Team, TeamRoster};
use crate::org_chart::services::{HierarchyBuilder, ModelAssembler, OrphanFinder, SubsetDetector};
use crate::ports::outbound::{DirectoryService, ProgressReporter};
use crate::shared::Result;

/// BuildOrgChartUseCase - Core use case for org chart construction
///
/// Runs the whole pipeline strictly in sequence: organization lookup,
/// members, teams, per-team members, then the pure domain services. Any
/// error aborts the run; nothing partial is returned.
///
/// # Type Parameters
/// * `DS` - DirectoryService implementation
/// * `PR` - ProgressReporter implementation
pub struct BuildOrgChartUseCase<DS, PR> {
    directory: DirectoryClient<DS>,
    progress_reporter: PR,
}

impl<DS, PR> BuildOrgChartUseCase<DS, PR>
where
    DS: DirectoryService,
    PR: ProgressReporter,
{
    pub fn new(directory_service: DS, progress_reporter: PR) -> Self {
        Self {
            directory: DirectoryClient::new(directory_service),
            progress_reporter,
        }
    }

    /// Executes the org chart use case
    ///
    /// # Arguments
    /// * `request` - Organization name and listing mode
    ///
    /// # Returns
    /// ChartResponse with the visualization model and run metadata
    pub async fn execute(&self, request: ChartRequest) -> Result<ChartResponse> {
        let org = request.org.as_str();

        // Step 1: Resolve the organization
        self.progress_reporter.report("🏢 Getting organization ID...");
        let organization = self.directory.organization(org).await?;
        let org_id = organization.id();

        // Step 2: Organization members
        self.progress_reporter
            .report("👥 Getting organization members...");
        let members = self.directory.all_members(org).await?;
        self.progress_reporter
            .report(&format!("✅ Found {} member(s)", members.len()));

        // Step 3: Teams, then their rosters
        self.progress_reporter.report("🧩 Getting organization teams...");
        let teams = self.directory.all_teams(org).await?;
        self.progress_reporter
            .report(&format!("✅ Found {} team(s)", teams.len()));

        let rosters = self
            .collect_rosters(org_id, teams, request.listing_mode)
            .await?;

        // Step 4: Domain computations
        let (memberships, parents) = HierarchyBuilder::build(rosters);
        let subsets = SubsetDetector::detect(&memberships);
        let members_without_team = OrphanFinder::find(request.listing_mode, &memberships, &members);

        self.report_summary(
            members.len(),
            memberships.len(),
            subsets.pair_count(),
            members_without_team.len(),
            request.listing_mode,
        );

        let model = ModelAssembler::assemble(
            memberships,
            parents,
            members,
            subsets,
            members_without_team,
        );

        let metadata = ChartMetadata::now(organization.login().to_string());
        Ok(ChartResponse::new(model, metadata))
    }

    /// Fetches each team's members one team at a time
    ///
    /// In teams-only mode no member request is issued at all.
    async fn collect_rosters(
        &self,
        org_id: i64,
        teams: Vec<Team>,
        mode: ListingMode,
    ) -> Result<Vec<TeamRoster>> {
        if !mode.includes_members() {
            return Ok(teams.into_iter().map(TeamRoster::unlisted).collect());
        }

        let total = teams.len();
        let mut rosters = Vec::with_capacity(total);

        for (idx, team) in teams.into_iter().enumerate() {
            self.progress_reporter
                .report_progress(idx + 1, total, Some(team.name()));

            let members = self.directory.team_members(org_id, &team).await?;
            rosters.push(TeamRoster::new(team, members));
        }

        Ok(rosters)
    }

    fn report_summary(
        &self,
        member_count: usize,
        team_count: usize,
        subset_pairs: usize,
        orphan_count: usize,
        mode: ListingMode,
    ) {
        self.progress_reporter.report_completion("📊 Summary:");
        self.progress_reporter
            .report(&format!("   - Members: {}", member_count));
        self.progress_reporter
            .report(&format!("   - Teams: {}", team_count));
        self.progress_reporter
            .report(&format!("   - Listing mode: {}", mode));

        if mode.includes_members() {
            self.progress_reporter
                .report(&format!("   - Subset relations: {}", subset_pairs));
            self.progress_reporter
                .report(&format!("   - Members without a team: {}", orphan_count));
        } else {
            self.progress_reporter
                .report("   - Team members not listed (teams-only mode)");
        }
    }
}
