/// Whether team rosters are fetched and shown
///
/// `TeamsOnly` skips every per-team member fetch. Without rosters nobody can
/// be shown as lacking a team, so orphan detection is skipped as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListingMode {
    /// Fetch team members and compute members without a team
    #[default]
    Full,
    /// Only list teams and their hierarchy
    TeamsOnly,
}

impl ListingMode {
    /// Maps the `--hide-team-members` switch onto a listing mode
    pub fn from_hide_members(hide_members: bool) -> Self {
        if hide_members {
            ListingMode::TeamsOnly
        } else {
            ListingMode::Full
        }
    }

    pub fn includes_members(self) -> bool {
        matches!(self, ListingMode::Full)
    }
}

impl std::fmt::Display for ListingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListingMode::Full => write!(f, "full"),
            ListingMode::TeamsOnly => write!(f, "teams-only"),
        }
    }
}
