pub mod chart_metadata;
pub mod listing_mode;
pub mod organization;
pub mod subset_relation;
pub mod team;
pub mod visualization_model;

pub use chart_metadata::ChartMetadata;
pub use listing_mode::ListingMode;
pub use organization::Organization;
pub use subset_relation::SubsetRelation;
pub use team::{Team, TeamRoster};
pub use visualization_model::{MembershipMap, ParentMap, VisualizationModel, NO_TEAM};
