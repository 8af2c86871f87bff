//! orgchart - draw the team structure of a GitHub organization
//!
//! Enumerates the members and teams of an organization, works out which
//! teams are proper subsets of other teams and which members belong to no
//! team, and renders the result as a graph description.
//!
//! # Architecture
//!
//! - **Domain Layer** (`org_chart`): the visualization model and the pure
//!   services that build it
//! - **Application Layer** (`application`): pagination, the directory client
//!   and the chart use case
//! - **Ports** (`ports`): interface definitions for infrastructure
//! - **Adapters** (`adapters`): GitHub REST client, formatters, output
//! - **Shared** (`shared`): error types and the result alias
//!
//! # Example
//!
//! ```no_run
//! use orgchart::prelude::*;
//!
//! # async fn run() -> Result<()> {
//! let directory = GitHubDirectoryService::new("ghp_token")?;
//! let use_case = BuildOrgChartUseCase::new(directory, StderrProgressReporter::new());
//!
//! let response = use_case
//!     .execute(ChartRequest::new("my-org", ListingMode::Full))
//!     .await?;
//!
//! let dot = DotFormatter::new().format(&response.model, &response.metadata)?;
//! println!("{}", dot);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod org_chart;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{DotFormatter, JsonFormatter};
    pub use crate::adapters::outbound::network::GitHubDirectoryService;
    pub use crate::application::directory::{DirectoryClient, Paginator};
    pub use crate::application::dto::{ChartRequest, ChartResponse, OutputFormat};
    pub use crate::application::use_cases::BuildOrgChartUseCase;
    pub use crate::org_chart::domain::{
        ChartMetadata, ListingMode, MembershipMap, Organization, ParentMap, SubsetRelation, Team,
        TeamRoster, VisualizationModel, NO_TEAM,
    };
    pub use crate::org_chart::services::{
        HierarchyBuilder, ModelAssembler, OrphanFinder, SubsetDetector,
    };
    pub use crate::ports::outbound::{
        ChartFormatter, DirectoryService, OutputPresenter, Page, PageRequest, ProgressReporter,
    };
    pub use crate::shared::error::OrgChartError;
    pub use crate::shared::Result;
}
