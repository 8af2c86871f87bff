/// Use cases module containing application business logic orchestration
mod build_org_chart;

pub use build_org_chart::BuildOrgChartUseCase;
