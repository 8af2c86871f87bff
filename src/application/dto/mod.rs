/// Data Transfer Objects for application layer
///
/// DTOs carry data between the application layer and adapters, keeping the
/// domain layer isolated.
mod chart_request;
mod chart_response;
mod output_format;

pub use chart_request::ChartRequest;
pub use chart_response::ChartResponse;
pub use output_format::OutputFormat;
