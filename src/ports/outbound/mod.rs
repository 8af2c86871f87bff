/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (directory API, console, file system).
pub mod directory_service;
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;

pub use directory_service::{DirectoryService, Page, PageRequest};
pub use formatter::ChartFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
