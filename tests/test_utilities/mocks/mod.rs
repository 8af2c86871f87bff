/// Mock implementations for testing
mod mock_directory_service;
mod mock_progress_reporter;

pub use mock_directory_service::MockDirectoryService;
pub use mock_progress_reporter::MockProgressReporter;
