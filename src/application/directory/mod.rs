/// Directory access built on the DirectoryService port
mod directory_client;
mod paginator;

pub use directory_client::DirectoryClient;
pub use paginator::{Paginator, DEFAULT_PER_PAGE};
