/// Application layer - Use cases and DTOs
///
/// Orchestrates the org chart domain services and reaches infrastructure
/// through ports.
pub mod directory;
pub mod dto;
pub mod factories;
pub mod use_cases;
