//! Org chart domain layer
//!
//! Domain model (teams, memberships, subset relation, visualization model)
//! and the pure services that derive the chart from fetched data.

pub mod domain;
pub mod services;
