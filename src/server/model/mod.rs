//! Server application models and type definitions.
//!
//! Application state, database model type aliases, group names and session data
//! structures shared by controllers and services.

pub mod app;
pub mod db;
pub mod group;
pub mod session;
