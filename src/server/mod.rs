//! Server application core modules.
//!
//! HTTP routing, session handling, controllers, services and repositories of the Timebook
//! backend, together with its configuration, error types and startup helpers.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
