//! HTTP controller endpoints for the Timebook web API.
//!
//! Axum handlers for authentication, user administration, bookings, projects and
//! statistics. Controllers resolve the logged in user from the session, call a service
//! and serialize its result. Every endpoint is documented for OpenAPI via utoipa.

pub mod auth;
pub mod booking;
pub mod project;
pub mod statistic;
pub mod user;
pub mod util;
