//! Service layer for business logic.
//!
//! Services validate input, coordinate repositories (inside transactions where several
//! writes belong together) and convert database models into the DTOs returned by the
//! controllers. Statistics are computed by a pure aggregation over fetched records.

pub mod auth;
pub mod booking;
pub mod project;
pub mod statistic;
pub mod user;
