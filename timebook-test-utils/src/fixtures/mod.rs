//! Fixture helpers for inserting records during test execution.
//!
//! - `user` - persons, users and group memberships
//! - `project` - projects
//! - `booking` - bookings
//! - `factory` - in-memory models that never touch the database

pub mod booking;
pub mod factory;
pub mod project;
pub mod user;
