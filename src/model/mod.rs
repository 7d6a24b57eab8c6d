//! Data transfer objects exchanged with API clients.
//!
//! All types serialize with camelCase field names, the wire format of the booking web
//! client.

pub mod api;
pub mod auth;
pub mod booking;
pub mod project;
pub mod statistic;
pub mod user;
