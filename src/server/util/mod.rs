//! Utility functions and helpers for server operations.
//!
//! Password digests and generation, and the date/duration arithmetic bookings and
//! statistics are built on.

pub mod password;
pub mod time;
