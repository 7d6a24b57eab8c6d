//! Session data models.
//!
//! Type-safe wrappers for values stored in the tower-sessions session (Redis-backed in
//! production, memory-backed in tests).

pub mod user;
