//! Helpers shared by controllers for resolving the logged in user and checking their
//! permissions.

pub mod get_user;
pub mod require_group;
