//! Database model type aliases for test utilities.
//!
//! These mirror the aliases of the main crate so fixtures and tests read the same way.

pub type UserModel = entity::timebook_user::Model;

pub type PersonModel = entity::person::Model;

pub type GroupModel = entity::timebook_group::Model;

pub type UserGroupModel = entity::timebook_user_group::Model;

pub type ProjectModel = entity::project::Model;

pub type BookingModel = entity::booking::Model;
