//! SeaORM entities for the Timebook database schema.

pub mod prelude;

pub mod booking;
pub mod person;
pub mod project;
pub mod timebook_group;
pub mod timebook_user;
pub mod timebook_user_group;
