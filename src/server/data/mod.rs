//! Data access layer repositories.
//!
//! Repositories wrap SeaORM queries per table and are generic over [`sea_orm::ConnectionTrait`]
//! so services can run them on a plain connection or inside a transaction.

pub mod booking;
pub mod person;
pub mod project;
pub mod user;
