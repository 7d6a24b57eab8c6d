//! Shared test harness for the Timebook workspace.
//!
//! Tests are set up in two phases: a [`TestBuilder`] declares tables and fixtures, and
//! `build()` returns a [`TestContext`] holding an in-memory SQLite database and a
//! memory-backed session which tests then drive through the fixture helpers.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod model;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant::{TEST_PASSWORD, TEST_PASSWORD_HASH},
        fixtures::factory,
        TestBuilder, TestContext, TestError,
    };
}
