//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with the state & session of a [`TestContext`], asserting
//! the status codes and bodies API clients see.

mod auth;
mod booking;
mod project;
mod statistic;
