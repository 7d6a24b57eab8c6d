//! Test context returned by [`TestBuilder`](crate::TestBuilder).

use std::sync::Arc;

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use tower_sessions::{MemoryStore, Session};

use crate::error::TestError;

/// Test environment holding an in-memory SQLite database and a session.
///
/// ```ignore
/// let test = TestBuilder::new().with_app_tables().build().await?;
///
/// let (user, person) = test
///     .user()
///     .insert_user_with_person("jdoe", TEST_PASSWORD_HASH, "Jane", "Doe")
///     .await?;
/// let project = test.project().insert_project("Alpha").await?;
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
    /// Session backed by a memory store, standing in for the user's cookie session
    pub session: Session,
}

impl TestContext {
    /// Convert the database connection into any type that can be constructed from it
    ///
    /// This allows conversion to `AppState` without the test utilities depending on the
    /// main crate.
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<DatabaseConnection>,
    {
        T::from(self.db.clone())
    }

    /// Create a second session sharing nothing with [`TestContext::session`].
    ///
    /// Used by tests that act as two different logged in users.
    pub fn new_session(&self) -> Session {
        Session::new(None, Arc::new(MemoryStore::default()), None)
    }

    pub(crate) async fn new() -> Result<Self, TestError> {
        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext { db, session })
    }

    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}
