//! Declarative test builder.
//!
//! Configuration methods only queue work, everything is executed by `build()` so a test
//! reads as a description of the state it starts from.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Group names seeded by the migrations, in id order.
pub static DEFAULT_GROUPS: [&str; 2] = ["admin", "employee"];

/// Builder for declarative test initialization.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_app_tables: bool,

    projects: Vec<String>,
    // (uid, password_hash, forename, surname, group)
    users: Vec<(String, String, String, String, Option<String>)>,
}

impl TestBuilder {
    /// Create a new, empty TestBuilder.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_app_tables: false,
            projects: Vec::new(),
            users: Vec::new(),
        }
    }

    /// Add every application table to the test database.
    ///
    /// Creates person, user, group, user group, project and booking tables and seeds the
    /// default groups the way the migrations do.
    pub fn with_app_tables(mut self) -> Self {
        self.include_app_tables = true;
        self
    }

    /// Add a single entity table to the test database.
    ///
    /// Useful for tests that need a partial schema, e.g. to provoke database errors on
    /// the tables that are left out.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a project with the provided name.
    pub fn with_mock_project(mut self, name: &str) -> Self {
        self.projects.push(name.to_string());
        self
    }

    /// Insert a user together with their person record.
    ///
    /// # Arguments
    /// - `uid` - Login name of the user
    /// - `password_hash` - Stored password digest, usually `TEST_PASSWORD_HASH`
    /// - `forename` / `surname` - Names of the person attached to the user
    /// - `group` - Optional name of a group the user is added to
    pub fn with_mock_user(
        mut self,
        uid: &str,
        password_hash: &str,
        forename: &str,
        surname: &str,
        group: Option<&str>,
    ) -> Self {
        self.users.push((
            uid.to_string(),
            password_hash.to_string(),
            forename.to_string(),
            surname.to_string(),
            group.map(str::to_string),
        ));
        self
    }

    /// Build the test context, creating tables first and fixtures second.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    /// - `Err(TestError::MissingFixture)` - A fixture referenced a group that doesn't exist
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        let mut tables = Vec::new();
        if self.include_app_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            tables.extend([
                schema.create_table_from_entity(entity::prelude::Person),
                schema.create_table_from_entity(entity::prelude::TimebookUser),
                schema.create_table_from_entity(entity::prelude::TimebookGroup),
                schema.create_table_from_entity(entity::prelude::TimebookUserGroup),
                schema.create_table_from_entity(entity::prelude::Project),
                schema.create_table_from_entity(entity::prelude::Booking),
            ]);
        }
        tables.extend(self.tables);
        setup.with_tables(tables).await?;

        if self.include_app_tables {
            for name in DEFAULT_GROUPS {
                setup.user().insert_group(name).await?;
            }
        }

        for name in self.projects {
            setup.project().insert_project(&name).await?;
        }

        for (uid, password_hash, forename, surname, group) in self.users {
            let (user, _) = setup
                .user()
                .insert_user_with_person(&uid, &password_hash, &forename, &surname)
                .await?;

            if let Some(group) = group {
                setup.user().add_user_to_group(user.id, &group).await?;
            }
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
