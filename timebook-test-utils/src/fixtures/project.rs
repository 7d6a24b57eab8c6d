use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{error::TestError, model::ProjectModel, TestContext};

impl TestContext {
    pub fn project(&self) -> ProjectFixtures<'_> {
        ProjectFixtures { setup: self }
    }
}

pub struct ProjectFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> ProjectFixtures<'a> {
    pub async fn insert_project(&self, name: &str) -> Result<ProjectModel, TestError> {
        Ok(entity::project::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(&self.setup.db)
        .await?)
    }
}
