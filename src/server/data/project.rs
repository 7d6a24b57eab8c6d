use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder};

use crate::server::model::db::ProjectModel;

pub struct ProjectRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProjectRepository<'a, C> {
    /// Creates a new instance of [`ProjectRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, name: &str) -> Result<ProjectModel, DbErr> {
        let project = entity::project::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            created_at: ActiveValue::Set(chrono::Utc::now().naive_utc()),
            ..Default::default()
        };

        project.insert(self.db).await
    }

    pub async fn get_by_id(&self, project_id: i32) -> Result<Option<ProjectModel>, DbErr> {
        entity::prelude::Project::find_by_id(project_id)
            .one(self.db)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<ProjectModel>, DbErr> {
        entity::prelude::Project::find()
            .order_by_asc(entity::project::Column::Id)
            .all(self.db)
            .await
    }
}
