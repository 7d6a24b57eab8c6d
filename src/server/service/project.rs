use sea_orm::DatabaseConnection;

use crate::{
    model::project::{CreateProjectDto, ProjectDto},
    server::{
        data::project::ProjectRepository,
        error::{project::ProjectError, Error},
        model::db::ProjectModel,
    },
};

pub struct ProjectService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProjectService<'a> {
    /// Creates a new instance of [`ProjectService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_projects(&self) -> Result<Vec<ProjectDto>, Error> {
        let projects = ProjectRepository::new(self.db).get_all().await?;

        Ok(projects.into_iter().map(project_to_dto).collect())
    }

    /// Creates a project, surrounding whitespace of the name is removed
    ///
    /// # Returns
    /// - `Ok(ProjectDto)` - The created project
    /// - `Err(Error::ProjectError(ProjectError::EmptyName))` - Name is blank
    /// - `Err(Error::DbErr)` - Database error
    pub async fn create_project(&self, project: CreateProjectDto) -> Result<ProjectDto, Error> {
        let name = project.name.trim();
        if name.is_empty() {
            return Err(ProjectError::EmptyName.into());
        }

        let project = ProjectRepository::new(self.db).create(name).await?;

        Ok(project_to_dto(project))
    }
}

fn project_to_dto(project: ProjectModel) -> ProjectDto {
    ProjectDto {
        id: project.id,
        name: project.name,
    }
}
