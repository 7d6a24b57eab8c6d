pub mod group;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::db::{PersonModel, UserModel};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user attached to an existing person
    pub async fn create(
        &self,
        uid: &str,
        password_hash: &str,
        person_id: i32,
    ) -> Result<UserModel, DbErr> {
        let user = entity::timebook_user::ActiveModel {
            uid: ActiveValue::Set(uid.to_string()),
            password_hash: ActiveValue::Set(password_hash.to_string()),
            person_id: ActiveValue::Set(person_id),
            created_at: ActiveValue::Set(chrono::Utc::now().naive_utc()),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    pub async fn get_by_id(&self, user_id: i32) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::TimebookUser::find_by_id(user_id)
            .one(self.db)
            .await
    }

    /// Get a user by their login name
    pub async fn get_by_uid(&self, uid: &str) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::TimebookUser::find()
            .filter(entity::timebook_user::Column::Uid.eq(uid))
            .one(self.db)
            .await
    }

    /// Get a user by login name together with their person profile
    pub async fn get_with_person_by_uid(
        &self,
        uid: &str,
    ) -> Result<Option<(UserModel, Option<PersonModel>)>, DbErr> {
        entity::prelude::TimebookUser::find()
            .filter(entity::timebook_user::Column::Uid.eq(uid))
            .find_also_related(entity::person::Entity)
            .one(self.db)
            .await
    }

    /// Get every user together with their person profile, ordered by user ID
    pub async fn get_all_with_person(
        &self,
    ) -> Result<Vec<(UserModel, Option<PersonModel>)>, DbErr> {
        entity::prelude::TimebookUser::find()
            .find_also_related(entity::person::Entity)
            .order_by_asc(entity::timebook_user::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn exists_by_uid(&self, uid: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::TimebookUser::find()
            .filter(entity::timebook_user::Column::Uid.eq(uid))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Replace the stored password digest of a user
    ///
    /// Returns `Ok(None)` if the user doesn't exist.
    pub async fn update_password(
        &self,
        user_id: i32,
        password_hash: &str,
    ) -> Result<Option<UserModel>, DbErr> {
        let user = match entity::prelude::TimebookUser::find_by_id(user_id)
            .one(self.db)
            .await?
        {
            Some(user) => user,
            None => return Ok(None),
        };

        let mut user_am = user.into_active_model();
        user_am.password_hash = ActiveValue::Set(password_hash.to_string());

        let user = user_am.update(self.db).await?;

        Ok(Some(user))
    }
}
