use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, EntityTrait, QueryFilter};

use crate::{
    error::TestError,
    model::{GroupModel, PersonModel, UserGroupModel, UserModel},
    TestContext,
};

impl TestContext {
    pub fn user(&self) -> UserFixtures<'_> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    pub async fn insert_group(&self, name: &str) -> Result<GroupModel, TestError> {
        Ok(entity::timebook_group::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        }
        .insert(&self.setup.db)
        .await?)
    }

    pub async fn insert_person(
        &self,
        forename: &str,
        surname: &str,
    ) -> Result<PersonModel, TestError> {
        Ok(entity::person::ActiveModel {
            forename: ActiveValue::Set(forename.to_string()),
            surname: ActiveValue::Set(surname.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(&self.setup.db)
        .await?)
    }

    pub async fn insert_user(
        &self,
        uid: &str,
        password_hash: &str,
        person_id: i32,
    ) -> Result<UserModel, TestError> {
        Ok(entity::timebook_user::ActiveModel {
            uid: ActiveValue::Set(uid.to_string()),
            password_hash: ActiveValue::Set(password_hash.to_string()),
            person_id: ActiveValue::Set(person_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(&self.setup.db)
        .await?)
    }

    pub async fn insert_user_with_person(
        &self,
        uid: &str,
        password_hash: &str,
        forename: &str,
        surname: &str,
    ) -> Result<(UserModel, PersonModel), TestError> {
        let person = self.insert_person(forename, surname).await?;
        let user = self.insert_user(uid, password_hash, person.id).await?;

        Ok((user, person))
    }

    /// Insert a user with person and membership in the `admin` group
    pub async fn insert_admin(
        &self,
        uid: &str,
        password_hash: &str,
    ) -> Result<(UserModel, PersonModel), TestError> {
        let (user, person) = self
            .insert_user_with_person(uid, password_hash, "Admin", "Istrator")
            .await?;
        self.add_user_to_group(user.id, "admin").await?;

        Ok((user, person))
    }

    pub async fn add_user_to_group(
        &self,
        user_id: i32,
        group_name: &str,
    ) -> Result<UserGroupModel, TestError> {
        let group = entity::prelude::TimebookGroup::find()
            .filter(entity::timebook_group::Column::Name.eq(group_name))
            .one(&self.setup.db)
            .await?
            .ok_or_else(|| TestError::MissingFixture(format!("group {}", group_name)))?;

        Ok(entity::timebook_user_group::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            group_id: ActiveValue::Set(group.id),
            ..Default::default()
        }
        .insert(&self.setup.db)
        .await?)
    }
}
