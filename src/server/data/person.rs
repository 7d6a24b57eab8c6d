use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel,
    QueryOrder,
};

use crate::server::model::db::PersonModel;

pub struct PersonRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PersonRepository<'a, C> {
    /// Creates a new instance of [`PersonRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, forename: &str, surname: &str) -> Result<PersonModel, DbErr> {
        let person = entity::person::ActiveModel {
            forename: ActiveValue::Set(forename.to_string()),
            surname: ActiveValue::Set(surname.to_string()),
            created_at: ActiveValue::Set(chrono::Utc::now().naive_utc()),
            ..Default::default()
        };

        person.insert(self.db).await
    }

    pub async fn get_by_id(&self, person_id: i32) -> Result<Option<PersonModel>, DbErr> {
        entity::prelude::Person::find_by_id(person_id)
            .one(self.db)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<PersonModel>, DbErr> {
        entity::prelude::Person::find()
            .order_by_asc(entity::person::Column::Id)
            .all(self.db)
            .await
    }

    /// Update forename & surname of a person
    ///
    /// Returns `Ok(None)` if the person doesn't exist.
    pub async fn update_names(
        &self,
        person_id: i32,
        forename: &str,
        surname: &str,
    ) -> Result<Option<PersonModel>, DbErr> {
        let person = match entity::prelude::Person::find_by_id(person_id)
            .one(self.db)
            .await?
        {
            Some(person) => person,
            None => return Ok(None),
        };

        let mut person_am = person.into_active_model();
        person_am.forename = ActiveValue::Set(forename.to_string());
        person_am.surname = ActiveValue::Set(surname.to_string());

        let person = person_am.update(self.db).await?;

        Ok(Some(person))
    }
}
