use std::collections::HashMap;

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::user::{
        ChangePasswordDto, GroupDto, PersonDto, UpdateUserDto, UserDto, UserWithPersonDto,
    },
    server::{
        data::{
            person::PersonRepository,
            user::{group::GroupRepository, UserRepository},
        },
        error::{user::UserError, Error},
        model::{
            db::{PersonModel, UserModel},
            group::{ADMIN_GROUP, EMPLOYEE_GROUP},
        },
        util::password::{generate_password, hash_password, verify_password},
    },
};

/// Service for user administration.
///
/// Looks up users & groups, updates person profiles, changes passwords and group
/// memberships.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves a user with their group names
    ///
    /// # Returns
    /// - `Ok(Some(UserDto))` - User found
    /// - `Ok(None)` - User not found in database
    /// - `Err(Error::DbErr)` - Database error
    pub async fn get_user(&self, user_id: i32) -> Result<Option<UserDto>, Error> {
        let user_repo = UserRepository::new(self.db);
        let group_repo = GroupRepository::new(self.db);

        let Some(user) = user_repo.get_by_id(user_id).await? else {
            return Ok(None);
        };

        let groups = group_repo.get_names_by_user_id(user.id).await?;

        Ok(Some(user_to_dto(user, groups)))
    }

    pub async fn user_exists(&self, uid: &str) -> Result<bool, Error> {
        Ok(UserRepository::new(self.db).exists_by_uid(uid).await?)
    }

    pub async fn list_groups(&self) -> Result<Vec<GroupDto>, Error> {
        let groups = GroupRepository::new(self.db).get_all().await?;

        Ok(groups
            .into_iter()
            .map(|group| GroupDto {
                id: group.id,
                name: group.name,
            })
            .collect())
    }

    /// Lists every user together with their person profile & groups, ordered by user ID
    pub async fn list_users(&self) -> Result<Vec<UserWithPersonDto>, Error> {
        let user_repo = UserRepository::new(self.db);
        let group_repo = GroupRepository::new(self.db);

        let users = user_repo.get_all_with_person().await?;

        let mut groups_by_user: HashMap<i32, Vec<String>> = HashMap::new();
        for (membership, group) in group_repo.get_all_memberships().await? {
            if let Some(group) = group {
                groups_by_user
                    .entry(membership.user_id)
                    .or_default()
                    .push(group.name);
            }
        }

        users
            .into_iter()
            .map(|(user, person)| {
                let person = require_person(&user, person)?;
                let groups = groups_by_user.remove(&user.id).unwrap_or_default();

                Ok(UserWithPersonDto {
                    user: user_to_dto(user, groups),
                    person: person_to_dto(person),
                })
            })
            .collect()
    }

    /// Updates the person profile of a user
    ///
    /// The uid itself can't be changed, `update.uid` has to match `uid`.
    ///
    /// # Returns
    /// - `Ok(UserWithPersonDto)` - The updated user
    /// - `Err(Error::UserError(UserError::UidMismatch))` - Body uid differs from `uid`
    /// - `Err(Error::UserError(UserError::UserNotFound))` - No user with `uid` exists
    /// - `Err(Error::DbErr)` - Database error
    pub async fn update_user(
        &self,
        uid: &str,
        update: UpdateUserDto,
    ) -> Result<UserWithPersonDto, Error> {
        if update.uid != uid {
            return Err(UserError::UidMismatch {
                path: uid.to_string(),
                body: update.uid,
            }
            .into());
        }

        let user_repo = UserRepository::new(self.db);
        let person_repo = PersonRepository::new(self.db);
        let group_repo = GroupRepository::new(self.db);

        let Some((user, _)) = user_repo.get_with_person_by_uid(uid).await? else {
            return Err(UserError::UserNotFound(uid.to_string()).into());
        };

        let person = person_repo
            .update_names(user.person_id, &update.forename, &update.surname)
            .await?;
        let person = require_person(&user, person)?;

        let groups = group_repo.get_names_by_user_id(user.id).await?;

        Ok(UserWithPersonDto {
            user: user_to_dto(user, groups),
            person: person_to_dto(person),
        })
    }

    /// Changes the password of the logged in user
    ///
    /// # Arguments
    /// - `user_id` - ID of the logged in user
    /// - `uid` - uid of the user whose password is changed, must belong to `user_id`
    ///
    /// # Returns
    /// - `Ok(())` - Password changed
    /// - `Err(Error::UserError(UserError::PasswordChangeForbidden))` - `uid` isn't the logged in user
    /// - `Err(Error::UserError(UserError::EmptyPassword))` - New password is empty
    /// - `Err(Error::UserError(UserError::WrongPassword))` - Old password doesn't match
    /// - `Err(Error::DbErr)` - Database error
    pub async fn change_password(
        &self,
        user_id: i32,
        uid: &str,
        change: ChangePasswordDto,
    ) -> Result<(), Error> {
        let user_repo = UserRepository::new(self.db);

        let user = match user_repo.get_by_uid(uid).await? {
            Some(user) if user.id == user_id => user,
            _ => {
                return Err(UserError::PasswordChangeForbidden {
                    user_id,
                    uid: uid.to_string(),
                }
                .into())
            }
        };

        if change.new_password.is_empty() {
            return Err(UserError::EmptyPassword.into());
        }

        if !verify_password(&change.old_password, &user.password_hash) {
            return Err(UserError::WrongPassword(uid.to_string()).into());
        }

        user_repo
            .update_password(user.id, &hash_password(&change.new_password))
            .await?;

        Ok(())
    }

    /// Replaces the password of a user with a newly generated one
    ///
    /// # Returns
    /// - `Ok(String)` - The generated password in plain text
    /// - `Err(Error::UserError(UserError::UserNotFound))` - No user with `uid` exists
    /// - `Err(Error::DbErr)` - Database error
    pub async fn reset_password(&self, uid: &str) -> Result<String, Error> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.get_by_uid(uid).await? else {
            return Err(UserError::UserNotFound(uid.to_string()).into());
        };

        let password = generate_password();
        user_repo
            .update_password(user.id, &hash_password(&password))
            .await?;

        tracing::info!("Reset password of user {}", user.uid);

        Ok(password)
    }

    /// Makes the provided group the only group of a user
    ///
    /// Existing memberships are removed and the new one is added in one transaction.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The user with their new group
    /// - `Err(Error::UserError(UserError::UserNotFound))` - No user with `uid` exists
    /// - `Err(Error::UserError(UserError::GroupNotFound))` - No group with `group_id` exists
    /// - `Err(Error::DbErr)` - Database error
    pub async fn change_group(&self, uid: &str, group_id: i32) -> Result<UserDto, Error> {
        let txn = self.db.begin().await?;

        let user_repo = UserRepository::new(&txn);
        let group_repo = GroupRepository::new(&txn);

        let Some(user) = user_repo.get_by_uid(uid).await? else {
            return Err(UserError::UserNotFound(uid.to_string()).into());
        };
        let Some(group) = group_repo.get_by_id(group_id).await? else {
            return Err(UserError::GroupNotFound(group_id).into());
        };

        group_repo.remove_all_memberships(user.id).await?;
        group_repo.add_member(user.id, group.id).await?;

        txn.commit().await?;

        Ok(user_to_dto(user, vec![group.name]))
    }

    /// Creates an administrator unless a user with `uid` already exists
    ///
    /// The administrator is a member of the admin & employee groups.
    ///
    /// # Returns
    /// - `Ok(true)` - Administrator was created
    /// - `Ok(false)` - A user with `uid` already exists, nothing was changed
    /// - `Err(Error::UserError(UserError::DefaultGroupMissing))` - Groups weren't seeded
    /// - `Err(Error::DbErr)` - Database error
    pub async fn bootstrap_admin(&self, uid: &str, password: &str) -> Result<bool, Error> {
        if UserRepository::new(self.db).exists_by_uid(uid).await? {
            return Ok(false);
        }

        let txn = self.db.begin().await?;

        let group_repo = GroupRepository::new(&txn);
        let mut groups = Vec::new();
        for name in [ADMIN_GROUP, EMPLOYEE_GROUP] {
            let Some(group) = group_repo.get_by_name(name).await? else {
                return Err(UserError::DefaultGroupMissing(name.to_string()).into());
            };
            groups.push(group);
        }

        let person = PersonRepository::new(&txn).create(uid, "").await?;
        let user = UserRepository::new(&txn)
            .create(uid, &hash_password(password), person.id)
            .await?;
        for group in groups {
            group_repo.add_member(user.id, group.id).await?;
        }

        txn.commit().await?;

        Ok(true)
    }
}

fn user_to_dto(user: UserModel, groups: Vec<String>) -> UserDto {
    UserDto {
        id: user.id,
        uid: user.uid,
        person_id: user.person_id,
        groups,
    }
}

fn person_to_dto(person: PersonModel) -> PersonDto {
    PersonDto {
        id: person.id,
        forename: person.forename,
        surname: person.surname,
    }
}

/// Persons are required by a foreign key, a missing one means the database is inconsistent
fn require_person(user: &UserModel, person: Option<PersonModel>) -> Result<PersonModel, Error> {
    person.ok_or_else(|| {
        Error::InternalError(format!(
            "Failed to find person ID {} of user ID {}",
            user.person_id, user.id
        ))
    })
}
