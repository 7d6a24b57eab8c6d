use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{auth::RegisterDto, user::UserDto},
    server::{
        data::{
            person::PersonRepository,
            user::{group::GroupRepository, UserRepository},
        },
        error::{auth::AuthError, user::UserError, Error},
        model::group::EMPLOYEE_GROUP,
        util::password::{hash_password, verify_password},
    },
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    /// Creates a new instance of [`AuthService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Check the credentials of a user
    ///
    /// # Returns
    /// - `Ok(UserDto)` - Credentials are valid
    /// - `Err(Error::AuthError(AuthError::InvalidCredentials))` - Unknown uid or wrong password
    /// - `Err(Error::DbErr)` - Database error
    pub async fn login(&self, uid: &str, password: &str) -> Result<UserDto, Error> {
        let user_repo = UserRepository::new(self.db);
        let group_repo = GroupRepository::new(self.db);

        let user = match user_repo.get_by_uid(uid).await? {
            Some(user) if verify_password(password, &user.password_hash) => user,
            _ => return Err(AuthError::InvalidCredentials(uid.to_string()).into()),
        };

        let groups = group_repo.get_names_by_user_id(user.id).await?;

        Ok(UserDto {
            id: user.id,
            uid: user.uid,
            person_id: user.person_id,
            groups,
        })
    }

    /// Register a new user
    ///
    /// Person, user and the membership in the employee group are created in a single
    /// transaction, nothing is stored if any step fails.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The registered user
    /// - `Err(Error::UserError(UserError::UsernameTaken))` - A user with the uid already exists
    /// - `Err(Error::UserError(UserError::EmptyUsername | UserError::EmptyPassword))` - Blank input
    /// - `Err(Error::UserError(UserError::DefaultGroupMissing))` - Employee group wasn't seeded
    /// - `Err(Error::DbErr)` - Database error
    pub async fn register(&self, registration: RegisterDto) -> Result<UserDto, Error> {
        let uid = registration.uid.as_str();

        if uid.trim().is_empty() {
            return Err(UserError::EmptyUsername.into());
        }
        if registration.password.is_empty() {
            return Err(UserError::EmptyPassword.into());
        }

        if UserRepository::new(self.db).exists_by_uid(uid).await? {
            return Err(UserError::UsernameTaken(uid.to_string()).into());
        }

        let Some(employee_group) = GroupRepository::new(self.db)
            .get_by_name(EMPLOYEE_GROUP)
            .await?
        else {
            return Err(UserError::DefaultGroupMissing(EMPLOYEE_GROUP.to_string()).into());
        };

        let txn = self.db.begin().await?;

        let person = PersonRepository::new(&txn)
            .create(&registration.forename, &registration.surname)
            .await?;
        let user = UserRepository::new(&txn)
            .create(uid, &hash_password(&registration.password), person.id)
            .await?;
        GroupRepository::new(&txn)
            .add_member(user.id, employee_group.id)
            .await?;

        txn.commit().await?;

        tracing::info!("Registered user {} with ID {}", user.uid, user.id);

        Ok(UserDto {
            id: user.id,
            uid: user.uid,
            person_id: user.person_id,
            groups: vec![employee_group.name],
        })
    }
}
