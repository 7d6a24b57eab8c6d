use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::model::db::{GroupModel, UserGroupModel};

pub struct GroupRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GroupRepository<'a, C> {
    /// Creates a new instance of [`GroupRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Get all groups ordered by ID
    pub async fn get_all(&self) -> Result<Vec<GroupModel>, DbErr> {
        entity::prelude::TimebookGroup::find()
            .order_by_asc(entity::timebook_group::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, group_id: i32) -> Result<Option<GroupModel>, DbErr> {
        entity::prelude::TimebookGroup::find_by_id(group_id)
            .one(self.db)
            .await
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Option<GroupModel>, DbErr> {
        entity::prelude::TimebookGroup::find()
            .filter(entity::timebook_group::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Get the names of all groups a user is a member of, ordered by group ID
    pub async fn get_names_by_user_id(&self, user_id: i32) -> Result<Vec<String>, DbErr> {
        let groups = entity::prelude::TimebookGroup::find()
            .join(
                sea_orm::JoinType::InnerJoin,
                entity::timebook_group::Relation::TimebookUserGroup.def(),
            )
            .filter(entity::timebook_user_group::Column::UserId.eq(user_id))
            .order_by_asc(entity::timebook_group::Column::Id)
            .all(self.db)
            .await?;

        Ok(groups.into_iter().map(|group| group.name).collect())
    }

    /// Get every membership together with its group
    pub async fn get_all_memberships(
        &self,
    ) -> Result<Vec<(UserGroupModel, Option<GroupModel>)>, DbErr> {
        entity::prelude::TimebookUserGroup::find()
            .find_also_related(entity::timebook_group::Entity)
            .order_by_asc(entity::timebook_user_group::Column::GroupId)
            .all(self.db)
            .await
    }

    /// Add a user to a group
    pub async fn add_member(&self, user_id: i32, group_id: i32) -> Result<UserGroupModel, DbErr> {
        let membership = entity::timebook_user_group::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            group_id: ActiveValue::Set(group_id),
            ..Default::default()
        };

        membership.insert(self.db).await
    }

    /// Remove a user from every group
    ///
    /// Returns OK regardless of memberships existing, check [`DeleteResult::rows_affected`]
    /// for the number of removed memberships.
    pub async fn remove_all_memberships(&self, user_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::TimebookUserGroup::delete_many()
            .filter(entity::timebook_user_group::Column::UserId.eq(user_id))
            .exec(self.db)
            .await
    }
}
