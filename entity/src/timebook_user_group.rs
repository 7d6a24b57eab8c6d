use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "timebook_user_group")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub group_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::timebook_user::Entity",
        from = "Column::UserId",
        to = "super::timebook_user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    TimebookUser,
    #[sea_orm(
        belongs_to = "super::timebook_group::Entity",
        from = "Column::GroupId",
        to = "super::timebook_group::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    TimebookGroup,
}

impl Related<super::timebook_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TimebookUser.def()
    }
}

impl Related<super::timebook_group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TimebookGroup.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
