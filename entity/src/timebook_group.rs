use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "timebook_group")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::timebook_user_group::Entity")]
    TimebookUserGroup,
}

impl Related<super::timebook_user_group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TimebookUserGroup.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
