use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260301_000002_timebook_user::TimebookUser, m20260301_000003_timebook_group::TimebookGroup,
};

static IDX_USER_GROUP_USER_ID: &str = "idx-timebook_user_group-user_id";
static FK_USER_GROUP_USER_ID: &str = "fk-timebook_user_group-user_id";
static FK_USER_GROUP_GROUP_ID: &str = "fk-timebook_user_group-group_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TimebookUserGroup::Table)
                    .if_not_exists()
                    .col(pk_auto(TimebookUserGroup::Id))
                    .col(integer(TimebookUserGroup::UserId))
                    .col(integer(TimebookUserGroup::GroupId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_USER_GROUP_USER_ID)
                    .table(TimebookUserGroup::Table)
                    .col(TimebookUserGroup::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_USER_GROUP_USER_ID)
                    .from_tbl(TimebookUserGroup::Table)
                    .from_col(TimebookUserGroup::UserId)
                    .to_tbl(TimebookUser::Table)
                    .to_col(TimebookUser::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_USER_GROUP_GROUP_ID)
                    .from_tbl(TimebookUserGroup::Table)
                    .from_col(TimebookUserGroup::GroupId)
                    .to_tbl(TimebookGroup::Table)
                    .to_col(TimebookGroup::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_USER_GROUP_GROUP_ID)
                    .table(TimebookUserGroup::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_USER_GROUP_USER_ID)
                    .table(TimebookUserGroup::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_USER_GROUP_USER_ID)
                    .table(TimebookUserGroup::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(TimebookUserGroup::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum TimebookUserGroup {
    Table,
    Id,
    UserId,
    GroupId,
}
