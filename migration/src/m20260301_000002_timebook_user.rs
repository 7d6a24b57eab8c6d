use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260301_000001_person::Person;

static FK_USER_PERSON_ID: &str = "fk-timebook_user-person_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TimebookUser::Table)
                    .if_not_exists()
                    .col(pk_auto(TimebookUser::Id))
                    .col(string_uniq(TimebookUser::Uid))
                    .col(string(TimebookUser::PasswordHash))
                    .col(integer_uniq(TimebookUser::PersonId))
                    .col(timestamp(TimebookUser::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_USER_PERSON_ID)
                    .from_tbl(TimebookUser::Table)
                    .from_col(TimebookUser::PersonId)
                    .to_tbl(Person::Table)
                    .to_col(Person::Id)
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
                    .name(FK_USER_PERSON_ID)
                    .table(TimebookUser::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(TimebookUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum TimebookUser {
    Table,
    Id,
    Uid,
    PasswordHash,
    PersonId,
    CreatedAt,
}
