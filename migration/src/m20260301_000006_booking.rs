use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260301_000001_person::Person, m20260301_000002_timebook_user::TimebookUser,
    m20260301_000005_project::Project,
};

static IDX_BOOKING_USER_ID: &str = "idx-booking-user_id";
static FK_BOOKING_USER_ID: &str = "fk-booking-user_id";
static FK_BOOKING_PERSON_ID: &str = "fk-booking-person_id";
static FK_BOOKING_PROJECT_ID: &str = "fk-booking-project_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Booking::Table)
                    .if_not_exists()
                    .col(pk_auto(Booking::Id))
                    .col(integer(Booking::UserId))
                    .col(integer(Booking::PersonId))
                    .col(integer(Booking::ProjectId))
                    .col(date(Booking::WorkDay))
                    .col(timestamp(Booking::WorkStarted))
                    .col(timestamp(Booking::WorkFinished))
                    .col(integer(Booking::Pause))
                    .col(timestamp(Booking::CreatedAt))
                    .col(timestamp(Booking::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_BOOKING_USER_ID)
                    .table(Booking::Table)
                    .col(Booking::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BOOKING_USER_ID)
                    .from_tbl(Booking::Table)
                    .from_col(Booking::UserId)
                    .to_tbl(TimebookUser::Table)
                    .to_col(TimebookUser::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BOOKING_PERSON_ID)
                    .from_tbl(Booking::Table)
                    .from_col(Booking::PersonId)
                    .to_tbl(Person::Table)
                    .to_col(Person::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BOOKING_PROJECT_ID)
                    .from_tbl(Booking::Table)
                    .from_col(Booking::ProjectId)
                    .to_tbl(Project::Table)
                    .to_col(Project::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in [
            FK_BOOKING_PROJECT_ID,
            FK_BOOKING_PERSON_ID,
            FK_BOOKING_USER_ID,
        ] {
            manager
                .drop_foreign_key(
                    ForeignKey::drop()
                        .name(name)
                        .table(Booking::Table)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_BOOKING_USER_ID)
                    .table(Booking::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Booking::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Booking {
    Table,
    Id,
    UserId,
    PersonId,
    ProjectId,
    WorkDay,
    WorkStarted,
    WorkFinished,
    Pause,
    CreatedAt,
    UpdatedAt,
}
