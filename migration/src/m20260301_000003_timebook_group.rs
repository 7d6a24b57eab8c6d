use sea_orm_migration::{prelude::*, schema::*};

/// Groups every installation starts with, the first one grants administration rights
static DEFAULT_GROUPS: [&str; 2] = ["admin", "employee"];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TimebookGroup::Table)
                    .if_not_exists()
                    .col(pk_auto(TimebookGroup::Id))
                    .col(string_uniq(TimebookGroup::Name))
                    .to_owned(),
            )
            .await?;

        let mut insert = Query::insert();
        insert
            .into_table(TimebookGroup::Table)
            .columns([TimebookGroup::Name]);
        for name in DEFAULT_GROUPS {
            insert.values_panic([name.into()]);
        }

        manager.exec_stmt(insert.to_owned()).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TimebookGroup::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TimebookGroup {
    Table,
    Id,
    Name,
}
