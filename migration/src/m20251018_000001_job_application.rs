use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(JobApplication::Table)
                    .if_not_exists()
                    .col(pk_auto(JobApplication::Id))
                    .col(string(JobApplication::Company))
                    .col(text(JobApplication::Url))
                    .col(text(JobApplication::Website))
                    .col(string(JobApplication::Status))
                    .col(date(JobApplication::Applied))
                    .col(date(JobApplication::Deadline))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(JobApplication::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum JobApplication {
    Table,
    Id,
    Company,
    Url,
    Website,
    Status,
    Applied,
    Deadline,
}
