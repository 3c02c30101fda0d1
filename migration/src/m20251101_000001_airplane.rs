use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Airplane::Table)
                    .if_not_exists()
                    .col(pk_auto(Airplane::Id))
                    .col(string_uniq(Airplane::Name))
                    .col(text_null(Airplane::Description))
                    .col(timestamp(Airplane::CreatedAt))
                    .col(timestamp(Airplane::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Airplane::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Airplane {
    Table,
    Id,
    Name,
    Description,
    CreatedAt,
    UpdatedAt,
}
