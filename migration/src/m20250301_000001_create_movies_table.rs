use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Movies::Table)
                    .if_not_exists()
                    .col(pk_auto(Movies::Id))
                    .col(string_null(Movies::Title))
                    .col(string_null(Movies::Genre))
                    .col(boolean(Movies::Status).default(false))
                    .col(string_null(Movies::ImageUrl))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Movies::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Movies {
    Table,
    Id,
    Title,
    Genre,
    Status,
    ImageUrl,
}
