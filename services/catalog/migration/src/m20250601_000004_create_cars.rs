use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // No foreign key on seller_id: deleting a seller leaves its cars in place.
        manager
            .create_table(
                Table::create()
                    .table(Cars::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Cars::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Cars::Brand).string().not_null())
                    .col(ColumnDef::new(Cars::Model).string().not_null())
                    .col(ColumnDef::new(Cars::Year).integer().not_null())
                    .col(ColumnDef::new(Cars::Km).big_integer().not_null())
                    .col(ColumnDef::new(Cars::Price).double().not_null())
                    .col(ColumnDef::new(Cars::Description).text().not_null())
                    .col(ColumnDef::new(Cars::Images).json().not_null())
                    .col(ColumnDef::new(Cars::SellerId).string().not_null())
                    .col(ColumnDef::new(Cars::Status).string().not_null())
                    .col(ColumnDef::new(Cars::Featured).boolean().not_null())
                    .col(
                        ColumnDef::new(Cars::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Cars::Table)
                    .col(Cars::Status)
                    .name("idx_cars_status")
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Cars::Table)
                    .col(Cars::SellerId)
                    .name("idx_cars_seller_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Cars::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Cars {
    Table,
    Id,
    Brand,
    Model,
    Year,
    Km,
    Price,
    Description,
    Images,
    SellerId,
    Status,
    Featured,
    CreatedAt,
}
