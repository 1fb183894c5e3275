use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Sellers::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Sellers::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Sellers::Name).string().not_null())
                    .col(ColumnDef::new(Sellers::Phone).string().not_null())
                    .col(ColumnDef::new(Sellers::Email).string().null())
                    .col(ColumnDef::new(Sellers::Whatsapp).string().not_null())
                    .col(
                        ColumnDef::new(Sellers::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Sellers::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Sellers {
    Table,
    Id,
    Name,
    Phone,
    Email,
    Whatsapp,
    CreatedAt,
}
