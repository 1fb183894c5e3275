use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SiteSettings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SiteSettings::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SiteSettings::SiteName).string().not_null())
                    .col(ColumnDef::new(SiteSettings::LogoUrl).string().not_null())
                    .col(
                        ColumnDef::new(SiteSettings::PrimaryColor)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(SiteSettings::Address).string().not_null())
                    .col(ColumnDef::new(SiteSettings::Phone).string().not_null())
                    .col(ColumnDef::new(SiteSettings::Email).string().not_null())
                    .col(
                        ColumnDef::new(SiteSettings::FacebookUrl)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SiteSettings::InstagramUrl)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SiteSettings::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SiteSettings::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum SiteSettings {
    Table,
    Id,
    SiteName,
    LogoUrl,
    PrimaryColor,
    Address,
    Phone,
    Email,
    FacebookUrl,
    InstagramUrl,
    UpdatedAt,
}
