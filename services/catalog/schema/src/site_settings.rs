use sea_orm::entity::prelude::*;

/// Site-wide branding and contact details. Holds a single row keyed `site_settings`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "site_settings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub site_name: String,
    pub logo_url: String,
    pub primary_color: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub facebook_url: String,
    pub instagram_url: String,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
