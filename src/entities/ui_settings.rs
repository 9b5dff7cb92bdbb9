use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "UI_Settings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub setting_id: i32,
    #[sea_orm(unique)]
    pub setting_name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub setting_value: Option<String>,
    pub setting_type: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
