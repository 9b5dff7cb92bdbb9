use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "Companies")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub company_id: i32,
    pub name: String,
    pub country: Option<String>,
    pub founded_year: Option<i32>,
    pub industry: Option<String>,
    pub revenue: Option<f64>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::movie_companies::Entity")]
    MovieCompanies,
}

impl Related<super::movie_companies::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MovieCompanies.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
