use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// How a company took part in a movie.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "lowercase")]
pub enum RelationshipType {
    #[sea_orm(string_value = "production")]
    Production,
    #[sea_orm(string_value = "distribution")]
    Distribution,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "Movie_Companies")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub movie_company_id: i32,
    pub movie_id: i32,
    pub company_id: i32,
    pub relationship_type: RelationshipType,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::movies::Entity",
        from = "Column::MovieId",
        to = "super::movies::Column::MovieId",
        on_delete = "Cascade"
    )]
    Movie,
    #[sea_orm(
        belongs_to = "super::companies::Entity",
        from = "Column::CompanyId",
        to = "super::companies::Column::CompanyId",
        on_delete = "Cascade"
    )]
    Company,
}

impl Related<super::movies::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Movie.def()
    }
}

impl Related<super::companies::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Company.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
