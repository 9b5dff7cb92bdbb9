use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "Movies")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub movie_id: i32,
    pub title: String,
    pub release_year: Option<i32>,
    pub director: Option<String>,
    pub genre: Option<String>,
    pub box_office: Option<f64>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::movie_awards::Entity")]
    MovieAwards,
    #[sea_orm(has_many = "super::movie_companies::Entity")]
    MovieCompanies,
    #[sea_orm(has_many = "super::movie_actors::Entity")]
    MovieActors,
}

impl Related<super::movie_awards::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MovieAwards.def()
    }
}

impl Related<super::movie_companies::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MovieCompanies.def()
    }
}

impl Related<super::movie_actors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MovieActors.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
