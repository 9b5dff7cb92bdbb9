use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "Awards")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub award_id: i32,
    pub name: String,
    pub category: Option<String>,
    pub year: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::people_awards::Entity")]
    PeopleAwards,
    #[sea_orm(has_many = "super::movie_awards::Entity")]
    MovieAwards,
}

impl Related<super::people_awards::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PeopleAwards.def()
    }
}

impl Related<super::movie_awards::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MovieAwards.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
