use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "People")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub people_id: i32,
    pub name: String,
    pub country: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub masterpiece: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub brief_intro: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::people_awards::Entity")]
    PeopleAwards,
    #[sea_orm(has_many = "super::movie_actors::Entity")]
    MovieActors,
}

impl Related<super::people_awards::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PeopleAwards.def()
    }
}

impl Related<super::movie_actors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MovieActors.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
