use sea_orm::{
    ActiveModelTrait, ActiveValue::{NotSet, Unchanged}, ColumnTrait, EntityTrait, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set, TransactionTrait,
};
use tracing::debug;

use super::Catalog;
use crate::{
    entities::{awards, movie_actors, movies, operation_logs::AuditedTable, people, people_awards},
    error::AppResult,
    models::{Appearance, AwardCredit, PersonDetails, PersonInput},
};

impl Catalog {
    pub async fn fetch_all_people(&self) -> AppResult<Vec<people::Model>> {
        Ok(people::Entity::find().order_by_asc(people::Column::PeopleId).all(&self.db).await?)
    }

    pub async fn insert_person(&self, input: PersonInput) -> AppResult<people::Model> {
        let input = input.validated()?;
        let person = people::ActiveModel {
            people_id: NotSet,
            name: Set(input.name),
            country: Set(input.country),
            masterpiece: Set(input.masterpiece),
            brief_intro: Set(input.brief_intro),
        }
        .insert(&self.db)
        .await?;

        debug!(id = person.people_id, name = %person.name, "inserted person");
        Ok(person)
    }

    pub async fn update_person(&self, people_id: i32, input: PersonInput) -> AppResult<people::Model> {
        let input = input.validated()?;
        let row = people::ActiveModel {
            people_id: Unchanged(people_id),
            name: Set(input.name),
            country: Set(input.country),
            masterpiece: Set(input.masterpiece),
            brief_intro: Set(input.brief_intro),
        };
        self.update_logged(AuditedTable::People, people_id, row).await
    }

    pub async fn delete_person(&self, people_id: i32) -> AppResult<()> {
        self.delete_logged(AuditedTable::People, people_id, people::Entity::delete_by_id(people_id))
            .await
    }

    /// Person row with awards (newest first) and the movies they acted in
    /// (newest release first).
    pub async fn person_details(&self, people_id: i32) -> AppResult<Option<PersonDetails>> {
        let txn = self.db.begin().await?;

        let Some(person) = people::Entity::find_by_id(people_id).one(&txn).await? else {
            return Ok(None);
        };

        let awards = people_awards::Entity::find()
            .select_only()
            .column_as(awards::Column::Name, "award_name")
            .column_as(awards::Column::Category, "award_category")
            .column_as(people_awards::Column::AwardYear, "award_year")
            .join(JoinType::InnerJoin, people_awards::Relation::Award.def())
            .filter(people_awards::Column::PeopleId.eq(people_id))
            .order_by_desc(people_awards::Column::AwardYear)
            .into_model::<AwardCredit>()
            .all(&txn)
            .await?;

        let movies = movie_actors::Entity::find()
            .select_only()
            .column_as(movies::Column::Title, "title")
            .column_as(movie_actors::Column::Role, "role")
            .column_as(movie_actors::Column::IsProtagonist, "is_protagonist")
            .join(JoinType::InnerJoin, movie_actors::Relation::Movie.def())
            .filter(movie_actors::Column::PeopleId.eq(people_id))
            .order_by_desc(movies::Column::ReleaseYear)
            .order_by_asc(movies::Column::Title)
            .into_model::<Appearance>()
            .all(&txn)
            .await?;

        txn.commit().await?;

        Ok(Some(PersonDetails { basic_info: person, awards, movies }))
    }
}
