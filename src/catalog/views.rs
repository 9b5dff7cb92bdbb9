//! Read models computed on demand from the base tables.

use std::collections::HashMap;

use sea_orm::{
    ColumnTrait, EntityTrait, FromQueryResult, JoinType, QueryFilter, QueryOrder, QuerySelect,
    QueryTrait, RelationTrait, TransactionTrait,
};

use super::Catalog;
use crate::{
    entities::{
        awards, companies, movie_actors, movie_awards, movie_companies, movies, people,
        people_awards,
    },
    error::AppResult,
    models::{
        AwardSummary, CompanySummary, MovieActorRow, MovieAwardRow, MovieAwardsSummary,
        MovieCompanyRow, MovieSummary, PersonAwardRow, PersonAwardsSummary, PersonSummary,
    },
};

const AWARDS_SEPARATOR: &str = "; ";

#[derive(Debug, FromQueryResult)]
struct AwardEntry {
    entity_id: i32,
    award_name: String,
    award_year: i32,
}

impl Catalog {
    pub async fn movies_summary(&self) -> AppResult<Vec<MovieSummary>> {
        Ok(movies::Entity::find()
            .order_by_asc(movies::Column::MovieId)
            .into_partial_model::<MovieSummary>()
            .all(&self.db)
            .await?)
    }

    pub async fn people_summary(&self) -> AppResult<Vec<PersonSummary>> {
        Ok(people::Entity::find()
            .order_by_asc(people::Column::PeopleId)
            .into_partial_model::<PersonSummary>()
            .all(&self.db)
            .await?)
    }

    pub async fn companies_summary(&self) -> AppResult<Vec<CompanySummary>> {
        Ok(companies::Entity::find()
            .order_by_asc(companies::Column::CompanyId)
            .into_partial_model::<CompanySummary>()
            .all(&self.db)
            .await?)
    }

    pub async fn awards_summary(&self) -> AppResult<Vec<AwardSummary>> {
        Ok(awards::Entity::find()
            .order_by_asc(awards::Column::AwardId)
            .into_partial_model::<AwardSummary>()
            .all(&self.db)
            .await?)
    }

    pub async fn person_awards(&self, people_id: i32) -> AppResult<Vec<PersonAwardRow>> {
        Ok(people_awards::Entity::find()
            .select_only()
            .column_as(people::Column::PeopleId, "people_id")
            .column_as(people::Column::Name, "person_name")
            .column_as(awards::Column::Name, "award_name")
            .column_as(awards::Column::Category, "award_category")
            .column_as(people_awards::Column::AwardYear, "award_year")
            .join(JoinType::InnerJoin, people_awards::Relation::Person.def())
            .join(JoinType::InnerJoin, people_awards::Relation::Award.def())
            .filter(people_awards::Column::PeopleId.eq(people_id))
            .order_by_desc(people_awards::Column::AwardYear)
            .into_model::<PersonAwardRow>()
            .all(&self.db)
            .await?)
    }

    pub async fn movie_awards(&self, movie_id: i32) -> AppResult<Vec<MovieAwardRow>> {
        Ok(movie_awards::Entity::find()
            .select_only()
            .column_as(movies::Column::MovieId, "movie_id")
            .column_as(movies::Column::Title, "movie_title")
            .column_as(awards::Column::Name, "award_name")
            .column_as(awards::Column::Category, "award_category")
            .column_as(movie_awards::Column::AwardYear, "award_year")
            .join(JoinType::InnerJoin, movie_awards::Relation::Movie.def())
            .join(JoinType::InnerJoin, movie_awards::Relation::Award.def())
            .filter(movie_awards::Column::MovieId.eq(movie_id))
            .order_by_desc(movie_awards::Column::AwardYear)
            .into_model::<MovieAwardRow>()
            .all(&self.db)
            .await?)
    }

    pub async fn movie_companies(&self, movie_id: i32) -> AppResult<Vec<MovieCompanyRow>> {
        Ok(movie_companies::Entity::find()
            .select_only()
            .column_as(movies::Column::MovieId, "movie_id")
            .column_as(movies::Column::Title, "movie_title")
            .column_as(companies::Column::Name, "company_name")
            .column_as(movie_companies::Column::RelationshipType, "relationship_type")
            .join(JoinType::InnerJoin, movie_companies::Relation::Movie.def())
            .join(JoinType::InnerJoin, movie_companies::Relation::Company.def())
            .filter(movie_companies::Column::MovieId.eq(movie_id))
            .order_by_asc(movie_companies::Column::MovieCompanyId)
            .into_model::<MovieCompanyRow>()
            .all(&self.db)
            .await?)
    }

    /// Cast of a movie, protagonists first, then by actor name.
    pub async fn movie_actors(&self, movie_id: i32) -> AppResult<Vec<MovieActorRow>> {
        Ok(actor_rows()
            .filter(movie_actors::Column::MovieId.eq(movie_id))
            .order_by_desc(movie_actors::Column::IsProtagonist)
            .order_by_asc(people::Column::Name)
            .into_model::<MovieActorRow>()
            .all(&self.db)
            .await?)
    }

    /// Movies a person acted in, ordered by title.
    pub async fn actor_movies(&self, people_id: i32) -> AppResult<Vec<MovieActorRow>> {
        Ok(actor_rows()
            .filter(movie_actors::Column::PeopleId.eq(people_id))
            .order_by_asc(movies::Column::Title)
            .into_model::<MovieActorRow>()
            .all(&self.db)
            .await?)
    }

    /// One row per person (or just `people_id`), including people with no
    /// awards. Without an id the rows are ordered by award count, highest
    /// first.
    pub async fn person_awards_summary(
        &self,
        people_id: Option<i32>,
    ) -> AppResult<Vec<PersonAwardsSummary>> {
        let txn = self.db.begin().await?;

        let people = people::Entity::find()
            .apply_if(people_id, |q, id| q.filter(people::Column::PeopleId.eq(id)))
            .order_by_asc(people::Column::PeopleId)
            .all(&txn)
            .await?;

        let entries = people_awards::Entity::find()
            .select_only()
            .column_as(people_awards::Column::PeopleId, "entity_id")
            .column_as(awards::Column::Name, "award_name")
            .column_as(people_awards::Column::AwardYear, "award_year")
            .join(JoinType::InnerJoin, people_awards::Relation::Award.def())
            .apply_if(people_id, |q, id| q.filter(people_awards::Column::PeopleId.eq(id)))
            .order_by_desc(people_awards::Column::AwardYear)
            .order_by_asc(people_awards::Column::PeopleAwardId)
            .into_model::<AwardEntry>()
            .all(&txn)
            .await?;

        txn.commit().await?;

        let mut grouped = group_entries(entries);
        let mut rows: Vec<PersonAwardsSummary> = people
            .into_iter()
            .map(|p| {
                let list = grouped.remove(&p.people_id).unwrap_or_default();
                PersonAwardsSummary {
                    people_id: p.people_id,
                    name: p.name,
                    total_awards: list.len() as i64,
                    awards_list: join_awards(&list),
                }
            })
            .collect();

        if people_id.is_none() {
            rows.sort_by(|a, b| b.total_awards.cmp(&a.total_awards));
        }
        Ok(rows)
    }

    /// Same shape as [`Catalog::person_awards_summary`], for movies.
    pub async fn movie_awards_summary(
        &self,
        movie_id: Option<i32>,
    ) -> AppResult<Vec<MovieAwardsSummary>> {
        let txn = self.db.begin().await?;

        let movies = movies::Entity::find()
            .apply_if(movie_id, |q, id| q.filter(movies::Column::MovieId.eq(id)))
            .order_by_asc(movies::Column::MovieId)
            .all(&txn)
            .await?;

        let entries = movie_awards::Entity::find()
            .select_only()
            .column_as(movie_awards::Column::MovieId, "entity_id")
            .column_as(awards::Column::Name, "award_name")
            .column_as(movie_awards::Column::AwardYear, "award_year")
            .join(JoinType::InnerJoin, movie_awards::Relation::Award.def())
            .apply_if(movie_id, |q, id| q.filter(movie_awards::Column::MovieId.eq(id)))
            .order_by_desc(movie_awards::Column::AwardYear)
            .order_by_asc(movie_awards::Column::MovieAwardId)
            .into_model::<AwardEntry>()
            .all(&txn)
            .await?;

        txn.commit().await?;

        let mut grouped = group_entries(entries);
        let mut rows: Vec<MovieAwardsSummary> = movies
            .into_iter()
            .map(|m| {
                let list = grouped.remove(&m.movie_id).unwrap_or_default();
                MovieAwardsSummary {
                    movie_id: m.movie_id,
                    title: m.title,
                    total_awards: list.len() as i64,
                    awards_list: join_awards(&list),
                }
            })
            .collect();

        if movie_id.is_none() {
            rows.sort_by(|a, b| b.total_awards.cmp(&a.total_awards));
        }
        Ok(rows)
    }
}

fn actor_rows() -> sea_orm::Select<movie_actors::Entity> {
    movie_actors::Entity::find()
        .select_only()
        .column_as(movies::Column::MovieId, "movie_id")
        .column_as(movies::Column::Title, "movie_title")
        .column_as(people::Column::PeopleId, "people_id")
        .column_as(people::Column::Name, "actor_name")
        .column_as(movie_actors::Column::Role, "role")
        .column_as(movie_actors::Column::IsProtagonist, "is_protagonist")
        .join(JoinType::InnerJoin, movie_actors::Relation::Movie.def())
        .join(JoinType::InnerJoin, movie_actors::Relation::Person.def())
}

/// Groups `"<award> (<year>)"` labels by entity, keeping input order.
fn group_entries(entries: Vec<AwardEntry>) -> HashMap<i32, Vec<String>> {
    let mut grouped: HashMap<i32, Vec<String>> = HashMap::new();
    for entry in entries {
        grouped
            .entry(entry.entity_id)
            .or_default()
            .push(format!("{} ({})", entry.award_name, entry.award_year));
    }
    grouped
}

fn join_awards(labels: &[String]) -> Option<String> {
    if labels.is_empty() { None } else { Some(labels.join(AWARDS_SEPARATOR)) }
}
