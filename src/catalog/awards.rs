use sea_orm::{
    ActiveModelTrait, ActiveValue::{NotSet, Unchanged}, ColumnTrait, EntityTrait, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set, TransactionTrait,
};
use tracing::debug;

use super::Catalog;
use crate::{
    entities::{awards, movie_awards, movies, operation_logs::AuditedTable, people, people_awards},
    error::AppResult,
    models::{AwardDetails, AwardInput, AwardedMovie, AwardedPerson},
};

impl Catalog {
    pub async fn fetch_all_awards(&self) -> AppResult<Vec<awards::Model>> {
        Ok(awards::Entity::find().order_by_asc(awards::Column::AwardId).all(&self.db).await?)
    }

    pub async fn insert_award(&self, input: AwardInput) -> AppResult<awards::Model> {
        let input = input.validated()?;
        let award = awards::ActiveModel {
            award_id: NotSet,
            name: Set(input.name),
            category: Set(input.category),
            year: Set(input.year),
            description: Set(input.description),
        }
        .insert(&self.db)
        .await?;

        debug!(id = award.award_id, name = %award.name, "inserted award");
        Ok(award)
    }

    pub async fn update_award(&self, award_id: i32, input: AwardInput) -> AppResult<awards::Model> {
        let input = input.validated()?;
        let row = awards::ActiveModel {
            award_id: Unchanged(award_id),
            name: Set(input.name),
            category: Set(input.category),
            year: Set(input.year),
            description: Set(input.description),
        };
        self.update_logged(AuditedTable::Awards, award_id, row).await
    }

    pub async fn delete_award(&self, award_id: i32) -> AppResult<()> {
        self.delete_logged(AuditedTable::Awards, award_id, awards::Entity::delete_by_id(award_id))
            .await
    }

    /// Award row with every movie and person that won it, newest first.
    pub async fn award_details(&self, award_id: i32) -> AppResult<Option<AwardDetails>> {
        let txn = self.db.begin().await?;

        let Some(award) = awards::Entity::find_by_id(award_id).one(&txn).await? else {
            return Ok(None);
        };

        let movies = movie_awards::Entity::find()
            .select_only()
            .column_as(movies::Column::MovieId, "movie_id")
            .column_as(movies::Column::Title, "title")
            .column_as(movie_awards::Column::AwardYear, "award_year")
            .join(JoinType::InnerJoin, movie_awards::Relation::Movie.def())
            .filter(movie_awards::Column::AwardId.eq(award_id))
            .order_by_desc(movie_awards::Column::AwardYear)
            .into_model::<AwardedMovie>()
            .all(&txn)
            .await?;

        let people = people_awards::Entity::find()
            .select_only()
            .column_as(people::Column::PeopleId, "people_id")
            .column_as(people::Column::Name, "name")
            .column_as(people_awards::Column::AwardYear, "award_year")
            .join(JoinType::InnerJoin, people_awards::Relation::Person.def())
            .filter(people_awards::Column::AwardId.eq(award_id))
            .order_by_desc(people_awards::Column::AwardYear)
            .into_model::<AwardedPerson>()
            .all(&txn)
            .await?;

        txn.commit().await?;

        Ok(Some(AwardDetails { basic_info: award, movies, people }))
    }
}
