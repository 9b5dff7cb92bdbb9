use sea_orm::{
    ActiveModelTrait, ActiveValue::{NotSet, Unchanged}, ColumnTrait, EntityTrait, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set, TransactionTrait,
};
use tracing::debug;

use super::Catalog;
use crate::{
    entities::{
        awards, companies, movie_actors, movie_awards, movie_companies, movies,
        operation_logs::AuditedTable, people,
    },
    error::AppResult,
    models::{AwardCredit, CastMember, CompanyCredit, MovieDetails, MovieInput},
};

impl Catalog {
    pub async fn fetch_all_movies(&self) -> AppResult<Vec<movies::Model>> {
        Ok(movies::Entity::find().order_by_asc(movies::Column::MovieId).all(&self.db).await?)
    }

    pub async fn insert_movie(&self, input: MovieInput) -> AppResult<movies::Model> {
        let input = input.validated()?;
        let movie = movies::ActiveModel {
            movie_id: NotSet,
            title: Set(input.title),
            release_year: Set(input.release_year),
            director: Set(input.director),
            genre: Set(input.genre),
            box_office: Set(input.box_office),
            description: Set(input.description),
        }
        .insert(&self.db)
        .await?;

        debug!(id = movie.movie_id, title = %movie.title, "inserted movie");
        Ok(movie)
    }

    pub async fn update_movie(&self, movie_id: i32, input: MovieInput) -> AppResult<movies::Model> {
        let input = input.validated()?;
        let row = movies::ActiveModel {
            movie_id: Unchanged(movie_id),
            title: Set(input.title),
            release_year: Set(input.release_year),
            director: Set(input.director),
            genre: Set(input.genre),
            box_office: Set(input.box_office),
            description: Set(input.description),
        };
        self.update_logged(AuditedTable::Movies, movie_id, row).await
    }

    pub async fn delete_movie(&self, movie_id: i32) -> AppResult<()> {
        self.delete_logged(AuditedTable::Movies, movie_id, movies::Entity::delete_by_id(movie_id))
            .await
    }

    /// Movie row with its awards (newest first), cast (protagonists first,
    /// then by name) and companies. `None` if the id does not exist.
    pub async fn movie_details(&self, movie_id: i32) -> AppResult<Option<MovieDetails>> {
        let txn = self.db.begin().await?;

        let Some(movie) = movies::Entity::find_by_id(movie_id).one(&txn).await? else {
            return Ok(None);
        };

        let awards = movie_awards::Entity::find()
            .select_only()
            .column_as(awards::Column::Name, "award_name")
            .column_as(awards::Column::Category, "award_category")
            .column_as(movie_awards::Column::AwardYear, "award_year")
            .join(JoinType::InnerJoin, movie_awards::Relation::Award.def())
            .filter(movie_awards::Column::MovieId.eq(movie_id))
            .order_by_desc(movie_awards::Column::AwardYear)
            .into_model::<AwardCredit>()
            .all(&txn)
            .await?;

        let actors = movie_actors::Entity::find()
            .select_only()
            .column_as(people::Column::Name, "name")
            .column_as(movie_actors::Column::Role, "role")
            .column_as(movie_actors::Column::IsProtagonist, "is_protagonist")
            .join(JoinType::InnerJoin, movie_actors::Relation::Person.def())
            .filter(movie_actors::Column::MovieId.eq(movie_id))
            .order_by_desc(movie_actors::Column::IsProtagonist)
            .order_by_asc(people::Column::Name)
            .into_model::<CastMember>()
            .all(&txn)
            .await?;

        let companies = movie_companies::Entity::find()
            .select_only()
            .column_as(companies::Column::Name, "name")
            .column_as(movie_companies::Column::RelationshipType, "relationship_type")
            .join(JoinType::InnerJoin, movie_companies::Relation::Company.def())
            .filter(movie_companies::Column::MovieId.eq(movie_id))
            .order_by_asc(movie_companies::Column::MovieCompanyId)
            .into_model::<CompanyCredit>()
            .all(&txn)
            .await?;

        txn.commit().await?;

        Ok(Some(MovieDetails { basic_info: movie, awards, actors, companies }))
    }
}
