use sea_orm::{
    ActiveModelTrait, ActiveValue::{NotSet, Unchanged}, ColumnTrait, EntityTrait, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set, TransactionTrait,
};
use tracing::debug;

use super::Catalog;
use crate::{
    entities::{companies, movie_companies, movies, operation_logs::AuditedTable},
    error::AppResult,
    models::{CompanyDetails, CompanyFilm, CompanyInput},
};

impl Catalog {
    pub async fn fetch_all_companies(&self) -> AppResult<Vec<companies::Model>> {
        Ok(companies::Entity::find()
            .order_by_asc(companies::Column::CompanyId)
            .all(&self.db)
            .await?)
    }

    pub async fn insert_company(&self, input: CompanyInput) -> AppResult<companies::Model> {
        let input = input.validated()?;
        let company = companies::ActiveModel {
            company_id: NotSet,
            name: Set(input.name),
            country: Set(input.country),
            founded_year: Set(input.founded_year),
            industry: Set(input.industry),
            revenue: Set(input.revenue),
            description: Set(input.description),
        }
        .insert(&self.db)
        .await?;

        debug!(id = company.company_id, name = %company.name, "inserted company");
        Ok(company)
    }

    pub async fn update_company(
        &self,
        company_id: i32,
        input: CompanyInput,
    ) -> AppResult<companies::Model> {
        let input = input.validated()?;
        let row = companies::ActiveModel {
            company_id: Unchanged(company_id),
            name: Set(input.name),
            country: Set(input.country),
            founded_year: Set(input.founded_year),
            industry: Set(input.industry),
            revenue: Set(input.revenue),
            description: Set(input.description),
        };
        self.update_logged(AuditedTable::Companies, company_id, row).await
    }

    pub async fn delete_company(&self, company_id: i32) -> AppResult<()> {
        self.delete_logged(
            AuditedTable::Companies,
            company_id,
            companies::Entity::delete_by_id(company_id),
        )
        .await
    }

    pub async fn company_details(&self, company_id: i32) -> AppResult<Option<CompanyDetails>> {
        let txn = self.db.begin().await?;

        let Some(company) = companies::Entity::find_by_id(company_id).one(&txn).await? else {
            return Ok(None);
        };

        let movies = movie_companies::Entity::find()
            .select_only()
            .column_as(movies::Column::MovieId, "movie_id")
            .column_as(movies::Column::Title, "title")
            .column_as(movies::Column::ReleaseYear, "release_year")
            .column_as(movie_companies::Column::RelationshipType, "relationship_type")
            .join(JoinType::InnerJoin, movie_companies::Relation::Movie.def())
            .filter(movie_companies::Column::CompanyId.eq(company_id))
            .order_by_desc(movies::Column::ReleaseYear)
            .order_by_asc(movies::Column::Title)
            .into_model::<CompanyFilm>()
            .all(&txn)
            .await?;

        txn.commit().await?;

        Ok(Some(CompanyDetails { basic_info: company, movies }))
    }
}
