use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, Set};
use tracing::debug;

use super::Catalog;
use crate::{
    entities::{movie_actors, movie_awards, movie_companies, people_awards},
    error::AppResult,
    models::{ActorLink, AwardLink, CompanyLink},
};

// Join rows are not audited and carry no uniqueness constraint: the same
// award in the same year may be recorded more than once.
impl Catalog {
    pub async fn add_person_award(
        &self,
        people_id: i32,
        link: AwardLink,
    ) -> AppResult<people_awards::Model> {
        let row = people_awards::ActiveModel {
            people_award_id: NotSet,
            people_id: Set(people_id),
            award_id: Set(link.award_id),
            award_year: Set(link.award_year),
        }
        .insert(&self.db)
        .await?;

        debug!(people_id, award_id = row.award_id, year = row.award_year, "linked person award");
        Ok(row)
    }

    pub async fn add_movie_award(
        &self,
        movie_id: i32,
        link: AwardLink,
    ) -> AppResult<movie_awards::Model> {
        let row = movie_awards::ActiveModel {
            movie_award_id: NotSet,
            movie_id: Set(movie_id),
            award_id: Set(link.award_id),
            award_year: Set(link.award_year),
        }
        .insert(&self.db)
        .await?;

        debug!(movie_id, award_id = row.award_id, year = row.award_year, "linked movie award");
        Ok(row)
    }

    pub async fn add_movie_company(
        &self,
        movie_id: i32,
        link: CompanyLink,
    ) -> AppResult<movie_companies::Model> {
        let row = movie_companies::ActiveModel {
            movie_company_id: NotSet,
            movie_id: Set(movie_id),
            company_id: Set(link.company_id),
            relationship_type: Set(link.relationship_type),
        }
        .insert(&self.db)
        .await?;

        debug!(movie_id, company_id = row.company_id, kind = ?row.relationship_type, "linked company");
        Ok(row)
    }

    pub async fn add_movie_actor(
        &self,
        movie_id: i32,
        link: ActorLink,
    ) -> AppResult<movie_actors::Model> {
        let row = movie_actors::ActiveModel {
            movie_actor_id: NotSet,
            movie_id: Set(movie_id),
            people_id: Set(link.people_id),
            role: Set(link.role),
            is_protagonist: Set(link.is_protagonist),
        }
        .insert(&self.db)
        .await?;

        debug!(movie_id, people_id = row.people_id, "linked actor");
        Ok(row)
    }
}
