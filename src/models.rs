use sea_orm::{DerivePartialModel, FromQueryResult};
use serde::{Deserialize, Serialize};

use crate::{
    entities::{
        awards, companies,
        movie_companies::RelationshipType,
        movies, people,
    },
    error::{AppError, AppResult},
};

fn required(field: &str, value: &str) -> AppResult<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::validation(format!("{field} is required")));
    }
    Ok(value.to_string())
}

/// Full set of mutable movie fields. Used for both insert and update; an
/// update overwrites every column, so unchanged values must be re-sent.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct MovieInput {
    pub title: String,
    pub release_year: Option<i32>,
    pub director: Option<String>,
    pub genre: Option<String>,
    pub box_office: Option<f64>,
    pub description: Option<String>,
}

impl MovieInput {
    pub(crate) fn validated(mut self) -> AppResult<Self> {
        self.title = required("title", &self.title)?;
        Ok(self)
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct PersonInput {
    pub name: String,
    pub country: String,
    pub masterpiece: Option<String>,
    pub brief_intro: Option<String>,
}

impl PersonInput {
    pub(crate) fn validated(mut self) -> AppResult<Self> {
        self.name = required("name", &self.name)?;
        self.country = required("country", &self.country)?;
        Ok(self)
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct CompanyInput {
    pub name: String,
    pub country: Option<String>,
    pub founded_year: Option<i32>,
    pub industry: Option<String>,
    pub revenue: Option<f64>,
    pub description: Option<String>,
}

impl CompanyInput {
    pub(crate) fn validated(mut self) -> AppResult<Self> {
        self.name = required("name", &self.name)?;
        Ok(self)
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct AwardInput {
    pub name: String,
    pub category: Option<String>,
    pub year: Option<i32>,
    pub description: Option<String>,
}

impl AwardInput {
    pub(crate) fn validated(mut self) -> AppResult<Self> {
        self.name = required("name", &self.name)?;
        Ok(self)
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct AwardLink {
    pub award_id: i32,
    pub award_year: i32,
}

#[derive(Clone, Debug, Deserialize)]
pub struct CompanyLink {
    pub company_id: i32,
    pub relationship_type: RelationshipType,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ActorLink {
    pub people_id: i32,
    pub role: Option<String>,
    #[serde(default)]
    pub is_protagonist: bool,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct SettingInput {
    pub value: Option<String>,
    pub setting_type: Option<String>,
    pub description: Option<String>,
}

pub(crate) fn setting_name(name: &str) -> AppResult<String> {
    required("setting_name", name)
}

// Summary projections

#[derive(Clone, Debug, Serialize, DerivePartialModel, FromQueryResult)]
#[sea_orm(entity = "movies::Entity")]
pub struct MovieSummary {
    pub movie_id: i32,
    pub title: String,
    pub release_year: Option<i32>,
    pub director: Option<String>,
    pub genre: Option<String>,
}

#[derive(Clone, Debug, Serialize, DerivePartialModel, FromQueryResult)]
#[sea_orm(entity = "people::Entity")]
pub struct PersonSummary {
    pub people_id: i32,
    pub name: String,
    pub country: String,
    pub masterpiece: Option<String>,
}

#[derive(Clone, Debug, Serialize, DerivePartialModel, FromQueryResult)]
#[sea_orm(entity = "companies::Entity")]
pub struct CompanySummary {
    pub company_id: i32,
    pub name: String,
    pub country: Option<String>,
    pub industry: Option<String>,
    pub founded_year: Option<i32>,
}

#[derive(Clone, Debug, Serialize, DerivePartialModel, FromQueryResult)]
#[sea_orm(entity = "awards::Entity")]
pub struct AwardSummary {
    pub award_id: i32,
    pub name: String,
    pub category: Option<String>,
    pub year: Option<i32>,
}

// Join projections

#[derive(Clone, Debug, Serialize, FromQueryResult)]
pub struct PersonAwardRow {
    pub people_id: i32,
    pub person_name: String,
    pub award_name: String,
    pub award_category: Option<String>,
    pub award_year: i32,
}

#[derive(Clone, Debug, Serialize, FromQueryResult)]
pub struct MovieAwardRow {
    pub movie_id: i32,
    pub movie_title: String,
    pub award_name: String,
    pub award_category: Option<String>,
    pub award_year: i32,
}

#[derive(Clone, Debug, Serialize, FromQueryResult)]
pub struct MovieCompanyRow {
    pub movie_id: i32,
    pub movie_title: String,
    pub company_name: String,
    pub relationship_type: RelationshipType,
}

#[derive(Clone, Debug, Serialize, FromQueryResult)]
pub struct MovieActorRow {
    pub movie_id: i32,
    pub movie_title: String,
    pub people_id: i32,
    pub actor_name: String,
    pub role: Option<String>,
    pub is_protagonist: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PersonAwardsSummary {
    pub people_id: i32,
    pub name: String,
    /// `"<award> (<year>)"` entries, newest first, joined with `"; "`.
    pub awards_list: Option<String>,
    pub total_awards: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MovieAwardsSummary {
    pub movie_id: i32,
    pub title: String,
    pub awards_list: Option<String>,
    pub total_awards: i64,
}

// Detail aggregates

#[derive(Clone, Debug, Serialize, FromQueryResult)]
pub struct AwardCredit {
    pub award_name: String,
    pub award_category: Option<String>,
    pub award_year: i32,
}

#[derive(Clone, Debug, Serialize, FromQueryResult)]
pub struct CastMember {
    pub name: String,
    pub role: Option<String>,
    pub is_protagonist: bool,
}

#[derive(Clone, Debug, Serialize, FromQueryResult)]
pub struct CompanyCredit {
    pub name: String,
    pub relationship_type: RelationshipType,
}

#[derive(Clone, Debug, Serialize, FromQueryResult)]
pub struct Appearance {
    pub title: String,
    pub role: Option<String>,
    pub is_protagonist: bool,
}

#[derive(Clone, Debug, Serialize, FromQueryResult)]
pub struct CompanyFilm {
    pub movie_id: i32,
    pub title: String,
    pub release_year: Option<i32>,
    pub relationship_type: RelationshipType,
}

#[derive(Clone, Debug, Serialize, FromQueryResult)]
pub struct AwardedMovie {
    pub movie_id: i32,
    pub title: String,
    pub award_year: i32,
}

#[derive(Clone, Debug, Serialize, FromQueryResult)]
pub struct AwardedPerson {
    pub people_id: i32,
    pub name: String,
    pub award_year: i32,
}

#[derive(Clone, Debug, Serialize)]
pub struct MovieDetails {
    pub basic_info: movies::Model,
    pub awards: Vec<AwardCredit>,
    pub actors: Vec<CastMember>,
    pub companies: Vec<CompanyCredit>,
}

#[derive(Clone, Debug, Serialize)]
pub struct PersonDetails {
    pub basic_info: people::Model,
    pub awards: Vec<AwardCredit>,
    pub movies: Vec<Appearance>,
}

#[derive(Clone, Debug, Serialize)]
pub struct CompanyDetails {
    pub basic_info: companies::Model,
    pub movies: Vec<CompanyFilm>,
}

#[derive(Clone, Debug, Serialize)]
pub struct AwardDetails {
    pub basic_info: awards::Model,
    pub movies: Vec<AwardedMovie>,
    pub people: Vec<AwardedPerson>,
}
