use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};
use serde::Serialize;

use crate::{
    AppState,
    audit::LogEntry,
    entities::{
        awards, companies, movie_actors, movie_awards, movie_companies, movies,
        operation_logs::AuditedTable, people, people_awards, ui_settings,
    },
    error::{AppError, AppResult},
    models::{
        ActorLink, AwardDetails, AwardInput, AwardLink, AwardSummary, CompanyDetails, CompanyInput,
        CompanyLink, CompanySummary, MovieActorRow, MovieAwardsSummary, MovieDetails, MovieInput,
        MovieSummary, PersonAwardsSummary, PersonDetails, PersonInput, PersonSummary,
        SettingInput,
    },
};

type Shared = State<Arc<AppState>>;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/movies", get(list_movies).post(create_movie))
        .route("/movies/summary", get(movies_summary))
        .route("/movies/awards-summary", get(movies_awards_summary))
        .route("/movies/{id}", get(movie_details).put(update_movie).delete(delete_movie))
        .route("/movies/{id}/awards-summary", get(movie_awards_summary))
        .route("/movies/{id}/awards", post(add_movie_award))
        .route("/movies/{id}/companies", post(add_movie_company))
        .route("/movies/{id}/actors", post(add_movie_actor))
        .route("/people", get(list_people).post(create_person))
        .route("/people/summary", get(people_summary))
        .route("/people/awards-summary", get(people_awards_summary))
        .route("/people/{id}", get(person_details).put(update_person).delete(delete_person))
        .route("/people/{id}/awards", post(add_person_award))
        .route("/people/{id}/movies", get(actor_movies))
        .route("/companies", get(list_companies).post(create_company))
        .route("/companies/summary", get(companies_summary))
        .route(
            "/companies/{id}",
            get(company_details).put(update_company).delete(delete_company),
        )
        .route("/awards", get(list_awards).post(create_award))
        .route("/awards/summary", get(awards_summary))
        .route("/awards/{id}", get(award_details).put(update_award).delete(delete_award))
        .route("/logs", get(operation_logs))
        .route("/settings", get(list_settings))
        .route("/settings/{name}", get(get_setting).put(save_setting).delete(delete_setting))
        .with_state(state)
}

fn created<T: Serialize>(value: T) -> (StatusCode, Json<T>) {
    (StatusCode::CREATED, Json(value))
}

fn found<T>(value: Option<T>, table: AuditedTable, id: i32) -> AppResult<Json<T>> {
    value.map(Json).ok_or(AppError::NotFound { table, id })
}

// Movies

async fn list_movies(State(state): Shared) -> AppResult<Json<Vec<movies::Model>>> {
    Ok(Json(state.catalog.fetch_all_movies().await?))
}

async fn create_movie(
    State(state): Shared,
    Json(input): Json<MovieInput>,
) -> AppResult<(StatusCode, Json<movies::Model>)> {
    Ok(created(state.catalog.insert_movie(input).await?))
}

async fn movies_summary(State(state): Shared) -> AppResult<Json<Vec<MovieSummary>>> {
    Ok(Json(state.catalog.movies_summary().await?))
}

async fn movies_awards_summary(State(state): Shared) -> AppResult<Json<Vec<MovieAwardsSummary>>> {
    Ok(Json(state.catalog.movie_awards_summary(None).await?))
}

async fn movie_awards_summary(
    State(state): Shared,
    Path(id): Path<i32>,
) -> AppResult<Json<MovieAwardsSummary>> {
    let row = state.catalog.movie_awards_summary(Some(id)).await?.pop();
    found(row, AuditedTable::Movies, id)
}

async fn movie_details(
    State(state): Shared,
    Path(id): Path<i32>,
) -> AppResult<Json<MovieDetails>> {
    found(state.catalog.movie_details(id).await?, AuditedTable::Movies, id)
}

async fn update_movie(
    State(state): Shared,
    Path(id): Path<i32>,
    Json(input): Json<MovieInput>,
) -> AppResult<Json<movies::Model>> {
    Ok(Json(state.catalog.update_movie(id, input).await?))
}

async fn delete_movie(State(state): Shared, Path(id): Path<i32>) -> AppResult<StatusCode> {
    state.catalog.delete_movie(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn add_movie_award(
    State(state): Shared,
    Path(id): Path<i32>,
    Json(link): Json<AwardLink>,
) -> AppResult<(StatusCode, Json<movie_awards::Model>)> {
    Ok(created(state.catalog.add_movie_award(id, link).await?))
}

async fn add_movie_company(
    State(state): Shared,
    Path(id): Path<i32>,
    Json(link): Json<CompanyLink>,
) -> AppResult<(StatusCode, Json<movie_companies::Model>)> {
    Ok(created(state.catalog.add_movie_company(id, link).await?))
}

async fn add_movie_actor(
    State(state): Shared,
    Path(id): Path<i32>,
    Json(link): Json<ActorLink>,
) -> AppResult<(StatusCode, Json<movie_actors::Model>)> {
    Ok(created(state.catalog.add_movie_actor(id, link).await?))
}

// People

async fn list_people(State(state): Shared) -> AppResult<Json<Vec<people::Model>>> {
    Ok(Json(state.catalog.fetch_all_people().await?))
}

async fn create_person(
    State(state): Shared,
    Json(input): Json<PersonInput>,
) -> AppResult<(StatusCode, Json<people::Model>)> {
    Ok(created(state.catalog.insert_person(input).await?))
}

async fn people_summary(State(state): Shared) -> AppResult<Json<Vec<PersonSummary>>> {
    Ok(Json(state.catalog.people_summary().await?))
}

async fn people_awards_summary(
    State(state): Shared,
) -> AppResult<Json<Vec<PersonAwardsSummary>>> {
    Ok(Json(state.catalog.person_awards_summary(None).await?))
}

async fn person_details(
    State(state): Shared,
    Path(id): Path<i32>,
) -> AppResult<Json<PersonDetails>> {
    found(state.catalog.person_details(id).await?, AuditedTable::People, id)
}

async fn update_person(
    State(state): Shared,
    Path(id): Path<i32>,
    Json(input): Json<PersonInput>,
) -> AppResult<Json<people::Model>> {
    Ok(Json(state.catalog.update_person(id, input).await?))
}

async fn delete_person(State(state): Shared, Path(id): Path<i32>) -> AppResult<StatusCode> {
    state.catalog.delete_person(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn add_person_award(
    State(state): Shared,
    Path(id): Path<i32>,
    Json(link): Json<AwardLink>,
) -> AppResult<(StatusCode, Json<people_awards::Model>)> {
    Ok(created(state.catalog.add_person_award(id, link).await?))
}

async fn actor_movies(
    State(state): Shared,
    Path(id): Path<i32>,
) -> AppResult<Json<Vec<MovieActorRow>>> {
    Ok(Json(state.catalog.actor_movies(id).await?))
}

// Companies

async fn list_companies(State(state): Shared) -> AppResult<Json<Vec<companies::Model>>> {
    Ok(Json(state.catalog.fetch_all_companies().await?))
}

async fn create_company(
    State(state): Shared,
    Json(input): Json<CompanyInput>,
) -> AppResult<(StatusCode, Json<companies::Model>)> {
    Ok(created(state.catalog.insert_company(input).await?))
}

async fn companies_summary(State(state): Shared) -> AppResult<Json<Vec<CompanySummary>>> {
    Ok(Json(state.catalog.companies_summary().await?))
}

async fn company_details(
    State(state): Shared,
    Path(id): Path<i32>,
) -> AppResult<Json<CompanyDetails>> {
    found(state.catalog.company_details(id).await?, AuditedTable::Companies, id)
}

async fn update_company(
    State(state): Shared,
    Path(id): Path<i32>,
    Json(input): Json<CompanyInput>,
) -> AppResult<Json<companies::Model>> {
    Ok(Json(state.catalog.update_company(id, input).await?))
}

async fn delete_company(State(state): Shared, Path(id): Path<i32>) -> AppResult<StatusCode> {
    state.catalog.delete_company(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// Awards

async fn list_awards(State(state): Shared) -> AppResult<Json<Vec<awards::Model>>> {
    Ok(Json(state.catalog.fetch_all_awards().await?))
}

async fn create_award(
    State(state): Shared,
    Json(input): Json<AwardInput>,
) -> AppResult<(StatusCode, Json<awards::Model>)> {
    Ok(created(state.catalog.insert_award(input).await?))
}

async fn awards_summary(State(state): Shared) -> AppResult<Json<Vec<AwardSummary>>> {
    Ok(Json(state.catalog.awards_summary().await?))
}

async fn award_details(
    State(state): Shared,
    Path(id): Path<i32>,
) -> AppResult<Json<AwardDetails>> {
    found(state.catalog.award_details(id).await?, AuditedTable::Awards, id)
}

async fn update_award(
    State(state): Shared,
    Path(id): Path<i32>,
    Json(input): Json<AwardInput>,
) -> AppResult<Json<awards::Model>> {
    Ok(Json(state.catalog.update_award(id, input).await?))
}

async fn delete_award(State(state): Shared, Path(id): Path<i32>) -> AppResult<StatusCode> {
    state.catalog.delete_award(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// Audit log and UI settings

async fn operation_logs(State(state): Shared) -> AppResult<Json<Vec<LogEntry>>> {
    Ok(Json(state.catalog.get_operation_logs().await?))
}

async fn list_settings(State(state): Shared) -> AppResult<Json<Vec<ui_settings::Model>>> {
    Ok(Json(state.catalog.get_all_ui_settings().await?))
}

async fn get_setting(
    State(state): Shared,
    Path(name): Path<String>,
) -> AppResult<Json<ui_settings::Model>> {
    let setting = state.catalog.get_ui_setting(&name).await?;
    setting.map(Json).ok_or(AppError::SettingNotFound(name))
}

async fn save_setting(
    State(state): Shared,
    Path(name): Path<String>,
    Json(input): Json<SettingInput>,
) -> AppResult<Json<ui_settings::Model>> {
    Ok(Json(state.catalog.save_ui_setting(&name, input).await?))
}

async fn delete_setting(State(state): Shared, Path(name): Path<String>) -> AppResult<StatusCode> {
    if state.catalog.delete_ui_setting(&name).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::SettingNotFound(name))
    }
}
