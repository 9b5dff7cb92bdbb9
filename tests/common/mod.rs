#![allow(dead_code)]

use cinelog::{
    catalog::Catalog,
    db,
    entities::operation_logs::{AuditedTable, OperationType},
    models::{AwardInput, CompanyInput, MovieInput, PersonInput},
};

/// Fresh schema in a private in-memory database. One pooled connection, so
/// every call sees the same database.
pub async fn catalog() -> Catalog {
    let db = db::connect_and_migrate("sqlite::memory:", 1).await.expect("in-memory database");
    Catalog::new(db)
}

pub async fn log_count(
    catalog: &Catalog,
    kind: OperationType,
    table: AuditedTable,
    record_id: i32,
) -> usize {
    catalog
        .get_operation_logs()
        .await
        .unwrap()
        .into_iter()
        .filter(|e| e.operation_type == kind && e.table_name == table && e.record_id == record_id)
        .count()
}

pub async fn total_logs(catalog: &Catalog) -> usize {
    catalog.get_operation_logs().await.unwrap().len()
}

pub fn inception() -> MovieInput {
    MovieInput {
        title: "Inception".into(),
        release_year: Some(2010),
        director: Some("Nolan".into()),
        genre: Some("Sci-Fi".into()),
        box_office: Some(829_000_000.0),
        description: Some("A thief who steals corporate secrets through dreams.".into()),
    }
}

pub fn movie(title: &str, year: i32) -> MovieInput {
    MovieInput { title: title.into(), release_year: Some(year), ..Default::default() }
}

pub fn person(name: &str) -> PersonInput {
    PersonInput { name: name.into(), country: "UK".into(), ..Default::default() }
}

pub fn company(name: &str) -> CompanyInput {
    CompanyInput { name: name.into(), country: Some("USA".into()), ..Default::default() }
}

pub fn award(name: &str) -> AwardInput {
    AwardInput { name: name.into(), category: Some("Film".into()), ..Default::default() }
}
