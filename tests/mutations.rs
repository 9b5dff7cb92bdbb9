mod common;

use cinelog::{
    entities::{
        movie_actors, movie_awards, movie_companies,
        movie_companies::RelationshipType,
        operation_logs::{AuditedTable, OperationType},
        people_awards,
    },
    error::AppError,
    models::{ActorLink, AwardInput, AwardLink, CompanyLink, MovieInput, PersonInput},
};
use common::{award, catalog, company, inception, log_count, movie, person, total_logs};
use sea_orm::{ConnectionTrait, EntityTrait, PaginatorTrait};

async fn join_counts(catalog: &cinelog::catalog::Catalog) -> (u64, u64, u64, u64) {
    let db = catalog.db();
    (
        movie_awards::Entity::find().count(db).await.unwrap(),
        movie_companies::Entity::find().count(db).await.unwrap(),
        movie_actors::Entity::find().count(db).await.unwrap(),
        people_awards::Entity::find().count(db).await.unwrap(),
    )
}

#[tokio::test]
async fn inception_lifecycle() {
    let catalog = catalog().await;

    let inserted = catalog.insert_movie(inception()).await.unwrap();
    let all = catalog.fetch_all_movies().await.unwrap();
    assert_eq!(all, vec![inserted.clone()]);
    assert_eq!(
        log_count(&catalog, OperationType::Insert, AuditedTable::Movies, inserted.movie_id).await,
        1
    );

    let updated = catalog
        .update_movie(
            inserted.movie_id,
            MovieInput { box_office: Some(830_000_000.0), ..inception() },
        )
        .await
        .unwrap();
    assert_eq!(updated.box_office, Some(830_000_000.0));
    let fetched = catalog.fetch_all_movies().await.unwrap();
    assert_eq!(fetched[0].box_office, Some(830_000_000.0));
    assert_eq!(fetched[0].director.as_deref(), Some("Nolan"));
    assert_eq!(
        log_count(&catalog, OperationType::Update, AuditedTable::Movies, inserted.movie_id).await,
        1
    );

    let actor = catalog.insert_person(person("Leonardo DiCaprio")).await.unwrap();
    let oscar = catalog.insert_award(award("Academy Award")).await.unwrap();
    let studio = catalog.insert_company(company("Warner Bros.")).await.unwrap();
    catalog
        .add_movie_actor(
            inserted.movie_id,
            ActorLink { people_id: actor.people_id, role: Some("Cobb".into()), is_protagonist: true },
        )
        .await
        .unwrap();
    catalog
        .add_movie_award(inserted.movie_id, AwardLink { award_id: oscar.award_id, award_year: 2011 })
        .await
        .unwrap();
    catalog
        .add_movie_company(
            inserted.movie_id,
            CompanyLink {
                company_id: studio.company_id,
                relationship_type: RelationshipType::Distribution,
            },
        )
        .await
        .unwrap();

    catalog.delete_movie(inserted.movie_id).await.unwrap();

    assert!(catalog.fetch_all_movies().await.unwrap().is_empty());
    assert_eq!(join_counts(&catalog).await, (0, 0, 0, 0));
    assert_eq!(
        log_count(&catalog, OperationType::Delete, AuditedTable::Movies, inserted.movie_id).await,
        1
    );
    // Unrelated parents survive.
    assert_eq!(catalog.fetch_all_people().await.unwrap().len(), 1);
}

#[tokio::test]
async fn update_overwrites_every_field() {
    let catalog = catalog().await;
    let c = catalog.insert_company(company("Legendary")).await.unwrap();

    let updated = catalog
        .update_company(
            c.company_id,
            cinelog::models::CompanyInput {
                name: "Legendary Entertainment".into(),
                country: None,
                founded_year: Some(2000),
                industry: Some("Film".into()),
                revenue: Some(1.5e9),
                description: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.name, "Legendary Entertainment");
    assert_eq!(updated.country, None);
    assert_eq!(updated.founded_year, Some(2000));
    assert_eq!(updated.revenue, Some(1.5e9));
    assert_eq!(
        log_count(&catalog, OperationType::Update, AuditedTable::Companies, c.company_id).await,
        1
    );
}

#[tokio::test]
async fn update_person_overwrites_every_field() {
    let catalog = catalog().await;
    let p = catalog.insert_person(person("Tom Hardy")).await.unwrap();

    let updated = catalog
        .update_person(
            p.people_id,
            PersonInput {
                name: "Marion Cotillard".into(),
                country: "France".into(),
                masterpiece: Some("La Vie en Rose".into()),
                brief_intro: Some("Plays Mal in Inception.".into()),
            },
        )
        .await
        .unwrap();

    let stored = catalog.fetch_all_people().await.unwrap();
    assert_eq!(stored, vec![updated.clone()]);
    assert_eq!(updated.people_id, p.people_id);
    assert_eq!(updated.name, "Marion Cotillard");
    assert_eq!(updated.country, "France");
    assert_eq!(updated.masterpiece.as_deref(), Some("La Vie en Rose"));
    assert_eq!(updated.brief_intro.as_deref(), Some("Plays Mal in Inception."));
    assert_eq!(
        log_count(&catalog, OperationType::Update, AuditedTable::People, p.people_id).await,
        1
    );
}

#[tokio::test]
async fn update_award_overwrites_every_field() {
    let catalog = catalog().await;
    let a = catalog.insert_award(award("Saturn Award")).await.unwrap();

    let updated = catalog
        .update_award(
            a.award_id,
            AwardInput {
                name: "BAFTA".into(),
                category: Some("Best Production Design".into()),
                year: Some(2011),
                description: Some("British Academy Film Award".into()),
            },
        )
        .await
        .unwrap();

    let stored = catalog.fetch_all_awards().await.unwrap();
    assert_eq!(stored, vec![updated.clone()]);
    assert_eq!(updated.award_id, a.award_id);
    assert_eq!(updated.name, "BAFTA");
    assert_eq!(updated.category.as_deref(), Some("Best Production Design"));
    assert_eq!(updated.year, Some(2011));
    assert_eq!(updated.description.as_deref(), Some("British Academy Film Award"));
    assert_eq!(
        log_count(&catalog, OperationType::Update, AuditedTable::Awards, a.award_id).await,
        1
    );
}

#[tokio::test]
async fn update_of_missing_row_is_not_found_and_unlogged() {
    let catalog = catalog().await;

    let err = catalog.update_movie(42, inception()).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound { table: AuditedTable::Movies, id: 42 }));

    let err = catalog.update_person(7, person("Tom Hardy")).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound { table: AuditedTable::People, id: 7 }));

    assert_eq!(total_logs(&catalog).await, 0);
}

#[tokio::test]
async fn delete_of_missing_row_is_not_found_and_unlogged() {
    let catalog = catalog().await;

    let err = catalog.delete_award(3).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound { table: AuditedTable::Awards, id: 3 }));
    assert_eq!(total_logs(&catalog).await, 0);
}

#[tokio::test]
async fn failed_delete_changes_nothing() {
    let catalog = catalog().await;

    let locked = catalog.insert_movie(movie("Locked", 2001)).await.unwrap();
    let actor = catalog.insert_person(person("Guy Pearce")).await.unwrap();
    catalog
        .add_movie_actor(
            locked.movie_id,
            ActorLink { people_id: actor.people_id, role: None, is_protagonist: false },
        )
        .await
        .unwrap();

    catalog
        .db()
        .execute_unprepared(
            "CREATE TRIGGER block_locked_delete BEFORE DELETE ON Movies
             WHEN OLD.title = 'Locked'
             BEGIN SELECT RAISE(ABORT, 'movie is locked'); END",
        )
        .await
        .unwrap();

    let logs_before = total_logs(&catalog).await;
    let err = catalog.delete_movie(locked.movie_id).await.unwrap_err();
    assert!(matches!(err, AppError::Database(_)));
    assert!(err.to_string().contains("movie is locked"));

    assert_eq!(catalog.fetch_all_movies().await.unwrap(), vec![locked.clone()]);
    assert_eq!(join_counts(&catalog).await, (0, 0, 1, 0));
    assert_eq!(total_logs(&catalog).await, logs_before);
    assert_eq!(
        log_count(&catalog, OperationType::Delete, AuditedTable::Movies, locked.movie_id).await,
        0
    );
}

#[tokio::test]
async fn failed_update_changes_nothing() {
    let catalog = catalog().await;

    let original = catalog.insert_movie(inception()).await.unwrap();
    catalog
        .db()
        .execute_unprepared(
            "CREATE TRIGGER block_movie_update BEFORE UPDATE ON Movies
             BEGIN SELECT RAISE(ABORT, 'movie is frozen'); END",
        )
        .await
        .unwrap();

    let logs_before = total_logs(&catalog).await;
    let err = catalog
        .update_movie(
            original.movie_id,
            MovieInput { title: "Inception (Director's Cut)".into(), ..inception() },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Database(_)));
    assert!(err.to_string().contains("movie is frozen"));

    assert_eq!(catalog.fetch_all_movies().await.unwrap(), vec![original.clone()]);
    assert_eq!(total_logs(&catalog).await, logs_before);
    assert_eq!(
        log_count(&catalog, OperationType::Update, AuditedTable::Movies, original.movie_id).await,
        0
    );
}

#[tokio::test]
async fn deleting_a_person_cascades_to_awards_and_roles() {
    let catalog = catalog().await;

    let m = catalog.insert_movie(movie("The Dark Knight", 2008)).await.unwrap();
    let p = catalog.insert_person(person("Heath Ledger")).await.unwrap();
    let a = catalog.insert_award(award("Academy Award")).await.unwrap();
    catalog
        .add_person_award(p.people_id, AwardLink { award_id: a.award_id, award_year: 2009 })
        .await
        .unwrap();
    catalog
        .add_movie_actor(
            m.movie_id,
            ActorLink { people_id: p.people_id, role: Some("Joker".into()), is_protagonist: false },
        )
        .await
        .unwrap();
    catalog
        .add_movie_award(m.movie_id, AwardLink { award_id: a.award_id, award_year: 2009 })
        .await
        .unwrap();

    catalog.delete_person(p.people_id).await.unwrap();

    assert_eq!(join_counts(&catalog).await, (1, 0, 0, 0));
    assert_eq!(
        log_count(&catalog, OperationType::Delete, AuditedTable::People, p.people_id).await,
        1
    );
}

#[tokio::test]
async fn deleting_an_award_cascades_to_both_award_tables() {
    let catalog = catalog().await;

    let m = catalog.insert_movie(movie("Oppenheimer", 2023)).await.unwrap();
    let p = catalog.insert_person(person("Cillian Murphy")).await.unwrap();
    let a = catalog.insert_award(award("Golden Globe")).await.unwrap();
    catalog
        .add_person_award(p.people_id, AwardLink { award_id: a.award_id, award_year: 2024 })
        .await
        .unwrap();
    catalog
        .add_movie_award(m.movie_id, AwardLink { award_id: a.award_id, award_year: 2024 })
        .await
        .unwrap();

    catalog.delete_award(a.award_id).await.unwrap();

    assert_eq!(join_counts(&catalog).await, (0, 0, 0, 0));
    assert_eq!(catalog.fetch_all_movies().await.unwrap().len(), 1);
    assert_eq!(catalog.fetch_all_people().await.unwrap().len(), 1);
}

#[tokio::test]
async fn deleting_a_company_cascades_to_movie_companies() {
    let catalog = catalog().await;

    let m = catalog.insert_movie(movie("Interstellar", 2014)).await.unwrap();
    let c = catalog.insert_company(company("Syncopy")).await.unwrap();
    catalog
        .add_movie_company(
            m.movie_id,
            CompanyLink { company_id: c.company_id, relationship_type: RelationshipType::Production },
        )
        .await
        .unwrap();

    catalog.delete_company(c.company_id).await.unwrap();

    assert_eq!(join_counts(&catalog).await, (0, 0, 0, 0));
    assert_eq!(
        log_count(&catalog, OperationType::Delete, AuditedTable::Companies, c.company_id).await,
        1
    );
}

#[tokio::test]
async fn links_to_missing_parents_are_rejected() {
    let catalog = catalog().await;
    let m = catalog.insert_movie(movie("Following", 1998)).await.unwrap();

    let err = catalog
        .add_movie_award(m.movie_id, AwardLink { award_id: 99, award_year: 1999 })
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Database(_)));

    let err = catalog
        .add_movie_actor(99, ActorLink { people_id: 1, role: None, is_protagonist: false })
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Database(_)));

    assert_eq!(join_counts(&catalog).await, (0, 0, 0, 0));
}

#[tokio::test]
async fn repeat_awards_are_kept() {
    let catalog = catalog().await;
    let p = catalog.insert_person(person("Meryl Streep")).await.unwrap();
    let a = catalog.insert_award(award("Academy Award")).await.unwrap();

    for _ in 0..2 {
        catalog
            .add_person_award(p.people_id, AwardLink { award_id: a.award_id, award_year: 2012 })
            .await
            .unwrap();
    }

    assert_eq!(catalog.person_awards(p.people_id).await.unwrap().len(), 2);
}
