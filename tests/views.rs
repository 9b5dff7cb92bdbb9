mod common;

use cinelog::{
    entities::movie_companies::RelationshipType,
    models::{ActorLink, AwardLink, CompanyLink, SettingInput},
};
use common::{award, catalog, company, inception, movie, person};

#[tokio::test]
async fn summaries_track_base_tables() {
    let catalog = catalog().await;

    let a = catalog.insert_movie(movie("Insomnia", 2002)).await.unwrap();
    catalog.insert_movie(movie("The Prestige", 2006)).await.unwrap();
    catalog.insert_person(person("Christian Bale")).await.unwrap();
    catalog.insert_company(company("Touchstone")).await.unwrap();
    catalog.insert_award(award("Saturn Award")).await.unwrap();

    assert_eq!(catalog.movies_summary().await.unwrap().len(), 2);
    assert_eq!(catalog.people_summary().await.unwrap().len(), 1);
    assert_eq!(catalog.companies_summary().await.unwrap().len(), 1);
    assert_eq!(catalog.awards_summary().await.unwrap().len(), 1);

    catalog.delete_movie(a.movie_id).await.unwrap();
    let movies = catalog.movies_summary().await.unwrap();
    assert_eq!(movies.len(), catalog.fetch_all_movies().await.unwrap().len());
    assert_eq!(movies[0].title, "The Prestige");
    assert_eq!(movies[0].release_year, Some(2006));
}

#[tokio::test]
async fn awards_summary_without_awards_is_empty() {
    let catalog = catalog().await;
    let m = catalog.insert_movie(inception()).await.unwrap();

    let rows = catalog.movie_awards_summary(Some(m.movie_id)).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].title, "Inception");
    assert_eq!(rows[0].awards_list, None);
    assert_eq!(rows[0].total_awards, 0);
}

#[tokio::test]
async fn awards_summary_lists_newest_first() {
    let catalog = catalog().await;

    let p = catalog.insert_person(person("Christopher Nolan")).await.unwrap();
    let other = catalog.insert_person(person("Emma Thomas")).await.unwrap();
    let oscar = catalog.insert_award(award("Academy Award")).await.unwrap();
    let bafta = catalog.insert_award(award("BAFTA")).await.unwrap();
    let dga = catalog.insert_award(award("DGA Award")).await.unwrap();

    for (award_id, award_year) in
        [(bafta.award_id, 2018), (oscar.award_id, 2024), (dga.award_id, 2021)]
    {
        catalog.add_person_award(p.people_id, AwardLink { award_id, award_year }).await.unwrap();
    }

    let rows = catalog.person_awards_summary(Some(p.people_id)).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].total_awards, 3);
    let list = rows[0].awards_list.as_deref().unwrap();
    assert_eq!(
        list.split("; ").collect::<Vec<_>>(),
        vec!["Academy Award (2024)", "DGA Award (2021)", "BAFTA (2018)"]
    );

    let all = catalog.person_awards_summary(None).await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].people_id, p.people_id);
    assert_eq!(all[1].people_id, other.people_id);
    assert_eq!(all[1].total_awards, 0);
}

#[tokio::test]
async fn movie_details_aggregates_related_rows() {
    let catalog = catalog().await;

    let m = catalog.insert_movie(inception()).await.unwrap();
    let leo = catalog.insert_person(person("Leonardo DiCaprio")).await.unwrap();
    let elliot = catalog.insert_person(person("Elliot Page")).await.unwrap();
    let cillian = catalog.insert_person(person("Cillian Murphy")).await.unwrap();
    let oscar = catalog.insert_award(award("Academy Award")).await.unwrap();
    let saturn = catalog.insert_award(award("Saturn Award")).await.unwrap();
    let wb = catalog.insert_company(company("Warner Bros.")).await.unwrap();
    let syncopy = catalog.insert_company(company("Syncopy")).await.unwrap();

    for (who, role, lead) in [
        (&elliot, "Ariadne", false),
        (&leo, "Cobb", true),
        (&cillian, "Fischer", false),
    ] {
        catalog
            .add_movie_actor(
                m.movie_id,
                ActorLink { people_id: who.people_id, role: Some(role.into()), is_protagonist: lead },
            )
            .await
            .unwrap();
    }
    catalog
        .add_movie_award(m.movie_id, AwardLink { award_id: saturn.award_id, award_year: 2010 })
        .await
        .unwrap();
    catalog
        .add_movie_award(m.movie_id, AwardLink { award_id: oscar.award_id, award_year: 2011 })
        .await
        .unwrap();
    catalog
        .add_movie_company(
            m.movie_id,
            CompanyLink { company_id: syncopy.company_id, relationship_type: RelationshipType::Production },
        )
        .await
        .unwrap();
    catalog
        .add_movie_company(
            m.movie_id,
            CompanyLink { company_id: wb.company_id, relationship_type: RelationshipType::Distribution },
        )
        .await
        .unwrap();

    let details = catalog.movie_details(m.movie_id).await.unwrap().unwrap();
    assert_eq!(details.basic_info, m);

    let cast: Vec<_> = details.actors.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(cast, vec!["Leonardo DiCaprio", "Cillian Murphy", "Elliot Page"]);
    assert!(details.actors[0].is_protagonist);

    let years: Vec<_> = details.awards.iter().map(|a| a.award_year).collect();
    assert_eq!(years, vec![2011, 2010]);
    assert_eq!(details.awards[0].award_name, "Academy Award");

    assert_eq!(details.companies.len(), 2);
    assert_eq!(details.companies[0].name, "Syncopy");
    assert_eq!(details.companies[0].relationship_type, RelationshipType::Production);

    let joined = catalog.movie_actors(m.movie_id).await.unwrap();
    assert_eq!(joined[0].actor_name, "Leonardo DiCaprio");
    assert_eq!(joined[0].movie_title, "Inception");

    let credits = catalog.movie_companies(m.movie_id).await.unwrap();
    assert_eq!(credits[1].company_name, "Warner Bros.");
    assert_eq!(credits[1].relationship_type, RelationshipType::Distribution);

    let awards = catalog.movie_awards(m.movie_id).await.unwrap();
    assert_eq!(awards.len(), 2);
    assert_eq!(awards[0].award_year, 2011);
}

#[tokio::test]
async fn person_details_lists_filmography_newest_first() {
    let catalog = catalog().await;

    let p = catalog.insert_person(person("Michael Caine")).await.unwrap();
    let batman = catalog.insert_movie(movie("Batman Begins", 2005)).await.unwrap();
    let tenet = catalog.insert_movie(movie("Tenet", 2020)).await.unwrap();
    let prestige = catalog.insert_movie(movie("The Prestige", 2006)).await.unwrap();

    for m in [&batman, &tenet, &prestige] {
        catalog
            .add_movie_actor(
                m.movie_id,
                ActorLink { people_id: p.people_id, role: None, is_protagonist: false },
            )
            .await
            .unwrap();
    }

    let details = catalog.person_details(p.people_id).await.unwrap().unwrap();
    let titles: Vec<_> = details.movies.iter().map(|m| m.title.as_str()).collect();
    assert_eq!(titles, vec!["Tenet", "The Prestige", "Batman Begins"]);
    assert!(details.awards.is_empty());

    let by_title: Vec<_> = catalog
        .actor_movies(p.people_id)
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.movie_title)
        .collect();
    assert_eq!(by_title, vec!["Batman Begins", "Tenet", "The Prestige"]);
}

#[tokio::test]
async fn company_and_award_details() {
    let catalog = catalog().await;

    let m = catalog.insert_movie(movie("Memento", 2000)).await.unwrap();
    let p = catalog.insert_person(person("Guy Pearce")).await.unwrap();
    let c = catalog.insert_company(company("Newmarket")).await.unwrap();
    let a = catalog.insert_award(award("Independent Spirit Award")).await.unwrap();
    catalog
        .add_movie_company(
            m.movie_id,
            CompanyLink { company_id: c.company_id, relationship_type: RelationshipType::Distribution },
        )
        .await
        .unwrap();
    catalog
        .add_movie_award(m.movie_id, AwardLink { award_id: a.award_id, award_year: 2002 })
        .await
        .unwrap();
    catalog
        .add_person_award(p.people_id, AwardLink { award_id: a.award_id, award_year: 2002 })
        .await
        .unwrap();

    let company = catalog.company_details(c.company_id).await.unwrap().unwrap();
    assert_eq!(company.movies.len(), 1);
    assert_eq!(company.movies[0].title, "Memento");

    let award = catalog.award_details(a.award_id).await.unwrap().unwrap();
    assert_eq!(award.movies[0].movie_id, m.movie_id);
    assert_eq!(award.people[0].name, "Guy Pearce");
}

#[tokio::test]
async fn details_of_missing_rows_are_none() {
    let catalog = catalog().await;

    assert!(catalog.movie_details(1).await.unwrap().is_none());
    assert!(catalog.person_details(1).await.unwrap().is_none());
    assert!(catalog.company_details(1).await.unwrap().is_none());
    assert!(catalog.award_details(1).await.unwrap().is_none());
}

#[tokio::test]
async fn saving_a_setting_twice_upserts() {
    let catalog = catalog().await;

    catalog
        .save_ui_setting("theme", SettingInput { value: Some("dark".into()), ..Default::default() })
        .await
        .unwrap();
    let saved = catalog
        .save_ui_setting("theme", SettingInput { value: Some("light".into()), ..Default::default() })
        .await
        .unwrap();
    assert_eq!(saved.setting_type.as_deref(), Some("string"));

    let all = catalog.get_all_ui_settings().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].setting_name, "theme");
    assert_eq!(all[0].setting_value.as_deref(), Some("light"));

    assert!(catalog.delete_ui_setting("theme").await.unwrap());
    assert!(!catalog.delete_ui_setting("theme").await.unwrap());
    assert!(catalog.get_ui_setting("theme").await.unwrap().is_none());
}
