use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PeopleAwards::Table)
                    .if_not_exists()
                    .col(pk_auto(PeopleAwards::PeopleAwardId))
                    .col(integer(PeopleAwards::PeopleId))
                    .col(integer(PeopleAwards::AwardId))
                    .col(integer(PeopleAwards::AwardYear))
                    .foreign_key(
                        ForeignKey::create()
                            .from(PeopleAwards::Table, PeopleAwards::PeopleId)
                            .to(People::Table, People::PeopleId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(PeopleAwards::Table, PeopleAwards::AwardId)
                            .to(Awards::Table, Awards::AwardId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MovieAwards::Table)
                    .if_not_exists()
                    .col(pk_auto(MovieAwards::MovieAwardId))
                    .col(integer(MovieAwards::MovieId))
                    .col(integer(MovieAwards::AwardId))
                    .col(integer(MovieAwards::AwardYear))
                    .foreign_key(
                        ForeignKey::create()
                            .from(MovieAwards::Table, MovieAwards::MovieId)
                            .to(Movies::Table, Movies::MovieId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(MovieAwards::Table, MovieAwards::AwardId)
                            .to(Awards::Table, Awards::AwardId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MovieCompanies::Table)
                    .if_not_exists()
                    .col(pk_auto(MovieCompanies::MovieCompanyId))
                    .col(integer(MovieCompanies::MovieId))
                    .col(integer(MovieCompanies::CompanyId))
                    .col(
                        string_len(MovieCompanies::RelationshipType, 20).check(
                            Expr::col(MovieCompanies::RelationshipType)
                                .is_in(["production", "distribution"]),
                        ),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(MovieCompanies::Table, MovieCompanies::MovieId)
                            .to(Movies::Table, Movies::MovieId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(MovieCompanies::Table, MovieCompanies::CompanyId)
                            .to(Companies::Table, Companies::CompanyId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MovieActors::Table)
                    .if_not_exists()
                    .col(pk_auto(MovieActors::MovieActorId))
                    .col(integer(MovieActors::MovieId))
                    .col(integer(MovieActors::PeopleId))
                    .col(string_len_null(MovieActors::Role, 100))
                    .col(boolean(MovieActors::IsProtagonist).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .from(MovieActors::Table, MovieActors::MovieId)
                            .to(Movies::Table, Movies::MovieId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(MovieActors::Table, MovieActors::PeopleId)
                            .to(People::Table, People::PeopleId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_people_awards_people")
                    .table(PeopleAwards::Table)
                    .col(PeopleAwards::PeopleId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_movie_awards_movie")
                    .table(MovieAwards::Table)
                    .col(MovieAwards::MovieId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_movie_companies_movie")
                    .table(MovieCompanies::Table)
                    .col(MovieCompanies::MovieId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_movie_actors_movie")
                    .table(MovieActors::Table)
                    .col(MovieActors::MovieId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_movie_actors_people")
                    .table(MovieActors::Table)
                    .col(MovieActors::PeopleId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(MovieActors::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(MovieCompanies::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(MovieAwards::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(PeopleAwards::Table).to_owned()).await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Movies {
    #[sea_orm(iden = "Movies")]
    Table,
    MovieId,
}

#[derive(DeriveIden)]
enum People {
    #[sea_orm(iden = "People")]
    Table,
    PeopleId,
}

#[derive(DeriveIden)]
enum Companies {
    #[sea_orm(iden = "Companies")]
    Table,
    CompanyId,
}

#[derive(DeriveIden)]
enum Awards {
    #[sea_orm(iden = "Awards")]
    Table,
    AwardId,
}

#[derive(DeriveIden)]
enum PeopleAwards {
    #[sea_orm(iden = "People_Awards")]
    Table,
    PeopleAwardId,
    PeopleId,
    AwardId,
    AwardYear,
}

#[derive(DeriveIden)]
enum MovieAwards {
    #[sea_orm(iden = "Movie_Awards")]
    Table,
    MovieAwardId,
    MovieId,
    AwardId,
    AwardYear,
}

#[derive(DeriveIden)]
enum MovieCompanies {
    #[sea_orm(iden = "Movie_Companies")]
    Table,
    MovieCompanyId,
    MovieId,
    CompanyId,
    RelationshipType,
}

#[derive(DeriveIden)]
enum MovieActors {
    #[sea_orm(iden = "Movie_Actors")]
    Table,
    MovieActorId,
    MovieId,
    PeopleId,
    Role,
    IsProtagonist,
}
