use sea_orm_migration::{prelude::*, schema::*};

const NOW_SECONDS: &str = "(CAST(strftime('%s', 'now') AS INTEGER))";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Movies::Table)
                    .if_not_exists()
                    .col(pk_auto(Movies::MovieId))
                    .col(string_len(Movies::Title, 200))
                    .col(integer_null(Movies::ReleaseYear))
                    .col(string_len_null(Movies::Director, 100))
                    .col(string_len_null(Movies::Genre, 50))
                    .col(double_null(Movies::BoxOffice))
                    .col(text_null(Movies::Description))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(People::Table)
                    .if_not_exists()
                    .col(pk_auto(People::PeopleId))
                    .col(string_len(People::Name, 100))
                    .col(string_len(People::Country, 100))
                    .col(text_null(People::Masterpiece))
                    .col(text_null(People::BriefIntro))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Companies::Table)
                    .if_not_exists()
                    .col(pk_auto(Companies::CompanyId))
                    .col(string_len(Companies::Name, 200))
                    .col(string_len_null(Companies::Country, 100))
                    .col(integer_null(Companies::FoundedYear))
                    .col(string_len_null(Companies::Industry, 100))
                    .col(double_null(Companies::Revenue))
                    .col(text_null(Companies::Description))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Awards::Table)
                    .if_not_exists()
                    .col(pk_auto(Awards::AwardId))
                    .col(string_len(Awards::Name, 200))
                    .col(string_len_null(Awards::Category, 100))
                    .col(integer_null(Awards::Year))
                    .col(text_null(Awards::Description))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(OperationLogs::Table)
                    .if_not_exists()
                    .col(pk_auto(OperationLogs::LogId))
                    .col(string_len(OperationLogs::OperationType, 50))
                    .col(string_len(OperationLogs::TableName, 50))
                    .col(integer(OperationLogs::RecordId))
                    .col(big_integer(OperationLogs::OperationTime).default(Expr::cust(NOW_SECONDS)))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_operation_logs_time")
                    .table(OperationLogs::Table)
                    .col(OperationLogs::OperationTime)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(UiSettings::Table)
                    .if_not_exists()
                    .col(pk_auto(UiSettings::SettingId))
                    .col(string_len_uniq(UiSettings::SettingName, 100))
                    .col(text_null(UiSettings::SettingValue))
                    .col(string_len_null(UiSettings::SettingType, 50))
                    .col(text_null(UiSettings::Description))
                    .col(big_integer(UiSettings::CreatedAt).default(Expr::cust(NOW_SECONDS)))
                    .col(big_integer(UiSettings::UpdatedAt).default(Expr::cust(NOW_SECONDS)))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(UiSettings::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(OperationLogs::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Awards::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Companies::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(People::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Movies::Table).to_owned()).await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Movies {
    #[sea_orm(iden = "Movies")]
    Table,
    MovieId,
    Title,
    ReleaseYear,
    Director,
    Genre,
    BoxOffice,
    Description,
}

#[derive(DeriveIden)]
enum People {
    #[sea_orm(iden = "People")]
    Table,
    PeopleId,
    Name,
    Country,
    Masterpiece,
    BriefIntro,
}

#[derive(DeriveIden)]
enum Companies {
    #[sea_orm(iden = "Companies")]
    Table,
    CompanyId,
    Name,
    Country,
    FoundedYear,
    Industry,
    Revenue,
    Description,
}

#[derive(DeriveIden)]
enum Awards {
    #[sea_orm(iden = "Awards")]
    Table,
    AwardId,
    Name,
    Category,
    Year,
    Description,
}

#[derive(DeriveIden)]
enum OperationLogs {
    Table,
    LogId,
    OperationType,
    TableName,
    RecordId,
    OperationTime,
}

#[derive(DeriveIden)]
enum UiSettings {
    #[sea_orm(iden = "UI_Settings")]
    Table,
    SettingId,
    SettingName,
    SettingValue,
    SettingType,
    Description,
    CreatedAt,
    UpdatedAt,
}
