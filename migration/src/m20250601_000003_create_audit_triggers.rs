use sea_orm_migration::prelude::*;

/// (trigger, table, primary key column)
const AUDITED_TABLES: [(&str, &str, &str); 4] = [
    ("after_movie_insert", "Movies", "movie_id"),
    ("after_person_insert", "People", "people_id"),
    ("after_company_insert", "Companies", "company_id"),
    ("after_award_insert", "Awards", "award_id"),
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        for (trigger, table, pk) in AUDITED_TABLES {
            db.execute_unprepared(&format!(
                "CREATE TRIGGER IF NOT EXISTS {trigger}
                AFTER INSERT ON {table}
                FOR EACH ROW
                BEGIN
                    INSERT INTO operation_logs (operation_type, table_name, record_id)
                    VALUES ('INSERT', '{table}', NEW.{pk});
                END"
            ))
            .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        for (trigger, _, _) in AUDITED_TABLES {
            db.execute_unprepared(&format!("DROP TRIGGER IF EXISTS {trigger}")).await?;
        }

        Ok(())
    }
}
