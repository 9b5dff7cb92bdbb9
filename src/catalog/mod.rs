//! Data-access facade over the catalog schema.
//!
//! Inserts are audited by storage triggers. Updates and deletes go through
//! [`Catalog::update_logged`] and [`Catalog::delete_logged`], which write the
//! row change and its audit entry in one transaction.

mod awards;
mod companies;
mod movies;
mod people;
mod relations;
mod settings;
mod views;

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, DbErr, DeleteMany, EntityTrait,
    IntoActiveModel, TransactionTrait,
};
use tracing::{debug, warn};

use crate::{
    audit::{self, LogEntry},
    entities::operation_logs::{AuditedTable, OperationType},
    error::{AppError, AppResult},
};

#[derive(Clone)]
pub struct Catalog {
    db: DatabaseConnection,
}

impl Catalog {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    pub async fn get_operation_logs(&self) -> AppResult<Vec<LogEntry>> {
        audit::operation_logs(&self.db).await
    }

    /// Full-row update plus an UPDATE audit entry. A missing row rolls the
    /// transaction back and surfaces as [`AppError::NotFound`].
    async fn update_logged<A>(
        &self,
        table: AuditedTable,
        id: i32,
        row: A,
    ) -> AppResult<<A::Entity as EntityTrait>::Model>
    where
        A: ActiveModelTrait + ActiveModelBehavior + Send + 'static,
        <A::Entity as EntityTrait>::Model: IntoActiveModel<A> + Send,
    {
        let txn = self.db.begin().await?;

        let updated = match row.update(&txn).await {
            Ok(model) => model,
            Err(DbErr::RecordNotUpdated | DbErr::RecordNotFound(_)) => {
                txn.rollback().await?;
                return Err(AppError::NotFound { table, id });
            },
            Err(err) => {
                txn.rollback().await?;
                return Err(err.into());
            },
        };

        audit::append(&txn, OperationType::Update, table, id).await?;
        txn.commit().await?;

        debug!(table = %table, id, "updated");
        Ok(updated)
    }

    /// Appends a DELETE audit entry, then runs `delete` (which cascades to
    /// dependent join rows). Both commit together or neither does.
    async fn delete_logged<E>(
        &self,
        table: AuditedTable,
        id: i32,
        delete: DeleteMany<E>,
    ) -> AppResult<()>
    where
        E: EntityTrait,
    {
        let txn = self.db.begin().await?;

        let result = async {
            audit::append(&txn, OperationType::Delete, table, id).await?;
            let res = delete.exec(&txn).await?;
            if res.rows_affected == 0 {
                return Err(AppError::NotFound { table, id });
            }
            Ok(())
        }
        .await;

        match result {
            Ok(()) => {
                txn.commit().await?;
                debug!(table = %table, id, "deleted");
                Ok(())
            },
            Err(err) => {
                warn!(table = %table, id, error = %err, "delete rolled back");
                if let Err(rollback_err) = txn.rollback().await {
                    warn!(error = %rollback_err, "rollback failed");
                }
                Err(err)
            },
        }
    }
}
