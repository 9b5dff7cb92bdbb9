use anyhow::anyhow;
use jiff::Timestamp;
use sea_orm::{ActiveValue::NotSet, ConnectionTrait, EntityTrait, QueryOrder, Set};
use serde::Serialize;

use crate::{
    entities::operation_logs::{self, AuditedTable, OperationType},
    error::{AppError, AppResult},
};

/// One audit row as exposed to callers.
#[derive(Clone, Debug, Serialize)]
pub struct LogEntry {
    pub log_id: i32,
    pub operation_type: OperationType,
    pub table_name: AuditedTable,
    pub record_id: i32,
    pub operation_time: Timestamp,
}

impl TryFrom<operation_logs::Model> for LogEntry {
    type Error = AppError;

    fn try_from(row: operation_logs::Model) -> AppResult<Self> {
        let operation_time = Timestamp::from_second(row.operation_time).map_err(|err| {
            anyhow!("log {} has out-of-range operation_time {}: {err}", row.log_id, row.operation_time)
        })?;
        Ok(Self {
            log_id: row.log_id,
            operation_type: row.operation_type,
            table_name: row.table_name,
            record_id: row.record_id,
            operation_time,
        })
    }
}

/// Appends an audit row on `conn`. Update and delete paths pass their open
/// transaction so the entry commits or rolls back with the write it records.
/// Inserts are covered by the storage triggers and never come through here.
pub(crate) async fn append<C>(
    conn: &C,
    kind: OperationType,
    table: AuditedTable,
    record_id: i32,
) -> AppResult<()>
where
    C: ConnectionTrait,
{
    let row = operation_logs::ActiveModel {
        log_id: NotSet,
        operation_type: Set(kind),
        table_name: Set(table),
        record_id: Set(record_id),
        operation_time: NotSet,
    };
    operation_logs::Entity::insert(row).exec(conn).await?;
    Ok(())
}

/// All audit rows, most recent first.
pub async fn operation_logs<C>(conn: &C) -> AppResult<Vec<LogEntry>>
where
    C: ConnectionTrait,
{
    let rows = operation_logs::Entity::find()
        .order_by_desc(operation_logs::Column::OperationTime)
        .order_by_desc(operation_logs::Column::LogId)
        .all(conn)
        .await?;
    rows.into_iter().map(LogEntry::try_from).collect()
}
