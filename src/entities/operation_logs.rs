use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(50))")]
#[serde(rename_all = "UPPERCASE")]
pub enum OperationType {
    #[sea_orm(string_value = "INSERT")]
    Insert,
    #[sea_orm(string_value = "UPDATE")]
    Update,
    #[sea_orm(string_value = "DELETE")]
    Delete,
}

/// Primary tables whose writes are audited. The string values are the
/// storage table names, matching what the insert triggers record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(50))")]
pub enum AuditedTable {
    #[sea_orm(string_value = "Movies")]
    Movies,
    #[sea_orm(string_value = "People")]
    People,
    #[sea_orm(string_value = "Companies")]
    Companies,
    #[sea_orm(string_value = "Awards")]
    Awards,
}

impl std::fmt::Display for AuditedTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            AuditedTable::Movies => "Movies",
            AuditedTable::People => "People",
            AuditedTable::Companies => "Companies",
            AuditedTable::Awards => "Awards",
        };
        f.write_str(name)
    }
}

/// Rows are written by the insert triggers and by `crate::audit::append`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "operation_logs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub log_id: i32,
    pub operation_type: OperationType,
    pub table_name: AuditedTable,
    pub record_id: i32,
    pub operation_time: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
