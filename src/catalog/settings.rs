use sea_orm::{
    ActiveValue::NotSet, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set,
    sea_query::OnConflict,
};

use super::Catalog;
use crate::{
    entities::ui_settings,
    error::AppResult,
    models::{SettingInput, setting_name},
};

const DEFAULT_SETTING_TYPE: &str = "string";

impl Catalog {
    /// Inserts the setting, or overwrites value, type and description when
    /// the name already exists.
    pub async fn save_ui_setting(
        &self,
        name: &str,
        input: SettingInput,
    ) -> AppResult<ui_settings::Model> {
        let name = setting_name(name)?;
        let now = now_sec();

        let row = ui_settings::ActiveModel {
            setting_id: NotSet,
            setting_name: Set(name.clone()),
            setting_value: Set(input.value),
            setting_type: Set(Some(
                input.setting_type.unwrap_or_else(|| DEFAULT_SETTING_TYPE.to_string()),
            )),
            description: Set(input.description),
            created_at: Set(now),
            updated_at: Set(now),
        };

        ui_settings::Entity::insert(row)
            .on_conflict(
                OnConflict::column(ui_settings::Column::SettingName)
                    .update_columns([
                        ui_settings::Column::SettingValue,
                        ui_settings::Column::SettingType,
                        ui_settings::Column::Description,
                        ui_settings::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await?;

        let saved = ui_settings::Entity::find()
            .filter(ui_settings::Column::SettingName.eq(name.as_str()))
            .one(&self.db)
            .await?
            .ok_or_else(|| anyhow::anyhow!("setting {name} missing after upsert"))?;

        tracing::debug!(name = %saved.setting_name, "saved ui setting");
        Ok(saved)
    }

    pub async fn get_ui_setting(&self, name: &str) -> AppResult<Option<ui_settings::Model>> {
        Ok(ui_settings::Entity::find()
            .filter(ui_settings::Column::SettingName.eq(name))
            .one(&self.db)
            .await?)
    }

    pub async fn get_all_ui_settings(&self) -> AppResult<Vec<ui_settings::Model>> {
        Ok(ui_settings::Entity::find()
            .order_by_asc(ui_settings::Column::SettingName)
            .all(&self.db)
            .await?)
    }

    /// Returns whether a setting with that name existed.
    pub async fn delete_ui_setting(&self, name: &str) -> AppResult<bool> {
        let res = ui_settings::Entity::delete_many()
            .filter(ui_settings::Column::SettingName.eq(name))
            .exec(&self.db)
            .await?;
        Ok(res.rows_affected > 0)
    }
}

fn now_sec() -> i64 {
    jiff::Timestamp::now().as_second()
}
