//! Документы настроек (`user_form_settings`): ключ → JSON

use chrono::Utc;
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};

use crate::shared::data::db::get_connection;

pub async fn load(form_key: &str) -> anyhow::Result<Option<String>> {
    let row = get_connection()
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT settings_json FROM user_form_settings WHERE form_key = ?",
            vec![form_key.into()],
        ))
        .await?;
    match row {
        Some(row) => Ok(Some(row.try_get("", "settings_json")?)),
        None => Ok(None),
    }
}

pub async fn save(form_key: &str, settings_json: &str) -> anyhow::Result<()> {
    let query = r#"
        INSERT INTO user_form_settings (form_key, settings_json, updated_at)
        VALUES (?, ?, ?)
        ON CONFLICT(form_key) DO UPDATE SET
            settings_json = excluded.settings_json,
            updated_at = excluded.updated_at
    "#;
    get_connection()
        .execute(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            query,
            vec![
                form_key.into(),
                settings_json.into(),
                Utc::now().to_rfc3339().into(),
            ],
        ))
        .await?;
    Ok(())
}
