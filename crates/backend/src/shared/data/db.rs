use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};
use std::path::Path;

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

/// Схема: (таблица, CREATE TABLE). Таблицы создаются при старте, если их нет.
const TABLES: &[(&str, &str)] = &[
    (
        "a001_branch",
        r#"
        CREATE TABLE a001_branch (
            id TEXT PRIMARY KEY NOT NULL,
            code TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL,
            comment TEXT,
            address TEXT NOT NULL DEFAULT '',
            phone TEXT,
            is_active INTEGER NOT NULL DEFAULT 1,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
        "#,
    ),
    (
        "a002_staff",
        r#"
        CREATE TABLE a002_staff (
            id TEXT PRIMARY KEY NOT NULL,
            code TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL,
            comment TEXT,
            branch_ref TEXT NOT NULL,
            position TEXT NOT NULL DEFAULT '',
            phone TEXT,
            sort_order INTEGER NOT NULL DEFAULT 100,
            is_active INTEGER NOT NULL DEFAULT 1,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
        "#,
    ),
    (
        "a003_salon_service",
        r#"
        CREATE TABLE a003_salon_service (
            id TEXT PRIMARY KEY NOT NULL,
            code TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL,
            comment TEXT,
            category TEXT NOT NULL DEFAULT '',
            price REAL NOT NULL DEFAULT 0,
            duration_minutes INTEGER NOT NULL DEFAULT 60,
            is_active INTEGER NOT NULL DEFAULT 1,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
        "#,
    ),
    (
        "a004_product",
        r#"
        CREATE TABLE a004_product (
            id TEXT PRIMARY KEY NOT NULL,
            code TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL,
            comment TEXT,
            category TEXT NOT NULL DEFAULT '',
            brand TEXT NOT NULL DEFAULT '',
            price REAL NOT NULL DEFAULT 0,
            stock_qty INTEGER NOT NULL DEFAULT 0,
            image_url TEXT,
            is_active INTEGER NOT NULL DEFAULT 1,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
        "#,
    ),
    (
        "a005_membership",
        r#"
        CREATE TABLE a005_membership (
            id TEXT PRIMARY KEY NOT NULL,
            code TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL,
            comment TEXT,
            customer_phone TEXT,
            tier TEXT NOT NULL DEFAULT 'basic',
            start_date TEXT NOT NULL,
            end_date TEXT NOT NULL,
            visits_total INTEGER NOT NULL DEFAULT 0,
            visits_used INTEGER NOT NULL DEFAULT 0,
            price REAL NOT NULL DEFAULT 0,
            is_frozen INTEGER NOT NULL DEFAULT 0,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
        "#,
    ),
    (
        "a006_booking",
        r#"
        CREATE TABLE a006_booking (
            id TEXT PRIMARY KEY NOT NULL,
            code TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL,
            comment TEXT,
            customer_phone TEXT,
            services_json TEXT NOT NULL DEFAULT '[]',
            booking_date TEXT NOT NULL,
            booking_time TEXT NOT NULL,
            branch_ref TEXT NOT NULL,
            branch_name TEXT NOT NULL DEFAULT '',
            staff_ref TEXT NOT NULL,
            staff_name TEXT NOT NULL DEFAULT '',
            status TEXT NOT NULL DEFAULT 'pending',
            total_price REAL NOT NULL DEFAULT 0,
            total_duration INTEGER NOT NULL DEFAULT 0,
            payment_method TEXT,
            payment_details_json TEXT NOT NULL DEFAULT '[]',
            tip_amount REAL NOT NULL DEFAULT 0,
            discount REAL NOT NULL DEFAULT 0,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
        "#,
    ),
    (
        "a007_notification",
        r#"
        CREATE TABLE a007_notification (
            id TEXT PRIMARY KEY NOT NULL,
            code TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL,
            comment TEXT,
            body TEXT NOT NULL,
            channel TEXT NOT NULL,
            target TEXT NOT NULL DEFAULT '',
            status TEXT NOT NULL DEFAULT 'draft',
            sent_at TEXT,
            error TEXT,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
        "#,
    ),
    (
        "system_log",
        r#"
        CREATE TABLE system_log (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            timestamp TEXT NOT NULL,
            source TEXT NOT NULL,
            category TEXT NOT NULL,
            message TEXT NOT NULL
        );
        "#,
    ),
    (
        "user_form_settings",
        r#"
        CREATE TABLE user_form_settings (
            form_key TEXT PRIMARY KEY NOT NULL,
            settings_json TEXT NOT NULL,
            updated_at TEXT
        );
        "#,
    ),
];

/// Индексы для выборок сетки расписания
const INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_a006_booking_date ON a006_booking (booking_date);",
    "CREATE INDEX IF NOT EXISTS idx_a006_booking_branch ON a006_booking (branch_ref, booking_date);",
    "CREATE INDEX IF NOT EXISTS idx_a002_staff_branch ON a002_staff (branch_ref);",
];

/// sqlite URL из пути к файлу (с учётом путей Windows)
pub fn sqlite_url(path: &Path) -> String {
    let normalized = path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    format!("sqlite://{}{}?mode=rwc", prefix, normalized)
}

async fn table_exists(conn: &DatabaseConnection, table: &str) -> anyhow::Result<bool> {
    let rows = conn
        .query_all(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT name FROM sqlite_master WHERE type='table' AND name = ?;",
            vec![table.into()],
        ))
        .await?;
    Ok(!rows.is_empty())
}

/// Создать недостающие таблицы
pub async fn ensure_schema(conn: &DatabaseConnection) -> anyhow::Result<()> {
    for (table, create_sql) in TABLES {
        if !table_exists(conn, table).await? {
            tracing::info!("Creating {} table", table);
            conn.execute(Statement::from_string(
                DatabaseBackend::Sqlite,
                create_sql.to_string(),
            ))
            .await?;
        }
    }
    for sql in INDEXES {
        conn.execute(Statement::from_string(DatabaseBackend::Sqlite, sql.to_string()))
            .await?;
    }
    Ok(())
}

pub async fn initialize_database(db_file: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if db_file.is_absolute() {
        db_file.to_path_buf()
    } else {
        std::env::current_dir()?.join(db_file)
    };
    let db_url = sqlite_url(&absolute_path);
    tracing::info!("Opening database {}", absolute_path.display());
    let conn = Database::connect(&db_url).await?;

    ensure_schema(&conn).await?;

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Failed to set DB_CONN"))?;
    Ok(())
}

pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN
        .get()
        .expect("Database connection has not been initialized")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unix_paths_become_sqlite_urls() {
        assert_eq!(
            sqlite_url(Path::new("/var/lib/salon/salon.db")),
            "sqlite:///var/lib/salon/salon.db?mode=rwc"
        );
    }

    #[test]
    fn windows_paths_get_leading_slash() {
        assert_eq!(
            sqlite_url(Path::new("C:\\salon\\salon.db")),
            "sqlite:///C:/salon/salon.db?mode=rwc"
        );
    }

    #[test]
    fn every_table_has_create_statement() {
        for (table, sql) in TABLES {
            assert!(sql.contains(&format!("CREATE TABLE {} (", table)), "{}", table);
        }
    }

    #[tokio::test]
    async fn schema_bootstrap_is_idempotent() {
        let path = std::env::temp_dir().join(format!("salon-schema-{}.db", uuid::Uuid::new_v4()));
        let conn = Database::connect(&sqlite_url(&path)).await.unwrap();
        ensure_schema(&conn).await.unwrap();
        ensure_schema(&conn).await.unwrap();
        for (table, _) in TABLES {
            assert!(table_exists(&conn, table).await.unwrap());
        }
        drop(conn);
        let _ = std::fs::remove_file(&path);
    }
}
