use contracts::dashboards::d400_schedule_board::{SlotRange, SLOT_MINUTES};
use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;

static CONFIG: OnceCell<Config> = OnceCell::new();

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub schedule: ScheduleConfig,
    #[serde(default)]
    pub maintenance: MaintenanceConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 3000,
        }
    }
}

/// Диапазон сетки расписания. Шаг сетки фиксирован: 15 минут.
#[derive(Debug, Deserialize, Clone)]
pub struct ScheduleConfig {
    pub start_hour: u32,
    pub end_hour: u32,
    pub slot_minutes: i32,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            start_hour: 0,
            end_hour: 24,
            slot_minutes: SLOT_MINUTES,
        }
    }
}

impl ScheduleConfig {
    pub fn slot_range(&self) -> anyhow::Result<SlotRange> {
        SlotRange::new(self.start_hour, self.end_hour).map_err(|e| anyhow::anyhow!(e))
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct MaintenanceConfig {
    /// Cron-выражение с секундами: "sec min hour day month weekday"
    pub cron: String,
    pub log_retention_days: i64,
}

impl Default for MaintenanceConfig {
    fn default() -> Self {
        Self {
            cron: "0 0 3 * * *".into(),
            log_retention_days: 30,
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[database]
path = "db/salon.db"

[server]
host = "0.0.0.0"
port = 3000

[schedule]
start_hour = 0
end_hour = 24
slot_minutes = 15

[maintenance]
cron = "0 0 3 * * *"
log_retention_days = 30
"#;

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.schedule.slot_minutes != SLOT_MINUTES {
            anyhow::bail!(
                "schedule.slot_minutes = {}: поддерживается только шаг {} минут",
                self.schedule.slot_minutes,
                SLOT_MINUTES
            );
        }
        self.schedule.slot_range()?;
        cron::Schedule::from_str(&self.maintenance.cron).map_err(|e| {
            anyhow::anyhow!("maintenance.cron '{}': {}", self.maintenance.cron, e)
        })?;
        if self.maintenance.log_retention_days < 1 {
            anyhow::bail!("maintenance.log_retention_days должен быть не меньше 1");
        }
        Ok(())
    }
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    config.validate()?;
    Ok(config)
}

/// Load configuration from config.toml
///
/// Search order:
/// 1. Next to the executable
/// 2. Embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

/// Запомнить загруженную конфигурацию для обработчиков
pub fn set_global(config: Config) -> anyhow::Result<()> {
    CONFIG
        .set(config)
        .map_err(|_| anyhow::anyhow!("Configuration already initialized"))
}

/// Диапазон сетки расписания из конфигурации (по умолчанию сутки)
pub fn schedule_range() -> SlotRange {
    CONFIG
        .get()
        .and_then(|c| c.schedule.slot_range().ok())
        .unwrap_or_default()
}

/// Путь к файлу БД. Относительный путь считается от директории исполняемого файла.
pub fn get_database_path(config: &Config) -> PathBuf {
    let db_path = Path::new(&config.database.path);
    if db_path.is_absolute() {
        return db_path.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return exe_dir.join(db_path);
        }
    }

    PathBuf::from(&config.database.path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.database.path, "db/salon.db");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.schedule.slot_range().unwrap(), SlotRange::default());
        assert_eq!(config.maintenance.log_retention_days, 30);
    }

    #[test]
    fn optional_sections_fall_back() {
        let config = parse_config("[database]\npath = \"x.db\"\n").unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.schedule.end_hour, 24);
        assert_eq!(config.maintenance.cron, "0 0 3 * * *");
    }

    #[test]
    fn slot_size_other_than_15_is_rejected() {
        let toml = r#"
[database]
path = "x.db"

[schedule]
start_hour = 8
end_hour = 20
slot_minutes = 30
"#;
        assert!(parse_config(toml).is_err());
    }

    #[test]
    fn inverted_hours_are_rejected() {
        let toml = r#"
[database]
path = "x.db"

[schedule]
start_hour = 20
end_hour = 8
slot_minutes = 15
"#;
        assert!(parse_config(toml).is_err());
    }

    #[test]
    fn absolute_database_path_is_kept() {
        let mut config = parse_config(DEFAULT_CONFIG).unwrap();
        let abs = std::env::temp_dir().join("salon.db");
        config.database.path = abs.to_string_lossy().into_owned();
        assert_eq!(get_database_path(&config), abs);
    }
}
