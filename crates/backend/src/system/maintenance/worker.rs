use chrono::{DateTime, Duration, Utc};
use cron::Schedule;
use std::str::FromStr;
use tracing::{error, info};

use crate::domain::a005_membership;
use crate::shared::config::MaintenanceConfig;
use crate::shared::logger::{self, CATEGORY_MAINTENANCE};

/// За сколько дней назад искать истёкшие абонементы: с запасом на пропущенные запуски
const EXPIRED_LOOKBACK_DAYS: i64 = 7;

/// Фоновое обслуживание по cron-расписанию: журнал истёкших абонементов
/// и очистка старых записей `system_log`.
pub struct MaintenanceWorker {
    schedule: Schedule,
    log_retention_days: i64,
}

impl MaintenanceWorker {
    pub fn new(config: &MaintenanceConfig) -> anyhow::Result<Self> {
        let schedule = Schedule::from_str(&config.cron)
            .map_err(|e| anyhow::anyhow!("maintenance.cron '{}': {}", config.cron, e))?;
        Ok(Self {
            schedule,
            log_retention_days: config.log_retention_days,
        })
    }

    /// Ближайший запуск строго после `now`
    pub fn next_run_after(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        self.schedule.after(&now).next()
    }

    /// Граница удаления журнала для запуска в момент `now`
    pub fn log_cutoff(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now - Duration::days(self.log_retention_days)
    }

    /// Цикл ожидания следующего запуска. Ошибка запуска не останавливает цикл.
    pub async fn run_loop(self) {
        loop {
            let now = Utc::now();
            let Some(next) = self.next_run_after(now) else {
                info!("Maintenance schedule has no upcoming runs, worker stopped");
                return;
            };
            info!("Next maintenance run at {}", next.format("%Y-%m-%d %H:%M:%S UTC"));

            let wait = (next - now).to_std().unwrap_or_default();
            tokio::time::sleep(wait).await;

            if let Err(e) = self.run_once(Utc::now()).await {
                error!("Maintenance run failed: {:?}", e);
                logger::log(CATEGORY_MAINTENANCE, &format!("Ошибка обслуживания: {}", e));
            }
        }
    }

    pub async fn run_once(&self, now: DateTime<Utc>) -> anyhow::Result<()> {
        let expired = a005_membership::service::log_recently_expired(EXPIRED_LOOKBACK_DAYS).await?;
        let purged = logger::repository::purge_older_than(self.log_cutoff(now)).await?;

        logger::log(
            CATEGORY_MAINTENANCE,
            &format!(
                "Обслуживание: истёкших абонементов {}, удалено записей журнала {}",
                expired, purged
            ),
        );
        Ok(())
    }
}

/// Запустить воркер в фоне
pub fn spawn(config: &MaintenanceConfig) -> anyhow::Result<()> {
    let worker = MaintenanceWorker::new(config)?;
    tokio::spawn(worker.run_loop());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn config(cron: &str) -> MaintenanceConfig {
        MaintenanceConfig {
            cron: cron.into(),
            log_retention_days: 30,
        }
    }

    #[test]
    fn daily_schedule_runs_at_three() {
        let worker = MaintenanceWorker::new(&config("0 0 3 * * *")).unwrap();
        let now = Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap();
        assert_eq!(
            worker.next_run_after(now),
            Some(Utc.with_ymd_and_hms(2024, 5, 11, 3, 0, 0).unwrap())
        );

        let early = Utc.with_ymd_and_hms(2024, 5, 10, 1, 30, 0).unwrap();
        assert_eq!(
            worker.next_run_after(early),
            Some(Utc.with_ymd_and_hms(2024, 5, 10, 3, 0, 0).unwrap())
        );
    }

    #[test]
    fn next_run_is_strictly_after_now() {
        let worker = MaintenanceWorker::new(&config("0 0 3 * * *")).unwrap();
        let at_run = Utc.with_ymd_and_hms(2024, 5, 10, 3, 0, 0).unwrap();
        assert_eq!(
            worker.next_run_after(at_run),
            Some(Utc.with_ymd_and_hms(2024, 5, 11, 3, 0, 0).unwrap())
        );
    }

    #[test]
    fn log_cutoff_uses_retention() {
        let worker = MaintenanceWorker::new(&config("0 0 3 * * *")).unwrap();
        let now = Utc.with_ymd_and_hms(2024, 5, 31, 3, 0, 0).unwrap();
        assert_eq!(
            worker.log_cutoff(now),
            Utc.with_ymd_and_hms(2024, 5, 1, 3, 0, 0).unwrap()
        );
    }

    #[test]
    fn invalid_cron_is_rejected() {
        assert!(MaintenanceWorker::new(&config("every night")).is_err());
    }
}
