use super::repository;
use crate::shared::data::changes;
use crate::shared::error::{not_found, validation};
use crate::shared::format::short_code;
use crate::shared::logger::{self, CATEGORY_NOTIFICATION};
use chrono::Utc;
use contracts::domain::a007_notification::aggregate::{Notification, NotificationDto};
use contracts::domain::common::AggregateRoot;
use uuid::Uuid;

/// Сохранить черновик
pub async fn create(dto: NotificationDto) -> anyhow::Result<Uuid> {
    let mut aggregate = Notification::new_for_insert(short_code("NT"), &dto);
    aggregate.validate().map_err(validation)?;
    aggregate.before_write();

    let id = repository::insert(&aggregate).await?;
    changes::notify(Notification::collection_name());
    Ok(id)
}

/// Тестовая отправка: проверка получателя и запись в журнал.
///
/// Неудача тоже сохраняется (статус `Failed` с текстом ошибки), поэтому
/// функция возвращает уведомление в обоих случаях.
pub async fn send_test(id: Uuid) -> anyhow::Result<Notification> {
    let mut aggregate = repository::get_by_id(id)
        .await?
        .filter(|n| !n.base.metadata.is_deleted)
        .ok_or_else(not_found)?;
    aggregate.validate().map_err(validation)?;

    let result = aggregate.mark_sent(Utc::now());
    aggregate.before_write();
    repository::update(&aggregate).await?;
    changes::notify(Notification::collection_name());

    match result {
        Ok(()) => logger::log(
            CATEGORY_NOTIFICATION,
            &format!(
                "{} [{}] → {}: {}",
                aggregate.base.code,
                aggregate.channel.display_name(),
                aggregate.target,
                aggregate.title()
            ),
        ),
        Err(e) => tracing::warn!("Test notification {} rejected: {}", aggregate.base.code, e),
    }
    Ok(aggregate)
}

pub async fn delete(id: Uuid) -> anyhow::Result<bool> {
    let deleted = repository::soft_delete(id).await?;
    if deleted {
        changes::notify(Notification::collection_name());
    }
    Ok(deleted)
}

pub async fn clear_history() -> anyhow::Result<u64> {
    let removed = repository::delete_all().await?;
    changes::notify(Notification::collection_name());
    logger::log(
        CATEGORY_NOTIFICATION,
        &format!("История тестовых уведомлений очищена ({} шт.)", removed),
    );
    Ok(removed)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Notification>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> anyhow::Result<Vec<Notification>> {
    repository::list_all().await
}
