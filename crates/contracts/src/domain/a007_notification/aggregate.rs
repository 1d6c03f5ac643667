use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::enums::notification_channel::{NotificationChannel, NotificationStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

crate::uuid_aggregate_id!(NotificationId);

/// Тестовое уведомление
///
/// `base.description` хранит заголовок. Доставка не выполняется: "отправка"
/// проверяет получателя и фиксирует событие в журнале.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    #[serde(flatten)]
    pub base: BaseAggregate<NotificationId>,

    pub body: String,
    pub channel: NotificationChannel,
    /// Токен, телефон, e-mail или топик, в зависимости от канала
    pub target: String,
    pub status: NotificationStatus,
    pub sent_at: Option<DateTime<Utc>>,
    pub error: Option<String>,
}

impl Notification {
    pub fn new_for_insert(code: String, dto: &NotificationDto) -> Self {
        let base = BaseAggregate::new(
            NotificationId::new_v4(),
            code,
            dto.title.trim().to_string(),
        );
        Self {
            base,
            body: dto.body.trim().to_string(),
            channel: dto.channel,
            target: dto.target.trim().to_string(),
            status: NotificationStatus::Draft,
            sent_at: None,
            error: None,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn title(&self) -> &str {
        &self.base.description
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Заголовок не может быть пустым".into());
        }
        if self.body.trim().is_empty() {
            return Err("Текст уведомления не может быть пустым".into());
        }
        Ok(())
    }

    /// Проверить получателя и перевести в `Recorded` либо `Failed`.
    ///
    /// Возвращает текст ошибки, если получатель не подходит каналу.
    pub fn mark_sent(&mut self, now: DateTime<Utc>) -> Result<(), String> {
        self.sent_at = Some(now);
        match validate_target(self.channel, &self.target) {
            Ok(()) => {
                self.status = NotificationStatus::Recorded;
                self.error = None;
                Ok(())
            }
            Err(e) => {
                self.status = NotificationStatus::Failed;
                self.error = Some(e.clone());
                Err(e)
            }
        }
    }

    pub fn before_write(&mut self) {
        self.base.before_write();
    }
}

/// Формат получателя для канала
pub fn validate_target(channel: NotificationChannel, target: &str) -> Result<(), String> {
    let target = target.trim();
    if target.is_empty() {
        return Err("Получатель не указан".into());
    }
    match channel {
        NotificationChannel::Sms => {
            let digits = target.strip_prefix('+').unwrap_or(target);
            if !digits.chars().all(|c| c.is_ascii_digit()) || !(7..=15).contains(&digits.len()) {
                return Err(format!(
                    "Номер телефона должен содержать от 7 до 15 цифр: \"{}\"",
                    target
                ));
            }
        }
        NotificationChannel::Email => {
            let mut parts = target.split('@');
            let ok = match (parts.next(), parts.next(), parts.next()) {
                (Some(local), Some(domain), None) => {
                    !local.is_empty()
                        && domain.contains('.')
                        && !domain.starts_with('.')
                        && !domain.ends_with('.')
                }
                _ => false,
            };
            if !ok {
                return Err(format!("Некорректный e-mail: \"{}\"", target));
            }
        }
        NotificationChannel::Push | NotificationChannel::Chat => {}
    }
    Ok(())
}

impl AggregateRoot for Notification {
    type Id = NotificationId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn code(&self) -> &str {
        &self.base.code
    }

    fn description(&self) -> &str {
        &self.base.description
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.base.metadata
    }

    fn aggregate_index() -> &'static str {
        "a007"
    }

    fn collection_name() -> &'static str {
        "notification"
    }

    fn element_name() -> &'static str {
        "Уведомление"
    }

    fn list_name() -> &'static str {
        "Уведомления"
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotificationDto {
    pub title: String,
    pub body: String,
    pub channel: NotificationChannel,
    pub target: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sms_targets() {
        assert!(validate_target(NotificationChannel::Sms, "+79991234567").is_ok());
        assert!(validate_target(NotificationChannel::Sms, "1234567").is_ok());
        assert!(validate_target(NotificationChannel::Sms, "123456").is_err());
        assert!(validate_target(NotificationChannel::Sms, "+7 999 123").is_err());
        assert!(validate_target(NotificationChannel::Sms, "1234567890123456").is_err());
    }

    #[test]
    fn email_targets() {
        assert!(validate_target(NotificationChannel::Email, "a@b.ru").is_ok());
        assert!(validate_target(NotificationChannel::Email, "a@b").is_err());
        assert!(validate_target(NotificationChannel::Email, "@b.ru").is_err());
        assert!(validate_target(NotificationChannel::Email, "a@@b.ru").is_err());
    }

    #[test]
    fn push_and_chat_only_need_a_value() {
        assert!(validate_target(NotificationChannel::Push, "topic-all").is_ok());
        assert!(validate_target(NotificationChannel::Chat, "  ").is_err());
    }

    #[test]
    fn mark_sent_sets_status() {
        let mut n = Notification::new_for_insert(
            "N-1".into(),
            &NotificationDto {
                title: "Напоминание".into(),
                body: "Ждём вас завтра в 10:00".into(),
                channel: NotificationChannel::Email,
                target: "not-an-email".into(),
            },
        );
        assert!(n.validate().is_ok());
        assert!(n.mark_sent(Utc::now()).is_err());
        assert_eq!(n.status, NotificationStatus::Failed);
        assert!(n.error.is_some());

        n.target = "client@example.com".into();
        assert!(n.mark_sent(Utc::now()).is_ok());
        assert_eq!(n.status, NotificationStatus::Recorded);
        assert!(n.error.is_none());
    }
}
