use serde::{Deserialize, Serialize};

/// Канал тестового уведомления
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum NotificationChannel {
    #[default]
    Push,
    Sms,
    Email,
    Chat,
}

impl NotificationChannel {
    pub fn code(&self) -> &'static str {
        match self {
            NotificationChannel::Push => "push",
            NotificationChannel::Sms => "sms",
            NotificationChannel::Email => "email",
            NotificationChannel::Chat => "chat",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            NotificationChannel::Push => "Push",
            NotificationChannel::Sms => "SMS",
            NotificationChannel::Email => "E-mail",
            NotificationChannel::Chat => "Чат",
        }
    }

    /// Подсказка для поля "получатель"
    pub fn target_hint(&self) -> &'static str {
        match self {
            NotificationChannel::Push => "FCM-токен или топик",
            NotificationChannel::Sms => "+79991234567",
            NotificationChannel::Email => "client@example.com",
            NotificationChannel::Chat => "ID чата",
        }
    }

    pub fn all() -> Vec<NotificationChannel> {
        vec![
            NotificationChannel::Push,
            NotificationChannel::Sms,
            NotificationChannel::Email,
            NotificationChannel::Chat,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|c| c.code() == code)
    }
}

/// Статус тестового уведомления
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum NotificationStatus {
    #[default]
    Draft,
    Recorded,
    Failed,
}

impl NotificationStatus {
    pub fn code(&self) -> &'static str {
        match self {
            NotificationStatus::Draft => "draft",
            NotificationStatus::Recorded => "recorded",
            NotificationStatus::Failed => "failed",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            NotificationStatus::Draft => "Черновик",
            NotificationStatus::Recorded => "Отправлено (тест)",
            NotificationStatus::Failed => "Ошибка",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "draft" => Some(NotificationStatus::Draft),
            "recorded" => Some(NotificationStatus::Recorded),
            "failed" => Some(NotificationStatus::Failed),
            _ => None,
        }
    }
}
