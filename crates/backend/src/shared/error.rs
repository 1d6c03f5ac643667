use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Ошибка HTTP-обработчика. Тело ответа: `{"error": "..."}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Не найдено")]
    NotFound,

    #[error("{0}")]
    BadRequest(String),

    /// Ошибка проверки агрегата, текст показывается пользователю
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Internal(anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Сервисы возвращают `anyhow::Result`. Если внутри лежит `ApiError`,
/// он извлекается, иначе ошибка считается внутренней.
impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast::<ApiError>() {
            Ok(api) => api,
            Err(other) => ApiError::Internal(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let ApiError::Internal(e) = &self {
            tracing::error!("Internal error: {:?}", e);
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Ошибка проверки для сервисного слоя
pub fn validation(message: impl Into<String>) -> anyhow::Error {
    ApiError::Validation(message.into()).into()
}

pub fn not_found() -> anyhow::Error {
    ApiError::NotFound.into()
}

/// Разбор id из пути
pub fn parse_id(id: &str) -> Result<uuid::Uuid, ApiError> {
    uuid::Uuid::parse_str(id).map_err(|_| ApiError::BadRequest(format!("Некорректный id: {}", id)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_survives_anyhow_roundtrip() {
        let err: ApiError = validation("Имя клиента не может быть пустым").into();
        assert!(matches!(err, ApiError::Validation(_)));
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.to_string(), "Имя клиента не может быть пустым");
    }

    #[test]
    fn other_errors_are_internal() {
        let err: ApiError = anyhow::anyhow!("disk full").into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let err: ApiError = not_found().into();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn bad_ids_are_rejected() {
        assert!(parse_id("not-a-uuid").is_err());
        assert!(parse_id(&uuid::Uuid::new_v4().to_string()).is_ok());
    }
}
