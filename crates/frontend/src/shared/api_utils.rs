//! Утилиты обращения к backend
//!
//! Все запросы идут через gloo-net. Ошибка backend приходит телом
//! `{"error": "..."}`, текст из него показывается пользователю как есть.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Базовый URL backend: тот же хост, порт 3000
///
/// # Example
/// ```ignore
/// let url = format!("{}/api/booking/{}", api_base(), id);
/// ```
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Полный URL по пути вида "/api/..."
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Текст ошибки из тела ответа; если тело не JSON, то код статуса
pub fn error_message(status: u16, body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) if !parsed.error.is_empty() => parsed.error,
        _ if status == 404 => "Не найдено".to_string(),
        _ => format!("Ошибка сервера: HTTP {}", status),
    }
}

async fn check(response: Response) -> Result<Response, String> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(error_message(status, &body))
}

fn network_error(e: gloo_net::Error) -> String {
    format!("Ошибка сети: {}", e)
}

/// GET и разбор JSON
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = Request::get(&api_url(path))
        .header("Cache-Control", "no-cache")
        .send()
        .await
        .map_err(network_error)?;
    check(response)
        .await?
        .json::<T>()
        .await
        .map_err(|e| format!("Ошибка разбора ответа: {}", e))
}

/// GET с параметрами запроса, сериализованными через serde_qs
pub async fn get_json_with_query<Q: Serialize, T: DeserializeOwned>(
    path: &str,
    query: &Q,
) -> Result<T, String> {
    get_json(&with_query(path, query)?).await
}

/// GET текстом (CSV-выгрузка)
pub async fn get_text(path: &str) -> Result<String, String> {
    let response = Request::get(&api_url(path))
        .send()
        .await
        .map_err(network_error)?;
    check(response)
        .await?
        .text()
        .await
        .map_err(|e| format!("Ошибка чтения ответа: {}", e))
}

/// Путь с query-строкой; пустые поля `Option` не попадают в строку
pub fn with_query<Q: Serialize>(path: &str, query: &Q) -> Result<String, String> {
    let qs = serde_qs::to_string(query).map_err(|e| format!("Ошибка параметров: {}", e))?;
    Ok(if qs.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, qs)
    })
}

/// POST с JSON телом, ответ разбирается как `R`
pub async fn post_json<B: Serialize, R: DeserializeOwned>(path: &str, body: &B) -> Result<R, String> {
    let response = Request::post(&api_url(path))
        .json(body)
        .map_err(|e| format!("Ошибка сериализации: {}", e))?
        .send()
        .await
        .map_err(network_error)?;
    check(response)
        .await?
        .json::<R>()
        .await
        .map_err(|e| format!("Ошибка разбора ответа: {}", e))
}

/// POST без содержательного ответа
pub async fn post_empty<B: Serialize>(path: &str, body: &B) -> Result<(), String> {
    let response = Request::post(&api_url(path))
        .json(body)
        .map_err(|e| format!("Ошибка сериализации: {}", e))?
        .send()
        .await
        .map_err(network_error)?;
    check(response).await.map(|_| ())
}

/// PUT с JSON телом
pub async fn put_json<B: Serialize>(path: &str, body: &B) -> Result<(), String> {
    let response = Request::put(&api_url(path))
        .json(body)
        .map_err(|e| format!("Ошибка сериализации: {}", e))?
        .send()
        .await
        .map_err(network_error)?;
    check(response).await.map(|_| ())
}

pub async fn delete(path: &str) -> Result<(), String> {
    let response = Request::delete(&api_url(path))
        .send()
        .await
        .map_err(network_error)?;
    check(response).await.map(|_| ())
}

/// Ответ POST-upsert: `{"id": "..."}`
#[derive(Debug, Clone, Deserialize)]
pub struct SavedId {
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize, Default)]
    struct Q {
        #[serde(skip_serializing_if = "Option::is_none")]
        date: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        branch: Option<String>,
    }

    #[test]
    fn error_message_prefers_backend_text() {
        assert_eq!(
            error_message(422, r#"{"error":"Имя клиента не может быть пустым"}"#),
            "Имя клиента не может быть пустым"
        );
        assert_eq!(error_message(404, ""), "Не найдено");
        assert_eq!(error_message(500, "<html>"), "Ошибка сервера: HTTP 500");
    }

    #[test]
    fn query_string_is_appended_only_when_needed() {
        assert_eq!(with_query("/api/booking", &Q::default()).unwrap(), "/api/booking");
        let q = Q {
            date: Some("2025-05-01".into()),
            branch: None,
        };
        let url = with_query("/api/d400/schedule-board", &q).unwrap();
        assert!(url.starts_with("/api/d400/schedule-board?"));
        assert!(url.contains("date=2025-05-01"));
    }
}
