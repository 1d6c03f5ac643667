use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::middleware::Next;
use axum::response::Response;
use chrono::Local;

use crate::shared::format::format_number;

/// Пути, которые UI опрашивает по таймеру: в консоль попадают только ошибки
const QUIET_PATHS: [&str; 1] = ["/api/changes"];

/// Middleware для логирования HTTP запросов
///
/// Строка в консоли: время, длительность, размер ответа, статус, метод и путь.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    // Тело читается целиком, чтобы узнать реальный размер
    let (size, body) = match to_bytes(body, usize::MAX).await {
        Ok(bytes) => (format_number(bytes.len()), Body::from(bytes)),
        Err(e) => {
            tracing::warn!("{} {}: cannot read response body: {}", method, path, e);
            ("error".to_string(), Body::default())
        }
    };

    if parts.status == StatusCode::OK && QUIET_PATHS.contains(&path.as_str()) {
        return Response::from_parts(parts, body);
    }

    // Голубой для 200, коричневый для остальных
    let color_code = if parts.status == StatusCode::OK { "36" } else { "33" };
    println!(
        "\x1b[{}m{}\x1b[0m | {:>5}ms | {:>12} | {} {:>6} {}",
        color_code,
        Local::now().format("%H:%M:%S"),
        start.elapsed().as_millis(),
        size,
        parts.status.as_u16(),
        method,
        path
    );
    if parts.status.is_server_error() {
        tracing::error!("{} {} -> {}", method, path, parts.status);
    }

    Response::from_parts(parts, body)
}
