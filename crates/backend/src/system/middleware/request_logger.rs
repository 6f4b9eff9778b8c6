use axum::body::{to_bytes, Body};
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Middleware для логирования HTTP запросов
///
/// Пишет в лог:
/// - идентификатор запроса
/// - метод и путь
/// - статус код
/// - длительность (ms)
/// - размер ответа (байты)
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let request_id = uuid::Uuid::new_v4();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    // Читаем тело ответа, чтобы узнать реальный размер
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            tracing::warn!(
                %request_id,
                status = parts.status.as_u16(),
                elapsed_ms = start.elapsed().as_millis() as u64,
                "{} {} - failed to read response body: {}",
                method,
                path,
                e
            );
            return Response::from_parts(parts, Body::default());
        }
    };

    let status = parts.status.as_u16();
    let elapsed_ms = start.elapsed().as_millis() as u64;
    let size = bytes.len();

    if parts.status.is_server_error() {
        tracing::warn!(%request_id, status, elapsed_ms, size, "{} {}", method, path);
    } else {
        tracing::info!(%request_id, status, elapsed_ms, size, "{} {}", method, path);
    }

    Response::from_parts(parts, Body::from(bytes))
}
