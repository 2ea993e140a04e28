use axum::body::Body;
use axum::http::{header, HeaderMap, Request};
use axum::middleware::Next;
use axum::response::Response;

/// Форматирование чисел с разделителями триад
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('.');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Размер ответа из заголовка Content-Length, если он есть
pub fn response_size(headers: &HeaderMap) -> Option<usize> {
    headers
        .get(header::CONTENT_LENGTH)?
        .to_str()
        .ok()?
        .trim()
        .parse()
        .ok()
}

fn size_label(headers: &HeaderMap) -> String {
    match response_size(headers) {
        Some(n) => format_number(n),
        None => "stream".to_string(),
    }
}

/// Простой middleware для логирования запросов: время, размер, статус, путь.
/// Тело ответа не буферизуется
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;
    let status = response.status();
    let size = size_label(response.headers());

    if status.is_success() || status.is_redirection() {
        tracing::info!(
            "{:>5}ms | {:>12} | {} {:>6} {}",
            start.elapsed().as_millis(),
            size,
            status.as_u16(),
            method,
            uri.path()
        );
    } else {
        tracing::warn!(
            "{:>5}ms | {:>12} | {} {:>6} {}",
            start.elapsed().as_millis(),
            size,
            status.as_u16(),
            method,
            uri.path()
        );
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1.000");
        assert_eq!(format_number(1234567), "1.234.567");
    }

    #[test]
    fn test_response_size_from_content_length() {
        let mut headers = HeaderMap::new();
        assert_eq!(response_size(&headers), None);
        assert_eq!(size_label(&headers), "stream");

        headers.insert(header::CONTENT_LENGTH, HeaderValue::from_static("12345"));
        assert_eq!(response_size(&headers), Some(12345));
        assert_eq!(size_label(&headers), "12.345");

        headers.insert(header::CONTENT_LENGTH, HeaderValue::from_static("garbage"));
        assert_eq!(response_size(&headers), None);
    }
}
