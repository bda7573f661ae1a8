//! Tracing setup and the per-request access log

use axum::body::{to_bytes, Body};
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// SQL statement logs off, application logs on
const DEFAULT_FILTER: &str = "info,sqlx=warn,sea_orm=warn";

/// Log to stdout and to `<log_dir>/backend.log`. `RUST_LOG` overrides the filter.
pub fn init(log_dir: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(log_dir)?;
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("backend.log"))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Arc::new(log_file))
                .with_ansi(false),
        )
        .init();
    Ok(())
}

/// Byte counts with dot thousands separators, e.g. 1234567 -> "1.234.567"
pub fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// One line per request: status, method, path, duration and body size
pub async fn access_log(req: Request<Body>, next: Next) -> Response {
    let started = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let (parts, body) = next.run(req).await.into_parts();
    let elapsed_ms = started.elapsed().as_millis() as u64;

    match to_bytes(body, usize::MAX).await {
        Ok(bytes) => {
            let size = group_thousands(bytes.len());
            if parts.status.is_success() {
                tracing::info!(status = parts.status.as_u16(), %method, %path, elapsed_ms, size = %size, "request");
            } else {
                tracing::warn!(status = parts.status.as_u16(), %method, %path, elapsed_ms, size = %size, "request");
            }
            Response::from_parts(parts, Body::from(bytes))
        }
        Err(e) => {
            tracing::error!(status = parts.status.as_u16(), %method, %path, elapsed_ms, "response body unreadable: {}", e);
            Response::from_parts(parts, Body::empty())
        }
    }
}
