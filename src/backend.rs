//! Static host for the built site.
//!
//! Serves the Trunk output directory with an SPA-style index fallback.
//! Configuration comes from the environment; logs are one JSON object
//! per line.

use axum::{routing::get, Router};
use serde_json::json;
use std::time::{SystemTime, UNIX_EPOCH};
use tower_http::services::{ServeDir, ServeFile};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_STATIC_DIR: &str = "dist";
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum LogLevel {
    Debug,
    Info,
}

impl LogLevel {
    fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value {
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            _ => None,
        }
    }
}

#[derive(Clone)]
struct RuntimeConfig {
    port: u16,
    static_dir: String,
    log_level: LogLevel,
}

impl RuntimeConfig {
    fn from_env() -> Self {
        Self {
            port: parse_port(std::env::var("PORT").ok()),
            static_dir: std::env::var("FOLIO_STATIC_DIR")
                .ok()
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string()),
            log_level: parse_log_level(std::env::var("FOLIO_LOG_LEVEL").ok()),
        }
    }
}

fn parse_port(raw: Option<String>) -> u16 {
    raw.and_then(|value| value.trim().parse::<u16>().ok())
        .filter(|port| *port != 0)
        .unwrap_or(DEFAULT_PORT)
}

fn parse_log_level(raw: Option<String>) -> LogLevel {
    raw.as_deref()
        .map(str::trim)
        .and_then(LogLevel::parse)
        .unwrap_or(DEFAULT_LOG_LEVEL)
}

fn log_event(config: &RuntimeConfig, level: LogLevel, event: &str, fields: serde_json::Value) {
    if level < config.log_level {
        return;
    }

    let mut payload = serde_json::Map::new();
    payload.insert("ts".to_string(), json!(now_unix_seconds()));
    payload.insert("level".to_string(), json!(level.as_str()));
    payload.insert("event".to_string(), json!(event));

    if let serde_json::Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    println!("{}", serde_json::Value::Object(payload));
}

fn now_unix_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0)
}

async fn healthz() -> &'static str {
    "ok"
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = RuntimeConfig::from_env();

    let index_path = format!("{}/index.html", config.static_dir);
    let static_service =
        ServeDir::new(&config.static_dir).not_found_service(ServeFile::new(&index_path));

    let app = Router::new()
        .route("/healthz", get(healthz))
        .fallback_service(static_service);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    log_event(
        &config,
        LogLevel::Info,
        "server_started",
        json!({ "port": config.port, "static_dir": config.static_dir }),
    );
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_parsing_falls_back_on_garbage() {
        assert_eq!(parse_port(None), DEFAULT_PORT);
        assert_eq!(parse_port(Some("not-a-port".to_string())), DEFAULT_PORT);
        assert_eq!(parse_port(Some("0".to_string())), DEFAULT_PORT);
        assert_eq!(parse_port(Some(" 3000 ".to_string())), 3000);
    }

    #[test]
    fn log_level_parsing_and_ordering() {
        assert_eq!(parse_log_level(Some("debug".to_string())), LogLevel::Debug);
        assert_eq!(parse_log_level(Some("info".to_string())), LogLevel::Info);
        assert_eq!(parse_log_level(Some("loud".to_string())), DEFAULT_LOG_LEVEL);
        assert_eq!(parse_log_level(None), DEFAULT_LOG_LEVEL);
        assert!(LogLevel::Debug < LogLevel::Info);
    }

    #[tokio::test]
    async fn health_route_reports_ok() {
        assert_eq!(healthz().await, "ok");
    }
}
