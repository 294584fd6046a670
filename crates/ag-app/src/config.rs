use std::env;
use log::info;
use crate::error::AppError;

const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:5001";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the ad generator; `/generate-ads` is appended
    pub backend_url: String,
    pub window_width: f64,
    pub window_height: f64,
}

impl AppConfig {
    /// Reads `.env` (if present) and the process environment.
    pub fn load() -> anyhow::Result<Self> {
        match dotenvy::dotenv() {
            Ok(path) => info!("Loaded environment from {}", path.display()),
            Err(e) if e.not_found() => {}
            Err(e) => return Err(e.into()),
        }

        Ok(Self::from_lookup(|key| env::var(key).ok())?)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let backend_url = lookup("AG_BACKEND_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());

        if !(backend_url.starts_with("http://") || backend_url.starts_with("https://")) {
            return Err(AppError::Config(format!(
                "AG_BACKEND_URL must be an http(s) URL, got '{}'",
                backend_url
            )));
        }

        Ok(Self {
            backend_url,
            window_width: parse_size(&lookup, "AG_WINDOW_WIDTH", 1200.0)?,
            window_height: parse_size(&lookup, "AG_WINDOW_HEIGHT", 800.0)?,
        })
    }

    pub fn endpoint(&self) -> String {
        format!("{}/generate-ads", self.backend_url)
    }
}

fn parse_size(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: f64) -> Result<f64, AppError> {
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| *v > 0.0)
            .ok_or_else(|| AppError::Config(format!("{} must be a positive number, got '{}'", key, raw))),
    }
}
