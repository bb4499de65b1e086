use crate::errors::AppError;

const DEFAULT_PORT: u16 = 8000;

/// Process settings read from the environment (and `.env`, see `main`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    /// Serve Swagger UI and the OpenAPI JSON.
    pub docs_enabled: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            docs_enabled: true,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env` with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let port = match lookup("APP_PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| AppError::configuration("APP_PORT must be a valid port number"))?,
            None => DEFAULT_PORT,
        };

        let docs_enabled = match lookup("APP_DOCS") {
            Some(value) => parse_flag(&value)
                .ok_or_else(|| AppError::configuration("APP_DOCS must be true or false"))?,
            None => true,
        };

        Ok(Self { port, docs_enabled })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
