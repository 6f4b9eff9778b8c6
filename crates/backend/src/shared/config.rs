use serde::Deserialize;
use std::net::SocketAddr;

/// Environment variable overriding `upstream.base_url`
pub const API_URL_ENV: &str = "API_URL";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UpstreamConfig {
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Загрузка справочников для таблицы распределения
#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    pub limit: u32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self { limit: 1000 }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct DisplayConfig {
    /// Смещение часового пояса для дат с временем (IST = 330)
    pub utc_offset_minutes: i32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            utc_offset_minutes: 330,
        }
    }
}

fn default_timeout_secs() -> u64 {
    60
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000

[upstream]
base_url = "http://localhost:8080"
timeout_secs = 60
"#;

impl Config {
    /// Embedded default configuration
    pub fn embedded() -> anyhow::Result<Config> {
        Ok(toml::from_str(DEFAULT_CONFIG)?)
    }

    pub fn bind_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.server.host, self.server.port);
        addr.parse()
            .map_err(|e| anyhow::anyhow!("Invalid server address {}: {}", addr, e))
    }

    fn apply_api_url_override(&mut self, value: Option<String>) {
        if let Some(url) = value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) {
            tracing::info!("Upstream base URL overridden by {}: {}", API_URL_ENV, url);
            self.upstream.base_url = url;
        }
    }
}

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
///
/// `API_URL` overrides the upstream base URL in both cases.
pub fn load_config() -> anyhow::Result<Config> {
    let mut config = match find_config_file()? {
        Some(config) => config,
        None => {
            tracing::info!("Using default embedded configuration");
            Config::embedded()?
        }
    };

    config.apply_api_url_override(std::env::var(API_URL_ENV).ok());
    Ok(config)
}

fn find_config_file() -> anyhow::Result<Option<Config>> {
    let Ok(exe_path) = std::env::current_exe() else {
        return Ok(None);
    };
    let Some(exe_dir) = exe_path.parent() else {
        return Ok(None);
    };

    let config_path = exe_dir.join("config.toml");
    if !config_path.exists() {
        tracing::warn!("config.toml not found at: {}", config_path.display());
        return Ok(None);
    }

    tracing::info!("Loading config from: {}", config_path.display());
    let contents = std::fs::read_to_string(&config_path)?;
    Ok(Some(toml::from_str(&contents)?))
}
