use serde::Deserialize;

/// Ключ localStorage с TOML-переопределением конфигурации
pub const CONFIG_STORAGE_KEY: &str = "forecast_portal.config";

const DEFAULT_BASE_URL: &str = "http://localhost:8000";
const DEFAULT_TIMEOUT_MS: u32 = 120_000;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub api: ApiConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Базовый адрес сервиса обработки; если пуст, берётся из window.location
    #[serde(default)]
    pub base_url: String,
    /// Ограничение на каждый сетевой запрос
    #[serde(default = "default_timeout_ms")]
    pub request_timeout_ms: u32,
}

fn default_timeout_ms() -> u32 {
    DEFAULT_TIMEOUT_MS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: DEFAULT_BASE_URL.to_string(),
                request_timeout_ms: DEFAULT_TIMEOUT_MS,
            },
        }
    }
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "http://localhost:8000"
request_timeout_ms = 120000
"#;

pub fn parse_config(contents: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(contents)
}

/// Load configuration
///
/// Search order:
/// 1. TOML document in localStorage under `forecast_portal.config`
/// 2. Falls back to embedded default config
pub fn load_config() -> Config {
    if let Some(contents) = stored_override() {
        match parse_config(&contents) {
            Ok(config) => {
                log::info!("Loading config from localStorage: {}", CONFIG_STORAGE_KEY);
                return config;
            }
            Err(e) => {
                log::warn!("Ignoring invalid config in localStorage: {}", e);
            }
        }
    }

    log::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG).unwrap_or_else(|e| {
        log::error!("Embedded configuration is invalid: {}", e);
        Config::default()
    })
}

fn stored_override() -> Option<String> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(CONFIG_STORAGE_KEY).ok().flatten())
        .filter(|contents| !contents.trim().is_empty())
}
