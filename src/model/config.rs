use serde::Deserialize;
use std::fs;
use std::path::Path;

const ENV_CONFIG_PATH: &str = "SENTINEL_CONFIG_PATH";
const DEFAULT_CONFIG_PATH: &str = "config.yaml";

const ENV_OPENAI_API_KEY: &str = "OPENAI_API_KEY";
const ENV_FRONTEND_URL: &str = "FRONTEND_URL";

const DEFAULT_FRONTEND_URL: &str = "https://www.wellnesssentinel.ir";

/// CORS configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    /// Allowed origins. "*" allows any origin.
    #[serde(default = "CorsConfig::default_origins")]
    pub origins: Vec<String>,
    #[serde(default = "CorsConfig::default_allow_credentials")]
    pub allow_credentials: bool,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            origins: Self::default_origins(),
            allow_credentials: Self::default_allow_credentials(),
        }
    }
}

impl CorsConfig {
    fn default_origins() -> Vec<String> {
        vec![
            "*".to_string(),
            "http://localhost:3000".to_string(),
            "http://localhost:5173".to_string(),
            "http://127.0.0.1:3000".to_string(),
            "http://127.0.0.1:5173".to_string(),
            DEFAULT_FRONTEND_URL.to_string(),
        ]
    }

    fn default_allow_credentials() -> bool {
        true
    }

    pub fn allows_any_origin(&self) -> bool {
        self.origins.iter().any(|o| o == "*")
    }
}

/// YAML configuration file structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub cors: Option<CorsConfig>,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub cors: CorsConfig,
    pub port: u16,
    pub host: String,
    pub frontend_url: String,
    pub openai_api_key: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cors: CorsConfig::default(),
            port: 8000,
            host: "0.0.0.0".to_string(),
            frontend_url: DEFAULT_FRONTEND_URL.to_string(),
            openai_api_key: None,
        }
    }
}

impl Config {
    /// Load configuration from environment and config file
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8000);

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let frontend_url =
            std::env::var(ENV_FRONTEND_URL).unwrap_or_else(|_| DEFAULT_FRONTEND_URL.to_string());

        let openai_api_key = std::env::var(ENV_OPENAI_API_KEY)
            .ok()
            .filter(|k| !k.is_empty());

        let config_path =
            std::env::var(ENV_CONFIG_PATH).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        let mut cors = Self::load_config_file(&config_path)
            .and_then(|cf| cf.cors)
            .unwrap_or_default();

        // The configured frontend must always be an allowed origin
        if frontend_url != "*" && !cors.origins.contains(&frontend_url) {
            cors.origins.push(frontend_url.clone());
        }

        let config = Self {
            cors,
            port,
            host,
            frontend_url,
            openai_api_key,
        };
        config.validate();
        config
    }

    /// Warn about configuration problems without refusing to start
    fn validate(&self) {
        match &self.openai_api_key {
            None => tracing::warn!("{} not found in environment variables", ENV_OPENAI_API_KEY),
            Some(key) if !key.starts_with("sk-") => {
                tracing::warn!("{} format appears invalid", ENV_OPENAI_API_KEY)
            }
            Some(_) => {}
        }
    }

    /// Check if the OpenAI key is present and plausibly formatted
    pub fn has_valid_openai_key(&self) -> bool {
        self.openai_api_key
            .as_deref()
            .is_some_and(|k| k.starts_with("sk-") && k.len() > 20)
    }

    /// Load configuration from YAML file
    fn load_config_file(path: &str) -> Option<ConfigFile> {
        let path = Path::new(path);

        if !path.exists() {
            tracing::debug!(path = %path.display(), "Config file not found, using defaults");
            return None;
        }

        match fs::read_to_string(path) {
            Ok(contents) => {
                let contents = contents.trim();
                if contents.is_empty() {
                    tracing::debug!(path = %path.display(), "Config file is empty, using defaults");
                    return Some(ConfigFile::default());
                }

                match serde_yaml::from_str(contents) {
                    Ok(config) => {
                        tracing::info!(path = %path.display(), "Loaded configuration from file");
                        Some(config)
                    }
                    Err(e) => {
                        tracing::warn!(path = %path.display(), error = %e, "Failed to parse config file, using defaults");
                        None
                    }
                }
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to read config file, using defaults");
                None
            }
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_is_invalid() {
        let config = Config::default();
        assert!(!config.has_valid_openai_key());
    }

    #[test]
    fn short_or_misformatted_keys_are_invalid() {
        let mut config = Config::default();

        config.openai_api_key = Some("sk-short".to_string());
        assert!(!config.has_valid_openai_key());

        config.openai_api_key = Some("pk-0123456789012345678901234".to_string());
        assert!(!config.has_valid_openai_key());
    }

    #[test]
    fn plausible_key_is_valid() {
        let mut config = Config::default();
        config.openai_api_key = Some("sk-0123456789012345678901234".to_string());
        assert!(config.has_valid_openai_key());
    }

    #[test]
    fn default_cors_allows_any_origin() {
        assert!(CorsConfig::default().allows_any_origin());
    }
}
