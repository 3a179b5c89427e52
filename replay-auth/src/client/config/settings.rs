use config::{Config, ConfigError, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default)]
    pub spotify: SpotifySettings,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct SpotifySettings {
    #[serde(default)]
    pub client_id: String,
    #[serde(default)]
    pub client_secret: String,
}

fn default_api_base_url() -> String {
    "https://api.replaydiary.app".to_string()
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let config_path =
            std::env::var("REPLAY_CONFIG").unwrap_or_else(|_| "config.toml".to_string());

        let settings = Config::builder()
            .add_source(File::with_name(&config_path).required(false))
            .add_source(config::Environment::with_prefix("REPLAY").separator("__"))
            .build()?;

        settings.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.api_base_url.is_empty() {
            return Err("api_base_url is required".to_string());
        }
        if !self.api_base_url.starts_with("http") {
            return Err("api_base_url must be a valid HTTP(S) URL".to_string());
        }
        if self.spotify.client_id.is_empty() || self.spotify.client_secret.is_empty() {
            return Err("spotify.client_id and spotify.client_secret are required".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_settings() -> Settings {
        Settings {
            api_base_url: "https://api.example.com".to_string(),
            spotify: SpotifySettings {
                client_id: "id".to_string(),
                client_secret: "secret".to_string(),
            },
        }
    }

    #[test]
    fn accepts_complete_settings() {
        assert!(valid_settings().validate().is_ok());
    }

    #[test]
    fn rejects_non_http_base_url() {
        let mut settings = valid_settings();
        settings.api_base_url = "ftp://api.example.com".to_string();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn rejects_missing_spotify_credentials() {
        let mut settings = valid_settings();
        settings.spotify.client_secret = String::new();
        assert!(settings.validate().is_err());
    }
}
