//! Runtime configuration for both remote services.
//!
//! SYSTEM CONTEXT
//! ==============
//! Endpoints, API keys, and the observed location are read from
//! `/config.json` when the page boots instead of being compiled into the
//! bundle. Everything except the two API keys has a default.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use serde::Deserialize;

/// Path the config file is served from, relative to the app origin.
pub const CONFIG_PATH: &str = "/config.json";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid configuration JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("`{0}` must not be empty")]
    Empty(&'static str),
    #[error("poll interval must be at least one second")]
    ZeroPollInterval,
    #[error("latitude {0} is outside -90..=90")]
    Latitude(f64),
    #[error("longitude {0} is outside -180..=180")]
    Longitude(f64),
    #[error("could not load /config.json: {0}")]
    Fetch(String),
}

/// Top-level application configuration.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct AppConfig {
    pub auth: AuthConfig,
    pub weather: WeatherConfig,
}

/// Demo authentication service settings.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct AuthConfig {
    #[serde(default = "default_auth_base_url")]
    pub base_url: String,
    pub api_key: String,
    /// `localStorage` key the bearer token is persisted under.
    #[serde(default = "default_token_key")]
    pub token_key: String,
    #[serde(default = "default_timeout_ms")]
    pub request_timeout_ms: u32,
}

/// Weather API settings and the fixed location the dashboard observes.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct WeatherConfig {
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,
    pub api_key: String,
    #[serde(default = "default_latitude")]
    pub latitude: f64,
    #[serde(default = "default_longitude")]
    pub longitude: f64,
    #[serde(default = "default_units")]
    pub units: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
    #[serde(default = "default_timeout_ms")]
    pub request_timeout_ms: u32,
}

fn default_auth_base_url() -> String {
    "https://reqres.in/api".to_owned()
}

fn default_token_key() -> String {
    "token".to_owned()
}

fn default_weather_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_owned()
}

fn default_latitude() -> f64 {
    55.7558
}

fn default_longitude() -> f64 {
    37.6173
}

fn default_units() -> String {
    "metric".to_owned()
}

fn default_language() -> String {
    "ru".to_owned()
}

fn default_poll_interval_secs() -> u64 {
    60
}

fn default_timeout_ms() -> u32 {
    10_000
}

impl AppConfig {
    /// Parse and validate a JSON config document.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the JSON is malformed or a value is out
    /// of range.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the clients cannot work with.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty("auth.base_url", &self.auth.base_url)?;
        require_non_empty("auth.api_key", &self.auth.api_key)?;
        require_non_empty("auth.token_key", &self.auth.token_key)?;
        require_non_empty("weather.base_url", &self.weather.base_url)?;
        require_non_empty("weather.api_key", &self.weather.api_key)?;

        if self.weather.poll_interval_secs == 0 {
            return Err(ConfigError::ZeroPollInterval);
        }
        if !(-90.0..=90.0).contains(&self.weather.latitude) {
            return Err(ConfigError::Latitude(self.weather.latitude));
        }
        if !(-180.0..=180.0).contains(&self.weather.longitude) {
            return Err(ConfigError::Longitude(self.weather.longitude));
        }
        Ok(())
    }

    /// Fetch [`CONFIG_PATH`] from the serving origin and parse it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Fetch`] when the file cannot be retrieved, or
    /// a parse/validation error for its contents.
    pub async fn fetch() -> Result<Self, ConfigError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::get(CONFIG_PATH)
                .send()
                .await
                .map_err(|e| ConfigError::Fetch(e.to_string()))?;
            if !resp.ok() {
                return Err(ConfigError::Fetch(format!("status {}", resp.status())));
            }
            let raw = resp
                .text()
                .await
                .map_err(|e| ConfigError::Fetch(e.to_string()))?;
            Self::from_json(&raw)
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(ConfigError::Fetch("not available outside the browser".to_owned()))
        }
    }
}

impl WeatherConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }
}

fn require_non_empty(field: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Empty(field));
    }
    Ok(())
}
