//! Wire types for the auth and weather services.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Email + password pair sent to `/login` or `/register`.
///
/// Both values are trimmed on construction. Never persisted.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            email: email.trim().to_owned(),
            password: password.trim().to_owned(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Successful auth response body.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub token: Option<String>,
}

/// Error body returned by the auth service with a non-2xx status.
#[derive(Clone, Debug, Deserialize)]
pub struct AuthErrorBody {
    pub error: String,
}

/// Error body returned by the weather service, `{ cod, message }`.
#[derive(Clone, Debug, Deserialize)]
pub struct WeatherErrorBody {
    pub message: String,
}

/// One current-conditions observation.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct WeatherSnapshot {
    pub coord: Coordinates,
    #[serde(default)]
    pub weather: Vec<Condition>,
    pub main: Temperature,
    #[serde(default)]
    pub visibility: Option<f64>,
    pub wind: Wind,
    pub clouds: Clouds,
    #[serde(default)]
    pub rain: Option<Precipitation>,
    #[serde(default)]
    pub snow: Option<Precipitation>,
    /// Observation time, unix seconds.
    pub dt: i64,
    pub sys: SunTimes,
    /// Shift from UTC in seconds.
    pub timezone: i32,
    pub name: String,
}

impl WeatherSnapshot {
    /// The first (primary) reported condition.
    pub fn primary_condition(&self) -> Option<&Condition> {
        self.weather.first()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Condition {
    pub id: u32,
    pub main: String,
    pub description: String,
    pub icon: String,
}

impl Condition {
    pub fn icon_url(&self) -> String {
        format!("https://openweathermap.org/img/wn/{}@2x.png", self.icon)
    }
}

/// Temperatures in the requested units, pressure in hPa, humidity in %.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Temperature {
    pub temp: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub pressure: f64,
    pub humidity: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Wind {
    pub speed: f64,
    /// Meteorological degrees, 0 = north.
    pub deg: f64,
    #[serde(default)]
    pub gust: Option<f64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Clouds {
    pub all: u32,
}

/// Precipitation volume in mm.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
pub struct Precipitation {
    #[serde(rename = "1h", default)]
    pub last_hour: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SunTimes {
    #[serde(default)]
    pub country: Option<String>,
    pub sunrise: i64,
    pub sunset: i64,
}
