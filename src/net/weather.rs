//! Client for the current-weather endpoint (`GET /weather`).
//!
//! ERROR HANDLING
//! ==============
//! Transport failures split into timeout and offline. Status 401, 429 and
//! 502 have fixed messages; any other failure uses the `{ cod, message }`
//! body when present. A 200 transport status still fails unless the payload
//! is an object whose `cod` is 200.

#[cfg(test)]
#[path = "weather_test.rs"]
mod weather_test;

use serde_json::Value;

use super::error::{ClientError, WEATHER_FAILED_MESSAGE};
use super::http::{HttpClient, HttpRequest, HttpResponse};
use super::types::{WeatherErrorBody, WeatherSnapshot};
use crate::config::WeatherConfig;

const MALFORMED_MESSAGE: &str = "Malformed weather payload.";

/// Fetches current conditions for the configured location.
pub struct WeatherApi<C> {
    client: C,
    config: WeatherConfig,
}

impl<C: HttpClient> WeatherApi<C> {
    pub fn new(client: C, config: &WeatherConfig) -> Self {
        Self {
            client,
            config: config.clone(),
        }
    }

    #[cfg(test)]
    pub(crate) fn client(&self) -> &C {
        &self.client
    }

    pub fn config(&self) -> &WeatherConfig {
        &self.config
    }

    /// One poll: request, validate, and decode the current conditions.
    ///
    /// # Errors
    ///
    /// Returns the [`ClientError`] classified from the transport failure or
    /// the response.
    pub async fn fetch_current(&self) -> Result<WeatherSnapshot, ClientError> {
        let resp = self.client.send(self.request()).await.map_err(|e| {
            log::error!("weather request failed: {e}");
            ClientError::from_weather_transport(&e)
        })?;

        let result = classify_weather_response(&resp);
        match &result {
            Ok(snapshot) => log::debug!("weather updated for {} at {}", snapshot.name, snapshot.dt),
            Err(e) => log::warn!("weather response rejected (status {}): {e}", resp.status),
        }
        result
    }

    fn request(&self) -> HttpRequest {
        let url = format!("{}/weather", self.config.base_url.trim_end_matches('/'));
        HttpRequest::get(url)
            .query("lat", self.config.latitude)
            .query("lon", self.config.longitude)
            .query("appid", &self.config.api_key)
            .query("units", &self.config.units)
            .query("lang", &self.config.language)
    }
}

/// Map a weather response to a snapshot or a [`ClientError`].
///
/// # Errors
///
/// See the module docs for the classification order.
pub fn classify_weather_response(resp: &HttpResponse) -> Result<WeatherSnapshot, ClientError> {
    match resp.status {
        401 => return Err(ClientError::InvalidApiKey),
        429 => return Err(ClientError::RateLimit),
        502 => return Err(ClientError::Upstream),
        _ => {}
    }

    if !resp.is_success() {
        return Err(remote_error(resp));
    }

    let payload: Value =
        serde_json::from_str(&resp.body).map_err(|_| ClientError::Protocol(MALFORMED_MESSAGE.to_owned()))?;
    let Some(object) = payload.as_object() else {
        return Err(ClientError::Protocol(MALFORMED_MESSAGE.to_owned()));
    };

    match object.get("cod").and_then(result_code) {
        Some(200) => {}
        Some(_) => return Err(remote_error(resp)),
        None => return Err(ClientError::Protocol(MALFORMED_MESSAGE.to_owned())),
    }

    serde_json::from_value(payload).map_err(|e| {
        log::warn!("weather payload did not decode: {e}");
        ClientError::Protocol(MALFORMED_MESSAGE.to_owned())
    })
}

/// `cod` arrives as a number on success and as a numeric string on errors.
fn result_code(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn remote_error(resp: &HttpResponse) -> ClientError {
    match resp.json::<WeatherErrorBody>() {
        Some(body) if !body.message.is_empty() => ClientError::Remote(body.message),
        _ => ClientError::Remote(WEATHER_FAILED_MESSAGE.to_owned()),
    }
}
