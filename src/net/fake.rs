//! Scripted [`HttpClient`] for unit tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use super::error::TransportError;
use super::http::{HttpClient, HttpRequest, HttpResponse};

type Reply = Result<HttpResponse, TransportError>;

/// Replies from a queue in order and records every request it was given.
#[derive(Default)]
pub struct FakeClient {
    replies: Mutex<VecDeque<Reply>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl FakeClient {
    pub fn with_replies(replies: impl IntoIterator<Item = Reply>) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn respond(status: u16, body: &str) -> Self {
        Self::with_replies([Ok(HttpResponse::new(status, body))])
    }

    pub fn fail(err: TransportError) -> Self {
        Self::with_replies([Err(err)])
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl HttpClient for FakeClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(TransportError::Offline("no scripted reply".to_owned())))
    }
}

/// Representative current-weather payload for Moscow.
pub const SAMPLE_WEATHER_JSON: &str = r#"{
    "coord": { "lon": 37.6173, "lat": 55.7558 },
    "weather": [
        { "id": 803, "main": "Clouds", "description": "облачно с прояснениями", "icon": "04d" }
    ],
    "base": "stations",
    "main": {
        "temp": 21.4, "feels_like": 20.9, "temp_min": 19.6, "temp_max": 22.8,
        "pressure": 1013, "humidity": 56, "sea_level": 1013, "grnd_level": 995
    },
    "visibility": 10000,
    "wind": { "speed": 4.2, "deg": 200, "gust": 7.1 },
    "clouds": { "all": 75 },
    "rain": { "1h": 0.3 },
    "dt": 1718880000,
    "sys": { "type": 2, "id": 2000314, "country": "RU", "sunrise": 1718841900, "sunset": 1718905200 },
    "timezone": 10800,
    "id": 524901,
    "name": "Москва",
    "cod": 200
}"#;
