use futures::executor::block_on;

use super::*;
use crate::net::error::{OFFLINE_MESSAGE, TIMEOUT_MESSAGE, TransportError};
use crate::net::fake::{FakeClient, SAMPLE_WEATHER_JSON};
use crate::net::http::Method;

fn config() -> WeatherConfig {
    WeatherConfig {
        base_url: "https://weather.test/data/2.5/".to_owned(),
        api_key: "secret".to_owned(),
        latitude: 55.7558,
        longitude: 37.6173,
        units: "metric".to_owned(),
        language: "ru".to_owned(),
        poll_interval_secs: 60,
        request_timeout_ms: 1_000,
    }
}

// =============================================================
// classify_weather_response
// =============================================================

#[test]
fn success_payload_decodes() {
    let snapshot = classify_weather_response(&HttpResponse::new(200, SAMPLE_WEATHER_JSON)).unwrap();
    assert_eq!(snapshot.name, "Москва");
    assert!((snapshot.main.temp - 21.4).abs() < f64::EPSILON);
}

#[test]
fn non_success_cod_uses_message_verbatim() {
    let resp = HttpResponse::new(200, r#"{"cod":"404","message":"city not found"}"#);
    assert_eq!(
        classify_weather_response(&resp),
        Err(ClientError::Remote("city not found".to_owned()))
    );

    let resp = HttpResponse::new(200, r#"{"cod":404,"message":"city not found"}"#);
    assert_eq!(
        classify_weather_response(&resp),
        Err(ClientError::Remote("city not found".to_owned()))
    );
}

#[test]
fn non_object_payload_is_protocol_error() {
    for body in ["[1,2,3]", "\"ok\"", "null", "<html></html>"] {
        assert!(
            matches!(
                classify_weather_response(&HttpResponse::new(200, body)),
                Err(ClientError::Protocol(_))
            ),
            "body: {body}"
        );
    }
}

#[test]
fn missing_cod_is_protocol_error() {
    let resp = HttpResponse::new(200, r#"{"name":"Moscow"}"#);
    assert!(matches!(classify_weather_response(&resp), Err(ClientError::Protocol(_))));
}

#[test]
fn cod_200_with_incomplete_payload_is_protocol_error() {
    let resp = HttpResponse::new(200, r#"{"cod":200,"name":"Moscow"}"#);
    assert!(matches!(classify_weather_response(&resp), Err(ClientError::Protocol(_))));
}

#[test]
fn fixed_status_messages_take_precedence_over_body() {
    let body = r#"{"cod":401,"message":"Invalid API key. Please see https://openweathermap.org/faq#error401"}"#;
    assert_eq!(
        classify_weather_response(&HttpResponse::new(401, body)),
        Err(ClientError::InvalidApiKey)
    );
    assert_eq!(
        classify_weather_response(&HttpResponse::new(429, "")),
        Err(ClientError::RateLimit)
    );
    assert_eq!(
        classify_weather_response(&HttpResponse::new(502, "Bad Gateway")),
        Err(ClientError::Upstream)
    );
}

#[test]
fn other_error_status_uses_body_or_generic_message() {
    let resp = HttpResponse::new(404, r#"{"cod":"404","message":"city not found"}"#);
    assert_eq!(
        classify_weather_response(&resp),
        Err(ClientError::Remote("city not found".to_owned()))
    );

    let resp = HttpResponse::new(500, "Internal Server Error");
    assert_eq!(
        classify_weather_response(&resp),
        Err(ClientError::Remote(WEATHER_FAILED_MESSAGE.to_owned()))
    );
}

// =============================================================
// WeatherApi::fetch_current
// =============================================================

#[test]
fn request_carries_location_key_units_and_language() {
    let api = WeatherApi::new(FakeClient::respond(200, SAMPLE_WEATHER_JSON), &config());
    block_on(api.fetch_current()).unwrap();

    let requests = api.client().requests();
    assert_eq!(requests.len(), 1);
    let req = &requests[0];
    assert_eq!(req.method, Method::Get);
    assert_eq!(req.url, "https://weather.test/data/2.5/weather");
    assert_eq!(req.query_value("lat"), Some("55.7558"));
    assert_eq!(req.query_value("lon"), Some("37.6173"));
    assert_eq!(req.query_value("appid"), Some("secret"));
    assert_eq!(req.query_value("units"), Some("metric"));
    assert_eq!(req.query_value("lang"), Some("ru"));
}

#[test]
fn timeout_and_offline_have_distinct_messages() {
    let api = WeatherApi::new(FakeClient::fail(TransportError::Timeout), &config());
    assert_eq!(
        block_on(api.fetch_current()),
        Err(ClientError::Connectivity(TIMEOUT_MESSAGE.to_owned()))
    );

    let api = WeatherApi::new(FakeClient::fail(TransportError::Offline("down".to_owned())), &config());
    assert_eq!(
        block_on(api.fetch_current()),
        Err(ClientError::Connectivity(OFFLINE_MESSAGE.to_owned()))
    );
}
