use super::*;
use crate::net::fake::SAMPLE_WEATHER_JSON;

fn snapshot() -> WeatherSnapshot {
    serde_json::from_str(SAMPLE_WEATHER_JSON).unwrap()
}

// =============================================================
// Lifecycle
// =============================================================

#[test]
fn default_state_is_idle_and_empty() {
    let state = WeatherState::default();
    assert!(state.snapshot.is_none());
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[test]
fn first_poll_shows_spinner_until_success() {
    let mut state = WeatherState::default();
    let ticket = state.begin_poll();
    assert!(state.show_spinner());

    assert_eq!(state.finish(ticket, Ok(snapshot())), PollOutcome::Updated);
    assert!(!state.loading);
    assert!(!state.show_spinner());
    assert_eq!(state.snapshot.as_ref().map(|s| s.name.as_str()), Some("Москва"));
}

#[test]
fn later_polls_refresh_without_spinner() {
    let mut state = WeatherState::default();
    let ticket = state.begin_poll();
    state.finish(ticket, Ok(snapshot()));

    state.begin_poll();
    assert!(!state.show_spinner());
    assert!(state.refreshing());
}

// =============================================================
// Errors overlay the last snapshot
// =============================================================

#[test]
fn failure_keeps_previous_snapshot() {
    let mut state = WeatherState::default();
    let ticket = state.begin_poll();
    state.finish(ticket, Ok(snapshot()));

    let ticket = state.begin_poll();
    let outcome = state.finish(ticket, Err(ClientError::Remote("city not found".to_owned())));

    assert_eq!(outcome, PollOutcome::Failed("city not found".to_owned()));
    assert_eq!(state.error.as_deref(), Some("city not found"));
    assert!(state.snapshot.is_some());
    assert!(!state.loading);
}

#[test]
fn error_persists_until_next_success() {
    let mut state = WeatherState::default();
    let ticket = state.begin_poll();
    state.finish(ticket, Err(ClientError::RateLimit));

    state.begin_poll();
    assert!(state.error.is_some());

    let ticket = state.issued;
    state.finish(ticket, Ok(snapshot()));
    assert!(state.error.is_none());
}

// =============================================================
// Superseded polls
// =============================================================

#[test]
fn stale_response_is_ignored() {
    let mut state = WeatherState::default();
    let old = state.begin_poll();
    let new = state.begin_poll();

    assert_eq!(state.finish(new, Err(ClientError::Upstream)), PollOutcome::Failed(ClientError::Upstream.to_string()));
    assert_eq!(state.finish(old, Ok(snapshot())), PollOutcome::Stale);
    assert!(state.snapshot.is_none());
    assert!(state.error.is_some());
}

#[test]
fn stale_failure_does_not_clear_loading() {
    let mut state = WeatherState::default();
    let old = state.begin_poll();
    state.begin_poll();

    assert_eq!(state.finish(old, Err(ClientError::RateLimit)), PollOutcome::Stale);
    assert!(state.loading);
    assert!(state.error.is_none());
}
