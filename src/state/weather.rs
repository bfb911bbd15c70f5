//! Weather dashboard presentation state.
//!
//! DESIGN
//! ======
//! `loading`, `snapshot` and `error` are independent: an error is an overlay
//! on top of the last good snapshot, never a replacement for it. Each poll
//! takes a ticket from [`WeatherState::begin_poll`]; only the most recently
//! issued ticket may change the state, so a slow response that outlives the
//! next tick is dropped.

#[cfg(test)]
#[path = "weather_test.rs"]
mod weather_test;

use crate::net::error::ClientError;
use crate::net::types::WeatherSnapshot;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct WeatherState {
    pub snapshot: Option<WeatherSnapshot>,
    pub loading: bool,
    pub error: Option<String>,
    issued: u64,
}

/// What a finished poll did to the state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PollOutcome {
    Updated,
    /// The poll failed; carries the message to surface as a notification.
    Failed(String),
    /// A newer poll was issued before this one finished.
    Stale,
}

impl WeatherState {
    /// Mark a poll in flight and return its ticket.
    pub fn begin_poll(&mut self) -> u64 {
        self.issued += 1;
        self.loading = true;
        self.issued
    }

    /// Apply the result of the poll holding `ticket`.
    pub fn finish(&mut self, ticket: u64, result: Result<WeatherSnapshot, ClientError>) -> PollOutcome {
        if ticket != self.issued {
            return PollOutcome::Stale;
        }
        self.loading = false;
        match result {
            Ok(snapshot) => {
                self.snapshot = Some(snapshot);
                self.error = None;
                PollOutcome::Updated
            }
            Err(e) => {
                let message = e.to_string();
                self.error = Some(message.clone());
                PollOutcome::Failed(message)
            }
        }
    }

    /// Full-page spinner only until the first snapshot arrives.
    pub fn show_spinner(&self) -> bool {
        self.loading && self.snapshot.is_none()
    }

    /// A background refresh of an already displayed snapshot.
    pub fn refreshing(&self) -> bool {
        self.loading && self.snapshot.is_some()
    }
}
