//! Periodic poll driver.
//!
//! A poll fires once immediately and then once per tick of a stream. Each
//! tick only *schedules* work through the callback, so a slow request never
//! delays or queues the next one. Cancellation is deterministic: once the
//! [`PollHandle`] is cancelled the driver future resolves at its next wake
//! and the callback is never invoked again.

#[cfg(test)]
#[path = "poll_test.rs"]
mod poll_test;

use std::time::Duration;

use futures::future::{AbortHandle, Abortable};
use futures::{Stream, StreamExt};

/// Cancels a running poll loop.
#[derive(Clone, Debug)]
pub struct PollHandle {
    abort: AbortHandle,
}

impl PollHandle {
    pub fn cancel(&self) {
        self.abort.abort();
    }

    #[cfg(test)]
    pub(crate) fn is_cancelled(&self) -> bool {
        self.abort.is_aborted()
    }
}

/// Invoke `on_tick` now and after every item of `ticks` until the stream ends.
pub async fn drive<S, F>(ticks: S, mut on_tick: F)
where
    S: Stream<Item = ()>,
    F: FnMut(),
{
    on_tick();
    let mut ticks = std::pin::pin!(ticks);
    while ticks.next().await.is_some() {
        on_tick();
    }
}

/// Wrap [`drive`] so it can be stopped through the returned [`PollHandle`].
pub fn cancellable<S, F>(ticks: S, on_tick: F) -> (impl Future<Output = ()>, PollHandle)
where
    S: Stream<Item = ()>,
    F: FnMut(),
{
    let (abort, registration) = AbortHandle::new_pair();
    let task = Abortable::new(drive(ticks, on_tick), registration);
    (
        async move {
            if task.await.is_err() {
                log::debug!("poll loop cancelled");
            }
        },
        PollHandle { abort },
    )
}

/// Start polling in the browser: one call now, then one per `period`.
#[cfg(feature = "csr")]
pub fn start<F>(period: Duration, on_tick: F) -> PollHandle
where
    F: FnMut() + 'static,
{
    let millis = u32::try_from(period.as_millis()).unwrap_or(u32::MAX);
    let ticks = gloo_timers::future::IntervalStream::new(millis);
    let (task, handle) = cancellable(ticks, on_tick);
    leptos::task::spawn_local(task);
    handle
}

/// Native builds have no timer source: the first poll runs, nothing repeats.
#[cfg(not(feature = "csr"))]
pub fn start<F>(period: Duration, mut on_tick: F) -> PollHandle
where
    F: FnMut() + 'static,
{
    let _ = period;
    on_tick();
    let (abort, _registration) = AbortHandle::new_pair();
    PollHandle { abort }
}
