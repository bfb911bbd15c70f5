//! Weather dashboard: polls current conditions while mounted.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::{AppSession, AppWeather};
use crate::components::weather_panel::WeatherPanel;
use crate::state::toast::ToastState;
#[cfg(feature = "csr")]
use crate::state::weather::PollOutcome;
use crate::state::weather::WeatherState;
use crate::util::guard::LOGIN_PATH;
use crate::util::poll;

/// Dashboard page. Fetches immediately on mount and then once per poll
/// interval; the timer is cancelled when the page is torn down.
#[component]
pub fn WeatherPage() -> impl IntoView {
    let api = expect_context::<Arc<AppWeather>>();
    let session = expect_context::<Arc<AppSession>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let state = RwSignal::new(WeatherState::default());

    let period = api.config().poll_interval();
    let handle = poll::start(period, move || {
        // Disposed signal: the page is gone, skip the tick.
        let Some(ticket) = state.try_update(WeatherState::begin_poll) else {
            return;
        };

        #[cfg(feature = "csr")]
        {
            let api = Arc::clone(&api);
            leptos::task::spawn_local(async move {
                let result = api.fetch_current().await;
                if let Some(PollOutcome::Failed(message)) = state.try_update(|s| s.finish(ticket, result))
                {
                    let _ = toasts.try_update(|t| t.error("Error", &message));
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&api, ticket, toasts);
        }
    });
    on_cleanup(move || {
        log::debug!("weather page unmounted, stopping poll");
        handle.cancel();
    });

    let on_logout = move |_| {
        session.logout();
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <div class="weather-page">
            <header class="weather-page__header">
                <h1>"Weather"</h1>
                <Show when=move || state.with(WeatherState::refreshing)>
                    <span class="weather-page__refreshing">"Updating..."</span>
                </Show>
                <button class="btn" on:click=on_logout>
                    "Sign out"
                </button>
            </header>

            <Show when=move || state.with(|s| s.error.is_some())>
                <div class="alert alert--error" role="alert">
                    {move || state.with(|s| s.error.clone().unwrap_or_default())}
                </div>
            </Show>

            {move || {
                let (spinner, snapshot) = state.with(|s| (s.show_spinner(), s.snapshot.clone()));
                if spinner {
                    view! { <div class="spinner" aria-busy="true">"Loading..."</div> }.into_any()
                } else if let Some(snapshot) = snapshot {
                    view! { <WeatherPanel snapshot=snapshot/> }.into_any()
                } else {
                    view! { <p class="weather-page__empty">"No weather data yet."</p> }.into_any()
                }
            }}
        </div>
    }
}
