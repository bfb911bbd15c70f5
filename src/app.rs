//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::{protected_route::ProtectedRoute, toast_host::ToastHost};
use crate::config::AppConfig;
use crate::net::auth::AuthApi;
use crate::net::http::BrowserClient;
use crate::net::weather::WeatherApi;
use crate::pages::{auth::AuthPage, weather::WeatherPage};
use crate::state::session::{AuthState, SessionManager};
use crate::state::toast::ToastState;
use crate::util::guard::HOME_PATH;
use crate::util::storage::BrowserStore;

/// Session manager wired to the browser transport and storage.
pub type AppSession = SessionManager<BrowserClient, BrowserStore>;

/// Weather client wired to the browser transport.
pub type AppWeather = WeatherApi<BrowserClient>;

/// Root application component.
///
/// Builds both service clients from `config`, mirrors the session into an
/// `AuthState` signal, and sets up client-side routing.
#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_meta_context();

    let session: Arc<AppSession> = Arc::new(SessionManager::new(
        AuthApi::new(BrowserClient::new(config.auth.request_timeout_ms), &config.auth),
        BrowserStore::new(config.auth.token_key.clone()),
    ));
    let weather: Arc<AppWeather> = Arc::new(WeatherApi::new(
        BrowserClient::new(config.weather.request_timeout_ms),
        &config.weather,
    ));

    let auth = RwSignal::new(session.state());
    session.subscribe(move |state: &AuthState| {
        let _ = auth.try_set(state.clone());
    });
    let toasts = RwSignal::new(ToastState::default());

    provide_context(session);
    provide_context(weather);
    provide_context(auth);
    provide_context(toasts);

    view! {
        <Title text="Weather"/>

        <Router>
            <Routes fallback=|| view! { <Redirect path=HOME_PATH/> }>
                <Route path=StaticSegment("auth") view=AuthPage/>
                <Route
                    path=StaticSegment("weather")
                    view=|| view! { <ProtectedRoute><WeatherPage/></ProtectedRoute> }
                />
                <Route path=StaticSegment("") view=|| view! { <Redirect path=HOME_PATH/> }/>
            </Routes>
        </Router>
        <ToastHost/>
    }
}

/// Shown instead of [`App`] when `/config.json` cannot be loaded.
#[component]
pub fn ConfigErrorPage(message: String) -> impl IntoView {
    view! {
        <div class="config-error">
            <h1>"Configuration error"</h1>
            <p>{message}</p>
        </div>
    }
}
