//! Sign-in / registration page.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::app::AppSession;
use crate::state::session::AuthState;
use crate::state::toast::ToastState;
use crate::util::guard::return_target;

const EMPTY_FIELDS_MESSAGE: &str = "Enter both email and password.";

/// Which form the page is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Login => Self::Register,
            Self::Register => Self::Login,
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            Self::Login => "Sign in",
            Self::Register => "Create account",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            Self::Login => "Sign in",
            Self::Register => "Register",
        }
    }

    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Login => "No account? Register",
            Self::Register => "Already registered? Sign in",
        }
    }

    pub fn success_title(self) -> &'static str {
        match self {
            Self::Login => "Signed in",
            Self::Register => "Registration complete",
        }
    }

    pub fn failure_title(self) -> &'static str {
        match self {
            Self::Login => "Sign-in failed",
            Self::Register => "Registration failed",
        }
    }
}

/// Trim both fields and require each to be non-empty.
pub fn validate_credentials(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    let password = password.trim();
    if email.is_empty() || password.is_empty() {
        return Err(EMPTY_FIELDS_MESSAGE);
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Login/register form. Navigates to the remembered page (or the dashboard)
/// as soon as the session becomes authenticated.
#[component]
pub fn AuthPage() -> impl IntoView {
    let session = expect_context::<Arc<AppSession>>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    let query = use_query_map();

    let mode = RwSignal::new(AuthMode::Login);
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let info = RwSignal::new(String::new());

    Effect::new(move || {
        if auth.get().is_authenticated() {
            let target = return_target(query.get().get("from").as_deref());
            navigate(
                &target,
                NavigateOptions {
                    replace: true,
                    ..NavigateOptions::default()
                },
            );
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_credentials(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        let current = mode.get();
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "csr")]
        {
            let session = Arc::clone(&session);
            leptos::task::spawn_local(async move {
                let result = match current {
                    AuthMode::Login => session.login(&email_value, &password_value).await,
                    AuthMode::Register => session.register(&email_value, &password_value).await,
                };
                match result {
                    Ok(()) => {
                        let _ = toasts.try_update(|t| t.success(current.success_title(), ""));
                    }
                    Err(e) => {
                        let message = e.to_string();
                        let _ = toasts.try_update(|t| t.error(current.failure_title(), &message));
                        let _ = info.try_set(message);
                    }
                }
                let _ = busy.try_set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&session, current, email_value, password_value, toasts);
            busy.set(false);
        }
    };

    let on_toggle = move |_| {
        mode.update(|m| *m = m.toggled());
        info.set(String::new());
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>{move || mode.get().heading()}</h1>
                <Show when=move || mode.get() == AuthMode::Login>
                    <p class="auth-card__hint">
                        "For a test sign-in use:" <br/>
                        "Email: eve.holt@reqres.in" <br/>
                        "Password: cityslicka"
                    </p>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label">
                        "Email"
                        <input
                            class="auth-form__input"
                            type="email"
                            required
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Password"
                        <div class="auth-form__password">
                            <input
                                class="auth-form__input"
                                type=move || if show_password.get() { "text" } else { "password" }
                                required
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                            <button
                                class="auth-form__reveal"
                                type="button"
                                on:click=move |_| show_password.update(|s| *s = !*s)
                            >
                                {move || if show_password.get() { "Hide" } else { "Show" }}
                            </button>
                        </div>
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Please wait..." } else { mode.get().submit_label() }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-card__message">{move || info.get()}</p>
                </Show>
                <button class="btn btn--link" type="button" on:click=on_toggle>
                    {move || mode.get().toggle_label()}
                </button>
            </div>
        </div>
    }
}
