//! Route guard for protected views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes apply identical unauthenticated redirect behavior: send
//! the user to `/auth?from=<requested path>` and, after a successful sign-in,
//! back to that path when it is a safe same-origin location.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use url::form_urlencoded;

use crate::state::session::AuthState;

pub const LOGIN_PATH: &str = "/auth";
pub const HOME_PATH: &str = "/weather";

/// Outcome of evaluating a navigation against the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect { to: String },
}

/// Allow `requested` when authenticated, otherwise redirect to the login view
/// remembering where the user was headed.
pub fn evaluate(authenticated: bool, requested: &str) -> GuardDecision {
    if authenticated {
        GuardDecision::Allow
    } else {
        GuardDecision::Redirect {
            to: login_redirect(requested),
        }
    }
}

/// `/auth?from=<requested>`, omitting `from` when it would not be honoured.
pub fn login_redirect(requested: &str) -> String {
    if !is_safe_return_path(requested) || is_login_path(requested) {
        return LOGIN_PATH.to_owned();
    }
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("from", requested)
        .finish();
    format!("{LOGIN_PATH}?{query}")
}

/// Where to go after sign-in: the remembered path if safe, else [`HOME_PATH`].
pub fn return_target(from: Option<&str>) -> String {
    match from {
        Some(path) if is_safe_return_path(path) && !is_login_path(path) => path.to_owned(),
        _ => HOME_PATH.to_owned(),
    }
}

/// Path plus query of the current location, as the router splits them
/// (`search` carries no leading `?`).
pub fn requested_location(pathname: &str, search: &str) -> String {
    if search.is_empty() {
        pathname.to_owned()
    } else {
        format!("{pathname}?{search}")
    }
}

/// `/auth` itself or anything below it, ignoring query and fragment.
fn is_login_path(path: &str) -> bool {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    path.strip_prefix(LOGIN_PATH)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

/// Only absolute same-origin paths; rejects `//host` and `/\host` forms.
fn is_safe_return_path(path: &str) -> bool {
    path.starts_with('/') && !path.starts_with("//") && !path.starts_with("/\\")
}

/// Redirect away from the current route whenever the session is signed out.
///
/// Re-evaluates on every change of `auth` and of the requested location.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, requested: Memo<String>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let authenticated = auth.get().is_authenticated();
        if let GuardDecision::Redirect { to } = evaluate(authenticated, &requested.get()) {
            log::info!("unauthenticated navigation, redirecting to {to}");
            navigate(
                &to,
                NavigateOptions {
                    replace: true,
                    ..NavigateOptions::default()
                },
            );
        }
    });
}
