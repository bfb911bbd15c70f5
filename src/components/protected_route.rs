//! Wrapper rendering its children only for a signed-in session.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::session::AuthState;
use crate::util::guard::{install_unauth_redirect, requested_location};

/// Gate `children` behind the session; otherwise redirect to the login view.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    let requested = Memo::new(move |_| requested_location(&location.pathname.get(), &location.search.get()));
    install_unauth_redirect(auth, requested, use_navigate());

    view! {
        <Show when=move || auth.get().is_authenticated()>
            {children()}
        </Show>
    }
}
