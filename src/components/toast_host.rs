//! Stack of transient notifications in the corner of the screen.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastKind, ToastState};

/// Renders every queued toast; each dismisses itself after a few seconds.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-host" aria-live="polite">
            <For
                each=move || toasts.get().items
                key=|toast| toast.id
                children=move |toast| view! { <ToastCard toast=toast/> }
            />
        </div>
    }
}

#[component]
fn ToastCard(toast: Toast) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let id = toast.id;

    #[cfg(feature = "csr")]
    set_timeout(
        move || {
            let _ = toasts.try_update(|t| t.dismiss(id));
        },
        std::time::Duration::from_millis(crate::state::toast::TOAST_DURATION_MS),
    );

    let class = match toast.kind {
        ToastKind::Error => "toast toast--error",
        ToastKind::Success => "toast toast--success",
    };

    let message = toast.message;
    view! {
        <div class=class role="status">
            <strong class="toast__title">{toast.title}</strong>
            {(!message.is_empty()).then(move || view! { <p class="toast__message">{message}</p> })}
            <button class="toast__close" on:click=move |_| toasts.update(|t| t.dismiss(id))>
                "×"
            </button>
        </div>
    }
}
