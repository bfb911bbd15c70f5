//! Transient notifications.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// How long a toast stays on screen.
pub const TOAST_DURATION_MS: u64 = 5_000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Error,
    Success,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub message: String,
}

/// Queue of currently visible toasts, oldest first.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub items: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Append a toast and return its id.
    pub fn push(&mut self, kind: ToastKind, title: &str, message: &str) -> u64 {
        self.next_id += 1;
        self.items.push(Toast {
            id: self.next_id,
            kind,
            title: title.to_owned(),
            message: message.to_owned(),
        });
        self.next_id
    }

    pub fn error(&mut self, title: &str, message: &str) -> u64 {
        self.push(ToastKind::Error, title, message)
    }

    pub fn success(&mut self, title: &str, message: &str) -> u64 {
        self.push(ToastKind::Success, title, message)
    }

    /// Remove the toast with `id`; unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }
}
