//! Transient notification state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided once by `App` as an `RwSignal<ToastState>` context. The details
//! page pushes submission outcomes here and the `Toaster` renders them.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Maximum number of toasts kept on screen; older ones are dropped.
pub const TOAST_LIMIT: usize = 1;

/// Milliseconds before a toast dismisses itself in the browser.
pub const TOAST_DURATION_MS: u32 = 5_000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl Toast {
    pub fn success(title: &str, description: &str) -> Self {
        Self { title: title.to_owned(), description: description.to_owned(), variant: ToastVariant::Default }
    }

    pub fn failure(title: &str, description: &str) -> Self {
        Self { title: title.to_owned(), description: description.to_owned(), variant: ToastVariant::Destructive }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShownToast {
    pub id: u64,
    pub toast: Toast,
}

#[derive(Clone, Debug, Default)]
pub struct ToastState {
    visible: Vec<ShownToast>,
    next_id: u64,
}

impl ToastState {
    /// Newest first.
    pub fn visible(&self) -> &[ShownToast] {
        &self.visible
    }

    /// Show `toast`, evicting the oldest beyond [`TOAST_LIMIT`]. Returns its id.
    pub fn push(&mut self, toast: Toast) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.visible.insert(0, ShownToast { id, toast });
        self.visible.truncate(TOAST_LIMIT);
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.visible.retain(|t| t.id != id);
    }
}
