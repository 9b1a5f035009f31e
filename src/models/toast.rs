//! Toast notification queue.

use std::fmt;

/// Visual variant of a toast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
    Success,
}

/// Unique toast identifier, allocated by [`ToastQueue`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

/// Toast request, before an id and deadline are assigned.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewToast {
    pub title: Option<String>,
    pub description: String,
    pub variant: ToastVariant,
}

impl NewToast {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..Default::default()
        }
    }

    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(description)
            .with_title(title)
            .with_variant(ToastVariant::Success)
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(description)
            .with_title(title)
            .with_variant(ToastVariant::Destructive)
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_variant(mut self, variant: ToastVariant) -> Self {
        self.variant = variant;
        self
    }
}

/// A queued toast.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: ToastId,
    pub title: Option<String>,
    pub description: String,
    pub variant: ToastVariant,
    /// Wall-clock deadline in milliseconds (same clock as `Date.now()`).
    pub expires_at_ms: f64,
}

/// Insertion-ordered toast queue.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    entries: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue a toast that expires `ttl_ms` after `now_ms`.
    pub fn push(&mut self, toast: NewToast, now_ms: f64, ttl_ms: u32) -> ToastId {
        self.next_id += 1;
        let id = ToastId(self.next_id);
        self.entries.push(Toast {
            id,
            title: toast.title,
            description: toast.description,
            variant: toast.variant,
            expires_at_ms: now_ms + f64::from(ttl_ms),
        });
        id
    }

    /// Remove a toast. Returns `false` if it was already gone.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|t| t.id != id);
        self.entries.len() != before
    }

    /// Remove every toast whose deadline is at or before `now_ms`.
    pub fn expire(&mut self, now_ms: f64) -> Vec<ToastId> {
        let (expired, live): (Vec<Toast>, Vec<Toast>) = self
            .entries
            .drain(..)
            .partition(|t| t.expires_at_ms <= now_ms);
        self.entries = live;
        expired.into_iter().map(|t| t.id).collect()
    }

    pub fn entries(&self) -> &[Toast] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_unique_ids() {
        let mut queue = ToastQueue::new();
        let a = queue.push(NewToast::new("a"), 0.0, 3000);
        let b = queue.push(NewToast::new("b"), 0.0, 3000);
        assert_ne!(a, b);
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.entries()[0].description, "a");
        assert_eq!(queue.entries()[1].description, "b");
        assert_eq!(a.to_string(), "toast-1");
    }

    #[test]
    fn test_dismiss_is_idempotent() {
        let mut queue = ToastQueue::new();
        let id = queue.push(NewToast::new("x"), 0.0, 3000);
        assert!(queue.dismiss(id));
        assert!(queue.is_empty());
        assert!(!queue.dismiss(id));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_expire_after_deadline() {
        let mut queue = ToastQueue::new();
        let first = queue.push(NewToast::new("first"), 1000.0, 3000);
        queue.push(NewToast::new("second"), 2000.0, 3000);

        assert!(queue.expire(3999.0).is_empty());
        assert_eq!(queue.expire(4000.0), vec![first]);
        assert_eq!(queue.len(), 1);
        queue.expire(5000.0);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_constructors() {
        let ok = NewToast::success("Success", "done");
        assert_eq!(ok.variant, ToastVariant::Success);
        assert_eq!(ok.title.as_deref(), Some("Success"));

        let err = NewToast::destructive("Error", "failed");
        assert_eq!(err.variant, ToastVariant::Destructive);

        let plain = NewToast::new("hello");
        assert_eq!(plain.variant, ToastVariant::Default);
        assert_eq!(plain.title, None);
    }
}
