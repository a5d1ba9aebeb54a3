// SPDX-License-Identifier: MPL-2.0
//! Toast records and the requests that create and patch them.
//!
//! A [`Toast`] is only ever built by the queue from a [`ToastFields`]
//! request and only ever changed through a [`ToastPatch`] or a dismissal.

use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

/// Unique identifier for a toast.
///
/// Identifiers are allocated by the queue that owns the toast and are
/// never reused while that queue is alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl ToastId {
    pub(crate) fn from_raw(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw counter value.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Visual treatment requested for a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    #[default]
    Default,
    /// Error or irreversible outcome.
    Destructive,
}

/// Interactive element attached to a toast, such as an "Undo" button.
///
/// The queue stores it as-is; renderers decide what activating it does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastAction {
    label: String,
    alt_text: String,
}

impl ToastAction {
    /// Creates an action with a visible label and alternative text for
    /// assistive technologies.
    pub fn new(label: impl Into<String>, alt_text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            alt_text: alt_text.into(),
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn alt_text(&self) -> &str {
        &self.alt_text
    }
}

/// A toast held by the queue.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    id: ToastId,
    title: Option<String>,
    description: Option<String>,
    action: Option<ToastAction>,
    variant: Variant,
    duration: Option<Duration>,
    hints: BTreeMap<String, String>,
    visible: bool,
}

impl Toast {
    pub(crate) fn new(id: ToastId, fields: ToastFields) -> Self {
        Self {
            id,
            title: fields.title,
            description: fields.description,
            action: fields.action,
            variant: fields.variant,
            duration: fields.duration,
            hints: fields.hints,
            visible: true,
        }
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub fn action(&self) -> Option<&ToastAction> {
        self.action.as_ref()
    }

    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// How long renderers should keep the toast on screen before asking
    /// for it to be closed. The queue itself never acts on this.
    #[must_use]
    pub fn duration(&self) -> Option<Duration> {
        self.duration
    }

    /// Returns an extra display hint by key.
    #[must_use]
    pub fn hint(&self, key: &str) -> Option<&str> {
        self.hints.get(key).map(String::as_str)
    }

    /// Returns all extra display hints, ordered by key.
    #[must_use]
    pub fn hints(&self) -> &BTreeMap<String, String> {
        &self.hints
    }

    /// Returns whether the toast is still displayed (not yet dismissed).
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Marks the toast as dismissed. Returns `false` if it already was.
    pub(crate) fn hide(&mut self) -> bool {
        std::mem::replace(&mut self.visible, false)
    }

    /// Applies a patch. Returns whether any field changed.
    pub(crate) fn apply(&mut self, patch: ToastPatch) -> bool {
        let mut changed = false;
        changed |= assign(&mut self.title, patch.title);
        changed |= assign(&mut self.description, patch.description);
        changed |= assign(&mut self.action, patch.action);
        changed |= assign(&mut self.duration, patch.duration);
        if let Some(variant) = patch.variant {
            changed |= std::mem::replace(&mut self.variant, variant) != variant;
        }
        for (key, value) in patch.hints {
            let previous = self.hints.insert(key, value.clone());
            changed |= previous.as_ref() != Some(&value);
        }
        changed
    }
}

fn assign<T: PartialEq>(slot: &mut Option<T>, change: Option<Option<T>>) -> bool {
    match change {
        Some(value) if *slot != value => {
            *slot = value;
            true
        }
        _ => false,
    }
}

/// Display fields for a new toast.
///
/// # Example
///
/// ```
/// use toast_queue::{ToastAction, ToastFields, Variant};
///
/// let fields = ToastFields::titled("Deal submitted")
///     .description("It will appear in the listing shortly.")
///     .action(ToastAction::new("Undo", "Undo deal submission"))
///     .hint("class", "bottom-right");
///
/// let failed = ToastFields::titled("Submission failed").variant(Variant::Destructive);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastFields {
    title: Option<String>,
    description: Option<String>,
    action: Option<ToastAction>,
    variant: Variant,
    duration: Option<Duration>,
    hints: BTreeMap<String, String>,
}

impl ToastFields {
    /// Creates an empty request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a request with a title.
    pub fn titled(title: impl Into<String>) -> Self {
        Self::new().title(title)
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn action(mut self, action: ToastAction) -> Self {
        self.action = Some(action);
        self
    }

    #[must_use]
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Adds an extra display hint, passed through to the stored toast.
    #[must_use]
    pub fn hint(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.hints.insert(key.into(), value.into());
        self
    }
}

/// A partial update for an existing toast.
///
/// Fields left untouched keep their current value. `clear_*` methods reset
/// an optional field. Hints are merged key by key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastPatch {
    title: Option<Option<String>>,
    description: Option<Option<String>>,
    action: Option<Option<ToastAction>>,
    variant: Option<Variant>,
    duration: Option<Option<Duration>>,
    hints: BTreeMap<String, String>,
}

impl ToastPatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if applying the patch can never change a toast.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(Some(title.into()));
        self
    }

    #[must_use]
    pub fn clear_title(mut self) -> Self {
        self.title = Some(None);
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(Some(description.into()));
        self
    }

    #[must_use]
    pub fn clear_description(mut self) -> Self {
        self.description = Some(None);
        self
    }

    #[must_use]
    pub fn action(mut self, action: ToastAction) -> Self {
        self.action = Some(Some(action));
        self
    }

    #[must_use]
    pub fn clear_action(mut self) -> Self {
        self.action = Some(None);
        self
    }

    #[must_use]
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = Some(variant);
        self
    }

    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(Some(duration));
        self
    }

    #[must_use]
    pub fn clear_duration(mut self) -> Self {
        self.duration = Some(None);
        self
    }

    #[must_use]
    pub fn hint(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.hints.insert(key.into(), value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(fields: ToastFields) -> Toast {
        Toast::new(ToastId::from_raw(1), fields)
    }

    #[test]
    fn new_toast_is_visible_and_keeps_fields() {
        let t = toast(
            ToastFields::titled("Deal saved")
                .description("Listed under Electronics")
                .variant(Variant::Destructive)
                .duration(Duration::from_secs(5))
                .hint("position", "top"),
        );

        assert!(t.is_visible());
        assert_eq!(t.title(), Some("Deal saved"));
        assert_eq!(t.description(), Some("Listed under Electronics"));
        assert_eq!(t.variant(), Variant::Destructive);
        assert_eq!(t.duration(), Some(Duration::from_secs(5)));
        assert_eq!(t.hint("position"), Some("top"));
        assert!(t.action().is_none());
    }

    #[test]
    fn hide_flips_visibility_once() {
        let mut t = toast(ToastFields::titled("A"));
        assert!(t.hide());
        assert!(!t.is_visible());
        assert!(!t.hide());
        assert!(!t.is_visible());
    }

    #[test]
    fn patch_overwrites_only_given_fields() {
        let mut t = toast(
            ToastFields::titled("Generating description")
                .description("Asking the assistant...")
                .hint("tone", "neutral"),
        );

        let changed = t.apply(ToastPatch::new().description("Suggestion ready").hint("icon", "spark"));

        assert!(changed);
        assert_eq!(t.title(), Some("Generating description"));
        assert_eq!(t.description(), Some("Suggestion ready"));
        assert_eq!(t.hint("tone"), Some("neutral"));
        assert_eq!(t.hint("icon"), Some("spark"));
    }

    #[test]
    fn patch_can_clear_optional_fields() {
        let mut t = toast(
            ToastFields::titled("A")
                .action(ToastAction::new("Retry", "Retry the request"))
                .duration(Duration::from_secs(1)),
        );

        t.apply(ToastPatch::new().clear_title().clear_action().clear_duration());

        assert!(t.title().is_none());
        assert!(t.action().is_none());
        assert!(t.duration().is_none());
    }

    #[test]
    fn patch_reports_unchanged_when_values_match() {
        let mut t = toast(ToastFields::titled("Same").hint("k", "v"));
        assert!(!t.apply(ToastPatch::new().title("Same").hint("k", "v")));
        assert!(!t.apply(ToastPatch::new()));
        assert!(!t.apply(ToastPatch::new().variant(Variant::Default)));
    }

    #[test]
    fn patch_does_not_touch_identity_or_visibility() {
        let mut t = toast(ToastFields::titled("A"));
        t.hide();
        t.apply(ToastPatch::new().title("B"));
        assert_eq!(t.id(), ToastId::from_raw(1));
        assert!(!t.is_visible());
    }

    #[test]
    fn empty_patch_is_detected() {
        assert!(ToastPatch::new().is_empty());
        assert!(!ToastPatch::new().clear_title().is_empty());
    }

    #[test]
    fn toast_id_displays_raw_value() {
        assert_eq!(ToastId::from_raw(42).to_string(), "42");
        assert_eq!(ToastId::from_raw(42).value(), 42);
    }
}
