// SPDX-License-Identifier: MPL-2.0
//! Timer-free toast list.
//!
//! `ToastState` owns the ordered list (newest first) and enforces the size
//! limit. Every mutation returns a [`Transition`] describing what the caller
//! has to do about removal timers; scheduling them is not this module's job.

use super::record::{Toast, ToastId, ToastPatch};
use crate::domain::toast::ToastLimit;
use std::collections::VecDeque;

/// Outcome of a state mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[must_use]
pub struct Transition {
    /// Whether the list observers see has changed.
    pub changed: bool,
    /// Dismissed toasts still in the list; each needs a removal timer.
    pub dismissed: Vec<ToastId>,
    /// Toasts that left the list; their removal timers are obsolete.
    pub dropped: Vec<ToastId>,
}

impl Transition {
    fn unchanged() -> Self {
        Self::default()
    }
}

/// Ordered, bounded list of toasts.
#[derive(Debug, Clone)]
pub struct ToastState {
    /// Toasts, newest first.
    toasts: VecDeque<Toast>,
    limit: ToastLimit,
}

impl ToastState {
    #[must_use]
    pub fn new(limit: ToastLimit) -> Self {
        Self {
            toasts: VecDeque::with_capacity(limit.value()),
            limit,
        }
    }

    /// Inserts a toast at the front, evicting the oldest beyond the limit.
    pub fn add(&mut self, toast: Toast) -> Transition {
        debug_assert!(self.get(toast.id()).is_none(), "duplicate toast id");
        self.toasts.push_front(toast);

        let mut dropped = Vec::new();
        while self.toasts.len() > self.limit.value() {
            if let Some(evicted) = self.toasts.pop_back() {
                dropped.push(evicted.id());
            }
        }

        Transition {
            changed: true,
            dismissed: Vec::new(),
            dropped,
        }
    }

    /// Merges a patch into the toast with the given id.
    ///
    /// Any update that finds its toast counts as a change, even when every
    /// patched value was already in place.
    pub fn update(&mut self, id: ToastId, patch: ToastPatch) -> Transition {
        match self.toasts.iter_mut().find(|t| t.id() == id) {
            Some(toast) => {
                if !toast.apply(patch) {
                    tracing::trace!(id = %id, "Update left every field as it was");
                }
                Transition {
                    changed: true,
                    ..Transition::unchanged()
                }
            }
            None => Transition::unchanged(),
        }
    }

    /// Hides one toast, or all of them when `id` is `None`.
    ///
    /// Already hidden toasts are reported in `dismissed` again so the caller
    /// can make sure a removal timer exists for each.
    pub fn dismiss(&mut self, id: Option<ToastId>) -> Transition {
        let mut transition = Transition::unchanged();
        for toast in self
            .toasts
            .iter_mut()
            .filter(|t| id.is_none_or(|id| t.id() == id))
        {
            transition.changed |= toast.hide();
            transition.dismissed.push(toast.id());
        }
        transition
    }

    /// Deletes one toast, or clears the list when `id` is `None`.
    pub fn remove(&mut self, id: Option<ToastId>) -> Transition {
        let dropped: Vec<ToastId> = match id {
            Some(id) => match self.toasts.iter().position(|t| t.id() == id) {
                Some(pos) => self.toasts.remove(pos).map(|t| t.id()).into_iter().collect(),
                None => Vec::new(),
            },
            None => self.toasts.drain(..).map(|t| t.id()).collect(),
        };

        Transition {
            changed: !dropped.is_empty(),
            dismissed: Vec::new(),
            dropped,
        }
    }

    #[must_use]
    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.toasts.iter().find(|t| t.id() == id)
    }

    /// Returns the toasts, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    /// Returns the toasts as a contiguous slice, newest first.
    pub fn as_slice(&mut self) -> &[Toast] {
        self.toasts.make_contiguous()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    #[must_use]
    pub fn limit(&self) -> ToastLimit {
        self.limit
    }
}
