// SPDX-License-Identifier: MPL-2.0
//! Per-toast handle returned by [`Toaster::show`].

use super::record::{Toast, ToastId, ToastPatch};
use super::toaster::Toaster;

/// Controls one toast after it has been shown.
///
/// The handle stays valid after the toast is gone; its operations then
/// do nothing.
#[derive(Debug, Clone)]
pub struct ToastHandle {
    id: ToastId,
    toaster: Toaster,
}

impl ToastHandle {
    pub(crate) fn new(id: ToastId, toaster: Toaster) -> Self {
        Self { id, toaster }
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    /// Hides the toast and schedules its removal.
    pub fn dismiss(&self) {
        self.toaster.dismiss(Some(self.id));
    }

    /// Merges `patch` into the toast.
    pub fn update(&self, patch: ToastPatch) {
        self.toaster.update(self.id, patch);
    }

    /// Forwards a renderer's open/close event for this toast.
    pub fn set_open(&self, open: bool) {
        self.toaster.set_open(self.id, open);
    }

    /// Returns a copy of the toast, if it is still in the queue.
    #[must_use]
    pub fn toast(&self) -> Option<Toast> {
        self.toaster.get(self.id)
    }
}
