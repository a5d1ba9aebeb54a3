// SPDX-License-Identifier: MPL-2.0
//! Toast queue lifecycle management.
//!
//! The `Toaster` owns the toast list, the removal timers and the observers.
//! Dismissing a toast hides it right away and removes it after the
//! configured delay, so renderers have time to animate it out.
//!
//! Mutations are serialized by a re-entrant lock. Observers are called with
//! the lock held but no borrow outstanding, so an observer may call back into
//! the toaster. A change made during a broadcast is not delivered in the
//! middle of it: the running broadcast finishes, then every observer gets
//! one more snapshot read after the nested change. The last list each
//! observer sees is always the current one.

use super::handle::ToastHandle;
use super::record::{Toast, ToastFields, ToastId, ToastPatch};
use super::state::{ToastState, Transition};
use super::subscription::{notify, ListenerId, Listeners, Observer, Subscription};
use crate::config::ToastSettings;
use crate::domain::toast::{RemoveDelay, ToastLimit};
use parking_lot::{ReentrantMutex, ReentrantMutexGuard};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::task::AbortHandle;
use tokio::time::Instant;

/// Messages for toast state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Merge a patch into a toast.
    Update(ToastId, ToastPatch),
    /// Dismiss one toast, or all of them.
    Dismiss(Option<ToastId>),
    /// Remove one toast, or all of them, without waiting.
    Remove(Option<ToastId>),
    /// A renderer opened or closed a toast.
    OpenChanged(ToastId, bool),
}

struct Inner {
    state: ToastState,
    /// Pending removal timers, keyed by toast.
    timers: HashMap<ToastId, AbortHandle>,
    listeners: Listeners,
    next_id: u64,
    /// A broadcast is running further up the stack.
    broadcasting: bool,
    /// The list changed while `broadcasting`; deliver it once more.
    pending_broadcast: bool,
}

pub(crate) struct Shared {
    inner: ReentrantMutex<RefCell<Inner>>,
    remove_delay: RemoveDelay,
    runtime: Option<Handle>,
}

impl Shared {
    pub(crate) fn unsubscribe(&self, id: ListenerId) -> bool {
        let guard = self.inner.lock();
        let removed = guard.borrow_mut().listeners.remove(id);
        removed
    }
}

impl fmt::Debug for Shared {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shared")
            .field("remove_delay", &self.remove_delay)
            .field("has_runtime", &self.runtime.is_some())
            .finish_non_exhaustive()
    }
}

/// Manages the toast list and broadcasts it to observers.
///
/// Cloning a `Toaster` yields another handle to the same queue. Build one
/// at startup and hand clones to whoever needs to show toasts.
///
/// # Example
///
/// ```
/// use toast_queue::{ToastFields, Toaster};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let toaster = Toaster::default();
/// let subscription = toaster.subscribe(|toasts| {
///     for toast in toasts {
///         println!("{:?} visible={}", toast.title(), toast.is_visible());
///     }
/// });
///
/// let handle = toaster.show(ToastFields::titled("Deal submitted"));
/// handle.dismiss();
/// assert!(!toaster.get(handle.id()).unwrap().is_visible());
///
/// subscription.unsubscribe();
/// # }
/// ```
#[derive(Clone)]
pub struct Toaster {
    shared: Arc<Shared>,
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new(ToastLimit::default(), RemoveDelay::default())
    }
}

impl fmt::Debug for Toaster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Toaster")
            .field("len", &self.len())
            .field("limit", &self.limit())
            .field("remove_delay", &self.remove_delay())
            .finish_non_exhaustive()
    }
}

impl Toaster {
    /// Creates an empty toaster.
    ///
    /// Removal timers run on the tokio runtime current at this call. Without
    /// one, dismissed toasts stay hidden until removed explicitly.
    #[must_use]
    pub fn new(limit: ToastLimit, remove_delay: RemoveDelay) -> Self {
        let runtime = Handle::try_current().ok();
        if runtime.is_none() {
            tracing::warn!("No tokio runtime available; dismissed toasts will not be removed automatically");
        }
        Self::build(limit, remove_delay, runtime)
    }

    /// Creates an empty toaster whose removal timers run on `runtime`.
    #[must_use]
    pub fn with_runtime(limit: ToastLimit, remove_delay: RemoveDelay, runtime: Handle) -> Self {
        Self::build(limit, remove_delay, Some(runtime))
    }

    /// Creates an empty toaster from the `[toast]` settings section.
    #[must_use]
    pub fn from_settings(settings: &ToastSettings) -> Self {
        Self::new(settings.limit(), settings.remove_delay())
    }

    fn build(limit: ToastLimit, remove_delay: RemoveDelay, runtime: Option<Handle>) -> Self {
        let inner = Inner {
            state: ToastState::new(limit),
            timers: HashMap::new(),
            listeners: Listeners::default(),
            next_id: 1,
            broadcasting: false,
            pending_broadcast: false,
        };
        Self {
            shared: Arc::new(Shared {
                inner: ReentrantMutex::new(RefCell::new(inner)),
                remove_delay,
                runtime,
            }),
        }
    }

    /// Shows a new toast at the front of the list.
    ///
    /// If the list is full, the oldest toast is evicted.
    pub fn show(&self, fields: ToastFields) -> ToastHandle {
        let guard = self.shared.inner.lock();
        let id = {
            let mut inner = guard.borrow_mut();
            let id = ToastId::from_raw(inner.next_id);
            inner.next_id = inner.next_id.wrapping_add(1);
            id
        };
        tracing::debug!(id = %id, "Showing toast");
        self.mutate(|inner| inner.state.add(Toast::new(id, fields)));
        drop(guard);
        ToastHandle::new(id, self.clone())
    }

    /// Merges `patch` into the toast with the given id.
    pub fn update(&self, id: ToastId, patch: ToastPatch) {
        self.mutate(|inner| inner.state.update(id, patch));
    }

    /// Hides one toast (or all of them when `id` is `None`) and schedules
    /// its removal.
    pub fn dismiss(&self, id: Option<ToastId>) {
        self.mutate(|inner| inner.state.dismiss(id));
    }

    /// Removes one toast (or all of them when `id` is `None`) immediately.
    pub fn remove(&self, id: Option<ToastId>) {
        self.mutate(|inner| inner.state.remove(id));
    }

    /// Reacts to a renderer opening or closing a toast.
    ///
    /// Closing a visible toast dismisses it; anything else is ignored, so a
    /// toast is dismissed at most once through this path.
    pub fn set_open(&self, id: ToastId, open: bool) {
        if open {
            return;
        }
        let _guard = self.shared.inner.lock();
        if self.get(id).is_some_and(|toast| toast.is_visible()) {
            self.dismiss(Some(id));
        }
    }

    /// Handles a toast message.
    pub fn handle_message(&self, message: Message) {
        match message {
            Message::Update(id, patch) => self.update(id, patch),
            Message::Dismiss(id) => self.dismiss(id),
            Message::Remove(id) => self.remove(id),
            Message::OpenChanged(id, open) => self.set_open(id, open),
        }
    }

    /// Registers an observer.
    ///
    /// The observer is called immediately with the current list, then after
    /// every change, after observers registered before it.
    pub fn subscribe<F>(&self, observer: F) -> Subscription
    where
        F: Fn(&[Toast]) + Send + Sync + 'static,
    {
        let observer: Observer = Arc::new(observer);
        let guard = self.shared.inner.lock();
        let (id, snapshot) = {
            let mut inner = guard.borrow_mut();
            let id = inner.listeners.insert(Arc::clone(&observer));
            (id, inner.state.as_slice().to_vec())
        };
        notify(&[observer], &snapshot);
        drop(guard);
        Subscription::new(id, Arc::downgrade(&self.shared))
    }

    /// Returns a copy of the current toasts, newest first.
    #[must_use]
    pub fn toasts(&self) -> Vec<Toast> {
        let guard = self.shared.inner.lock();
        let toasts = guard.borrow_mut().state.as_slice().to_vec();
        toasts
    }

    /// Returns a copy of the toast with the given id.
    #[must_use]
    pub fn get(&self, id: ToastId) -> Option<Toast> {
        let guard = self.shared.inner.lock();
        let toast = guard.borrow().state.get(id).cloned();
        toast
    }

    #[must_use]
    pub fn len(&self) -> usize {
        let guard = self.shared.inner.lock();
        let len = guard.borrow().state.len();
        len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of scheduled removal timers.
    #[must_use]
    pub fn pending_removals(&self) -> usize {
        let guard = self.shared.inner.lock();
        let pending = guard.borrow().timers.len();
        pending
    }

    /// Returns the number of registered observers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        let guard = self.shared.inner.lock();
        let count = guard.borrow().listeners.len();
        count
    }

    #[must_use]
    pub fn limit(&self) -> ToastLimit {
        let guard = self.shared.inner.lock();
        let limit = guard.borrow().state.limit();
        limit
    }

    #[must_use]
    pub fn remove_delay(&self) -> RemoveDelay {
        self.shared.remove_delay
    }

    /// Applies a state change, reconciles the removal timers and broadcasts
    /// the list if it changed.
    ///
    /// Called from an observer, the broadcast is deferred to the outermost
    /// call, which repeats its broadcast until no nested change is pending.
    fn mutate(&self, change: impl FnOnce(&mut Inner) -> Transition) {
        let guard = self.shared.inner.lock();
        let start_broadcast = {
            let mut borrowed = guard.borrow_mut();
            let inner = &mut *borrowed;
            let transition = change(inner);

            for id in &transition.dropped {
                if let Some(timer) = inner.timers.remove(id) {
                    timer.abort();
                    tracing::debug!(id = %id, "Cancelled removal timer");
                }
            }
            for id in &transition.dismissed {
                self.schedule_removal(inner, *id);
            }
            if !transition.dropped.is_empty() {
                tracing::debug!(dropped = ?transition.dropped, "Toasts left the queue");
            }

            if !transition.changed {
                tracing::trace!("Toast change was a no-op");
                false
            } else if inner.broadcasting {
                inner.pending_broadcast = true;
                false
            } else {
                inner.broadcasting = true;
                true
            }
        };

        if start_broadcast {
            self.flush(&guard);
        }
        drop(guard);
    }

    /// Broadcasts the current list, again and again while observers keep
    /// changing it.
    fn flush(&self, guard: &ReentrantMutexGuard<'_, RefCell<Inner>>) {
        loop {
            let (snapshot, observers) = {
                let mut inner = guard.borrow_mut();
                inner.pending_broadcast = false;
                (inner.state.as_slice().to_vec(), inner.listeners.snapshot())
            };
            notify(&observers, &snapshot);

            let mut inner = guard.borrow_mut();
            if !inner.pending_broadcast {
                inner.broadcasting = false;
                return;
            }
            tracing::trace!("Toasts changed during broadcast, broadcasting again");
        }
    }

    /// Starts the removal timer for `id` unless one is already pending.
    fn schedule_removal(&self, inner: &mut Inner, id: ToastId) {
        if inner.timers.contains_key(&id) {
            return;
        }
        let Some(runtime) = &self.shared.runtime else {
            tracing::warn!(id = %id, "Cannot schedule toast removal without a runtime");
            return;
        };

        let _enter = runtime.enter();
        let deadline = Instant::now() + self.shared.remove_delay.as_duration();
        let weak = Arc::downgrade(&self.shared);
        let task = runtime.spawn(async move {
            tokio::time::sleep_until(deadline).await;
            if let Some(shared) = weak.upgrade() {
                Toaster { shared }.expire(id);
            }
        });
        inner.timers.insert(id, task.abort_handle());
        tracing::debug!(id = %id, delay_ms = self.shared.remove_delay.as_millis(), "Scheduled toast removal");
    }

    /// Called by a removal timer once its delay has elapsed.
    fn expire(&self, id: ToastId) {
        self.mutate(|inner| {
            inner.timers.remove(&id);
            inner.state.remove(Some(id))
        });
    }
}
