// SPDX-License-Identifier: MPL-2.0
//! Observer registry for toast list broadcasts.

use super::record::Toast;
use super::toaster::Shared;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Weak};

/// Callback receiving the full toast list, newest first.
pub type Observer = Arc<dyn Fn(&[Toast]) + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ListenerId(u64);

/// Observers in registration order.
#[derive(Default)]
pub(crate) struct Listeners {
    next_id: u64,
    entries: Vec<(ListenerId, Observer)>,
}

impl Listeners {
    pub(crate) fn insert(&mut self, observer: Observer) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.entries.push((id, observer));
        id
    }

    pub(crate) fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    /// Clones the current observers so they can be called without holding
    /// a borrow on the registry.
    pub(crate) fn snapshot(&self) -> Vec<Observer> {
        self.entries
            .iter()
            .map(|(_, observer)| Arc::clone(observer))
            .collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Calls every observer in order. A panicking observer is logged and
/// skipped; the rest still receive the list.
pub(crate) fn notify(observers: &[Observer], toasts: &[Toast]) {
    tracing::trace!(observers = observers.len(), toasts = toasts.len(), "Broadcasting toasts");
    for observer in observers {
        if panic::catch_unwind(AssertUnwindSafe(|| observer(toasts))).is_err() {
            tracing::warn!("Toast observer panicked during broadcast");
        }
    }
}

/// Registration returned by [`Toaster::subscribe`](super::Toaster::subscribe).
///
/// Dropping it keeps the observer registered; call
/// [`unsubscribe`](Self::unsubscribe) to stop receiving broadcasts.
#[derive(Debug)]
pub struct Subscription {
    id: ListenerId,
    toaster: Weak<Shared>,
}

impl Subscription {
    pub(crate) fn new(id: ListenerId, toaster: Weak<Shared>) -> Self {
        Self { id, toaster }
    }

    /// Deregisters the observer. Returns `false` if it was already gone.
    pub fn unsubscribe(self) -> bool {
        self.toaster
            .upgrade()
            .is_some_and(|shared| shared.unsubscribe(self.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting(counter: &Arc<AtomicUsize>) -> Observer {
        let counter = Arc::clone(counter);
        Arc::new(move |_: &[Toast]| {
            counter.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[test]
    fn insert_and_remove_track_length() {
        let mut listeners = Listeners::default();
        let counter = Arc::new(AtomicUsize::new(0));

        let first = listeners.insert(counting(&counter));
        let second = listeners.insert(counting(&counter));
        assert_ne!(first, second);
        assert_eq!(listeners.len(), 2);

        assert!(listeners.remove(first));
        assert!(!listeners.remove(first));
        assert_eq!(listeners.len(), 1);
    }

    #[test]
    fn notify_skips_panicking_observer() {
        let counter = Arc::new(AtomicUsize::new(0));
        let panicking: Observer = Arc::new(|_: &[Toast]| panic!("renderer failed"));
        let observers = vec![counting(&counter), panicking, counting(&counter)];

        notify(&observers, &[]);

        assert_eq!(counter.load(Ordering::SeqCst), 2);
    }
}
