// SPDX-License-Identifier: MPL-2.0
//! Toast notification queue.
//!
//! This module keeps the short-lived notifications an application shows
//! after user actions (deal submitted, suggestion ready, request failed).
//! Renderers subscribe to the queue and draw whatever it broadcasts.
//!
//! # Components
//!
//! - [`record`] - `Toast` records and the `ToastFields`/`ToastPatch` requests
//! - [`state`] - Timer-free bounded list with the queue's transition rules
//! - [`toaster`] - `Toaster`, which adds removal timers and observers
//! - [`handle`] - `ToastHandle` returned for each shown toast
//! - [`subscription`] - Observer registration
//!
//! # Usage
//!
//! ```ignore
//! use toast_queue::{ToastFields, Toaster};
//!
//! // Build once at startup and share clones
//! let toaster = Toaster::from_settings(&config.toast);
//!
//! // Render on every change
//! let subscription = toaster.subscribe(|toasts| render(toasts));
//!
//! // Show, then dismiss when the user closes it
//! let handle = toaster.show(ToastFields::titled("Deal submitted"));
//! handle.set_open(false);
//! ```
//!
//! # Design Considerations
//!
//! - Only one toast is kept by default; showing another evicts the oldest
//! - Dismissed toasts stay (hidden) until their removal timer fires
//! - Operations on unknown ids are ignored

pub mod handle;
pub mod record;
pub mod state;
pub mod subscription;
pub mod toaster;

pub use handle::ToastHandle;
pub use record::{Toast, ToastAction, ToastFields, ToastId, ToastPatch, Variant};
pub use state::{ToastState, Transition};
pub use subscription::{Observer, Subscription};
pub use toaster::{Message, Toaster};
