// SPDX-License-Identifier: MPL-2.0
//! `toast_queue` keeps the toast notifications of an application: a small,
//! bounded list of transient messages that renderers subscribe to.
//!
//! Toasts are shown through a [`Toaster`], dismissed (hidden, then removed
//! after a delay that leaves room for exit animations) or removed outright.
//! Every change is broadcast as a full snapshot to subscribed observers.

#![doc(html_root_url = "https://docs.rs/toast_queue/0.1.0")]

pub mod config;
pub mod domain;
pub mod error;
pub mod toast;

pub use error::{Error, Result};
pub use toast::{
    Message, Subscription, Toast, ToastAction, ToastFields, ToastHandle, ToastId, ToastPatch,
    Toaster, Variant,
};
