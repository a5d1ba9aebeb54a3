// SPDX-License-Identifier: MPL-2.0
//! Toast queue domain types.
//!
//! This module provides pure domain types for the toast queue:
//! - [`ToastLimit`]: How many toasts the queue retains at once
//! - [`RemoveDelay`]: Delay between dismissal and physical removal

mod newtypes;

pub use newtypes::{limit_bounds, remove_delay_bounds, RemoveDelay, ToastLimit};
