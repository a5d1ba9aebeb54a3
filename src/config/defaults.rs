// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Queue**: How many toasts may be retained at once
//! - **Removal**: Delay between dismissal and physical removal

// ==========================================================================
// Queue Defaults
// ==========================================================================

/// Default number of toasts retained in the queue.
pub const DEFAULT_TOAST_LIMIT: usize = 1;

/// Minimum queue size. A queue that holds nothing cannot display anything.
/// There is no maximum.
pub const MIN_TOAST_LIMIT: usize = 1;

// ==========================================================================
// Removal Defaults
// ==========================================================================

/// Default delay between dismissing a toast and removing it (in milliseconds).
///
/// Long enough for any exit animation; renderers usually unmount hidden
/// toasts themselves well before this fires.
pub const DEFAULT_REMOVE_DELAY_MS: u64 = 1_000_000;

/// Minimum removal delay (in milliseconds). Zero removes on the next runtime turn.
pub const MIN_REMOVE_DELAY_MS: u64 = 0;

/// Maximum removal delay (in milliseconds), one hour.
pub const MAX_REMOVE_DELAY_MS: u64 = 3_600_000;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_default_is_within_bounds() {
        assert!(DEFAULT_TOAST_LIMIT >= MIN_TOAST_LIMIT);
    }

    #[test]
    fn remove_delay_default_is_within_bounds() {
        assert!((MIN_REMOVE_DELAY_MS..=MAX_REMOVE_DELAY_MS).contains(&DEFAULT_REMOVE_DELAY_MS));
    }
}
