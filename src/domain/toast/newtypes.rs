// SPDX-License-Identifier: MPL-2.0
//! Toast queue newtypes.
//!
//! This module provides type-safe wrappers for queue settings,
//! ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// Limit Bounds
// =============================================================================

/// Queue limit bounds (at least one toast, no upper bound).
pub mod limit_bounds {
    /// Minimum number of retained toasts.
    pub const MIN: usize = 1;
    /// Default number of retained toasts.
    pub const DEFAULT: usize = 1;
}

// =============================================================================
// Remove Delay Bounds
// =============================================================================

/// Removal delay bounds in milliseconds (0 to one hour).
pub mod remove_delay_bounds {
    /// Minimum delay.
    pub const MIN_MS: u64 = 0;
    /// Maximum delay.
    pub const MAX_MS: u64 = 3_600_000;
    /// Default delay.
    pub const DEFAULT_MS: u64 = 1_000_000;
}

// =============================================================================
// ToastLimit
// =============================================================================

/// Maximum number of toasts retained in the queue.
///
/// This newtype enforces validity at the type level, ensuring the queue
/// can always hold at least one toast.
///
/// # Example
///
/// ```
/// use toast_queue::domain::toast::ToastLimit;
///
/// assert_eq!(ToastLimit::new(3).value(), 3);
///
/// // Zero is raised to the minimum
/// assert_eq!(ToastLimit::new(0).value(), 1);
/// assert_eq!(ToastLimit::new(50).value(), 50);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastLimit(usize);

impl ToastLimit {
    /// Creates a new limit, raising it to the minimum if needed.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.max(limit_bounds::MIN))
    }

    /// Returns the value as usize.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }

    /// Returns true if this is the minimum value.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= limit_bounds::MIN
    }
}

impl Default for ToastLimit {
    fn default() -> Self {
        Self(limit_bounds::DEFAULT)
    }
}

// =============================================================================
// RemoveDelay
// =============================================================================

/// Delay between dismissing a toast and removing it from the queue.
///
/// The hidden toast stays in the queue for this long so renderers can
/// play an exit animation. Clamped to 0 ms – 1 hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoveDelay(u64);

impl RemoveDelay {
    /// Creates a new delay from milliseconds, clamping to valid range.
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self(millis.clamp(remove_delay_bounds::MIN_MS, remove_delay_bounds::MAX_MS))
    }

    /// Returns the delay in milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Returns the delay as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }

    /// Returns true if removal happens on the next runtime turn.
    #[must_use]
    pub fn is_immediate(self) -> bool {
        self.0 == 0
    }
}

impl Default for RemoveDelay {
    fn default() -> Self {
        Self(remove_delay_bounds::DEFAULT_MS)
    }
}

// =============================================================================
// Tests
// =============================================================================
