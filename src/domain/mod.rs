// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core value types with ZERO external dependencies.
//!
//! This module contains pure domain types and value objects. It has no
//! dependencies on external crates (except `std`) so the rules it encodes
//! can be tested in isolation.
//!
//! # Modules
//!
//! - [`toast`]: Toast queue settings ([`ToastLimit`](toast::ToastLimit),
//!   [`RemoveDelay`](toast::RemoveDelay))

pub mod toast;
