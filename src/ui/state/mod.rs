// SPDX-License-Identifier: MPL-2.0
//! Reusable UI state management.
//!
//! Animation and gesture logic lives here, separated from the overlay
//! component that orchestrates it.

pub mod pan;
pub mod spring;

// Re-export commonly used types for convenience
pub use pan::{PanRecognizer, Release};
pub use spring::{Spring, SpringParams};
