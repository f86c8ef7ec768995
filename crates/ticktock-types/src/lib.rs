//! Shared type definitions for the Ticktock clock simulation.
//!
//! This crate is the single source of truth for the types used across the
//! Ticktock workspace.
//!
//! # Modules
//!
//! - [`enums`] -- Enumeration types (display mode, meridiem)

pub mod enums;

// Re-export all public types at crate root for convenience.
pub use enums::{DisplayMode, Meridiem};
