//! Bounded counters and the composed clock display for the Ticktock simulation.
//!
//! This crate owns the whole of the clock logic: a wrapping counter with
//! zero-padded rendering, the hours/minutes composition that carries on
//! minute rollover, and the typed configuration that selects the display
//! mode and starting time.
//!
//! # Modules
//!
//! - [`counter`] -- [`BoundedCounter`], a wrapping numeric field with a
//!   fixed modulus.
//! - [`display`] -- [`ClockDisplay`], hours and minutes composed into a
//!   time-of-day with 24-hour and 12-hour rendering.
//! - [`config`] -- Configuration loading from YAML into strongly-typed
//!   structs.
//!
//! [`BoundedCounter`]: counter::BoundedCounter
//! [`ClockDisplay`]: display::ClockDisplay

pub mod config;
pub mod counter;
pub mod display;
