//! Clock display: hours and minutes composed into a time-of-day.
//!
//! A [`ClockDisplay`] owns two [`BoundedCounter`] fields. An external
//! driver calls [`tick`] once per simulated minute; the display advances
//! the minutes counter and carries into the hours counter when the minutes
//! roll over to zero.
//!
//! # Design Principles
//!
//! - Display strings are derived on demand from the counter values --
//!   never cached. The counters are the source of truth.
//! - `set_time` validates both fields before mutating either, so a
//!   rejected update never leaves the clock half-set.
//! - In 12-hour mode the half-day is tracked explicitly and toggled when
//!   the hours counter rolls over (11:59 AM becomes 12:00 PM).
//!
//! [`tick`]: ClockDisplay::tick

use ticktock_types::{DisplayMode, Meridiem};
use tracing::{debug, trace};

use crate::config::ClockConfig;
use crate::counter::{BoundedCounter, CounterError};

/// Minutes counter modulus, fixed for every display mode.
const MINUTES_PER_HOUR: u32 = 60;

/// Errors that can occur during clock display operations.
#[derive(Debug, thiserror::Error)]
pub enum ClockError {
    /// Invalid clock configuration (e.g. an unknown display mode string).
    #[error("invalid clock configuration: {reason}")]
    InvalidConfig {
        /// Explanation of what is wrong with the configuration.
        reason: String,
    },

    /// An hour or minute outside the valid range was supplied.
    #[error("{field} out of range: {source}")]
    OutOfRange {
        /// Which time field was rejected.
        field: &'static str,
        /// The underlying counter error.
        #[source]
        source: CounterError,
    },
}

/// A digital clock display composed of hours and minutes counters.
///
/// The display runs in one of two modes, fixed at construction:
///
/// - [`DisplayMode::TwentyFourHour`]: hours wrap at 24; the 12-hour
///   rendering derives the half-day from the hour value.
/// - [`DisplayMode::TwelveHour`]: hours wrap at 12; the half-day is
///   tracked in the display and flips on hour rollover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockDisplay {
    /// Hours counter (modulus 24 or 12 depending on mode).
    hours: BoundedCounter,

    /// Minutes counter (modulus 60).
    minutes: BoundedCounter,

    /// Rendering mode, fixed at construction.
    mode: DisplayMode,

    /// Current half-day. Only meaningful in 12-hour mode; in 24-hour
    /// mode the half-day is derived from the hour value instead.
    meridiem: Meridiem,
}

impl ClockDisplay {
    /// Create a display set to 00:00 (half-day AM in 12-hour mode).
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::InvalidConfig`] if a counter rejects its
    /// modulus. The built-in moduli are valid, so this is unreachable in
    /// practice but kept for uniform construction.
    pub fn new(mode: DisplayMode) -> Result<Self, ClockError> {
        let hours = BoundedCounter::new(hour_modulus(mode)).map_err(invalid_config)?;
        let minutes = BoundedCounter::new(MINUTES_PER_HOUR).map_err(invalid_config)?;
        Ok(Self {
            hours,
            minutes,
            mode,
            meridiem: Meridiem::Am,
        })
    }

    /// Create a display set to the given hour and minute.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::OutOfRange`] if the hour or minute is outside
    /// the valid range for the mode (e.g. hour 24 on a 24-hour clock).
    pub fn at(mode: DisplayMode, hour: u32, minute: u32) -> Result<Self, ClockError> {
        let mut clock = Self::new(mode)?;
        clock.set_time(hour, minute)?;
        Ok(clock)
    }

    /// Create a display from a typed configuration.
    ///
    /// The mode and starting half-day are given as strings in the config
    /// and parsed case-insensitively; the starting half-day only applies
    /// in 12-hour mode.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::InvalidConfig`] for an unknown mode or
    /// half-day string, or [`ClockError::OutOfRange`] for an invalid
    /// starting time.
    pub fn from_config(config: &ClockConfig) -> Result<Self, ClockError> {
        let mode = parse_mode(&config.mode)?;
        let mut clock = Self::at(mode, config.start_hour, config.start_minute)?;
        if mode == DisplayMode::TwelveHour {
            clock.meridiem = parse_meridiem(&config.start_meridiem)?;
        }
        Ok(clock)
    }

    /// Advance the clock by one simulated minute.
    ///
    /// The minutes counter increments; when it rolls over to zero the
    /// hours counter increments as well (wrapping at its own modulus).
    /// In 12-hour mode an hour rollover also flips the half-day.
    pub fn tick(&mut self) {
        if self.minutes.increment() == 0 {
            let hour = self.hours.increment();
            if self.mode == DisplayMode::TwelveHour && hour == 0 {
                self.meridiem = self.meridiem.toggled();
            }
            debug!(hour, "minutes rolled over, hour advanced");
        }
        trace!(
            hour = self.hours.value(),
            minute = self.minutes.value(),
            "tick"
        );
    }

    /// Set the display to the given hour and minute.
    ///
    /// Both fields are validated before either counter is mutated; a
    /// rejected update leaves the clock exactly as it was. The half-day is
    /// preserved in 12-hour mode, since an hour/minute pair cannot
    /// determine it.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::OutOfRange`] naming the offending field.
    pub fn set_time(&mut self, hour: u32, minute: u32) -> Result<(), ClockError> {
        self.hours.validate(hour).map_err(out_of_range_hour)?;
        self.minutes.validate(minute).map_err(out_of_range_minute)?;

        // Validated above; neither set can fail now.
        self.hours.set_value(hour).map_err(out_of_range_hour)?;
        self.minutes.set_value(minute).map_err(out_of_range_minute)?;

        debug!(hour, minute, "time set");
        Ok(())
    }

    /// Render the canonical display string `"HH:MM"`.
    ///
    /// Both fields are zero-padded raw counter values; a pure derivation
    /// with no side effects, so repeated calls without an intervening
    /// mutation return identical strings.
    pub fn time(&self) -> String {
        let hour = self.hours.display_value();
        let minute = self.minutes.display_value();
        format!("{hour}:{minute}")
    }

    /// Render the 12-hour display string `"H:MM AM"` / `"H:MM PM"`.
    ///
    /// The hour is unpadded. On a 24-hour clock the half-day is derived
    /// from the hour value (0 renders as 12 AM, 12 as 12 PM, 13-23 as
    /// 1-11 PM). On a native 12-hour clock hour 0 renders as 12 and the
    /// half-day is the tracked one.
    pub fn alternate_display(&self) -> String {
        let (hour, meridiem) = match self.mode {
            DisplayMode::TwentyFourHour => twelve_hour_parts(self.hours.value()),
            DisplayMode::TwelveHour => (zero_to_twelve(self.hours.value()), self.meridiem),
        };
        let minute = self.minutes.display_value();
        format!("{hour}:{minute} {meridiem}")
    }

    /// Return the current hour counter value.
    pub const fn hour(&self) -> u32 {
        self.hours.value()
    }

    /// Return the current minute counter value.
    pub const fn minute(&self) -> u32 {
        self.minutes.value()
    }

    /// Return the display mode.
    pub const fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Return the current half-day (meaningful in 12-hour mode).
    pub const fn meridiem(&self) -> Meridiem {
        self.meridiem
    }
}

/// Hours counter modulus for a display mode.
const fn hour_modulus(mode: DisplayMode) -> u32 {
    match mode {
        DisplayMode::TwentyFourHour => 24,
        DisplayMode::TwelveHour => 12,
    }
}

/// Reduce a 24-hour value to its 12-hour rendering and half-day.
fn twelve_hour_parts(hour: u32) -> (u32, Meridiem) {
    let meridiem = if hour >= 12 { Meridiem::Pm } else { Meridiem::Am };
    let reduced = hour.checked_rem(12).unwrap_or(0);
    (zero_to_twelve(reduced), meridiem)
}

/// Apply the zero-maps-to-12 rule of 12-hour rendering.
const fn zero_to_twelve(hour: u32) -> u32 {
    if hour == 0 { 12 } else { hour }
}

/// Map a counter construction failure into a configuration error.
fn invalid_config(source: CounterError) -> ClockError {
    ClockError::InvalidConfig {
        reason: source.to_string(),
    }
}

/// Attach the hour field name to a counter range error.
const fn out_of_range_hour(source: CounterError) -> ClockError {
    ClockError::OutOfRange {
        field: "hour",
        source,
    }
}

/// Attach the minute field name to a counter range error.
const fn out_of_range_minute(source: CounterError) -> ClockError {
    ClockError::OutOfRange {
        field: "minute",
        source,
    }
}

/// Parse a display mode name into a typed [`DisplayMode`] value.
///
/// # Errors
///
/// Returns [`ClockError::InvalidConfig`] if the string does not match a
/// known mode.
fn parse_mode(name: &str) -> Result<DisplayMode, ClockError> {
    match name.to_lowercase().as_str() {
        "24-hour" | "24h" | "twenty-four-hour" => Ok(DisplayMode::TwentyFourHour),
        "12-hour" | "12h" | "twelve-hour" => Ok(DisplayMode::TwelveHour),
        other => Err(ClockError::InvalidConfig {
            reason: format!("unknown display mode: {other}"),
        }),
    }
}

/// Parse a half-day name into a typed [`Meridiem`] value.
///
/// # Errors
///
/// Returns [`ClockError::InvalidConfig`] if the string does not match
/// `am` or `pm`.
fn parse_meridiem(name: &str) -> Result<Meridiem, ClockError> {
    match name.to_lowercase().as_str() {
        "am" => Ok(Meridiem::Am),
        "pm" => Ok(Meridiem::Pm),
        other => Err(ClockError::InvalidConfig {
            reason: format!("unknown half-day: {other}"),
        }),
    }
}
