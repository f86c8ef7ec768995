//! Enumeration types for the Ticktock clock simulation.

use serde::{Deserialize, Serialize};

/// Rendering mode of a clock display, fixed at construction.
///
/// The mode determines the modulus of the hours counter (24 or 12) and
/// which rendering policy applies when producing the 12-hour string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DisplayMode {
    /// European-style clock: hours run 00 through 23.
    TwentyFourHour,
    /// Native 12-hour clock: hours run 0 through 11, with the half-day
    /// tracked separately as a [`Meridiem`].
    TwelveHour,
}

/// The half-day designator used in 12-hour time rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Meridiem {
    /// Ante meridiem: midnight up to (but excluding) noon.
    Am,
    /// Post meridiem: noon up to (but excluding) midnight.
    Pm,
}

impl Meridiem {
    /// Return the opposite half-day.
    pub const fn toggled(self) -> Self {
        match self {
            Self::Am => Self::Pm,
            Self::Pm => Self::Am,
        }
    }
}

impl core::fmt::Display for Meridiem {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Am => write!(f, "AM"),
            Self::Pm => write!(f, "PM"),
        }
    }
}
