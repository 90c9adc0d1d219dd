//! Shared test clocks and fixtures for the Cattery service.

mod clock;
mod dates;

pub use clock::{FixedClock, SteppingClock};
pub use dates::{utc, utc_hms};
