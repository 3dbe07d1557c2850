//! Time sources for time-driven shaders

mod clock;

pub use clock::{Clock, SystemClock, ManualClock};
