mod maths_utils;
mod time_utils;

pub use time_utils::{AppInstant, ClockFormat, TimeUtils, elapsed_ms, format_clock_time};

pub(crate) use maths_utils::{mean_or_zero, min_max, padded_range};
