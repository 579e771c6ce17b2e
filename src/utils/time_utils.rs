use {
    chrono::{DateTime, TimeZone, Utc},
    serde::{Deserialize, Serialize},
    std::fmt,
};

/// Instant that works on both native and wasm (std::time::Instant panics in the browser).
pub type AppInstant = web_time::Instant;

pub struct TimeUtils;

impl TimeUtils {
    pub const CLOCK_FORMAT_12H: &str = "%-I:%M:%S %p";
    pub const CLOCK_FORMAT_24H: &str = "%H:%M:%S";
}

/// How sample timestamps are rendered on the time axis and in tooltips.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClockFormat {
    /// `3:04:05 PM` (en-US style, the default)
    #[default]
    TwelveHour,
    /// `15:04:05`
    TwentyFourHour,
}

impl ClockFormat {
    pub fn pattern(self) -> &'static str {
        match self {
            Self::TwelveHour => TimeUtils::CLOCK_FORMAT_12H,
            Self::TwentyFourHour => TimeUtils::CLOCK_FORMAT_24H,
        }
    }
}

impl fmt::Display for ClockFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::TwelveHour => write!(f, "12h"),
            Self::TwentyFourHour => write!(f, "24h"),
        }
    }
}

/// Render an absolute instant as a wall-clock time in `tz`.
pub fn format_clock_time<Tz>(instant: &DateTime<Utc>, tz: &Tz, clock: ClockFormat) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    instant.with_timezone(tz).format(clock.pattern()).to_string()
}

pub fn elapsed_ms(start: AppInstant) -> u128 {
    start.elapsed().as_millis()
}
