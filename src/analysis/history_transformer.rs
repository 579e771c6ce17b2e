//! Reshapes fetched price samples into chart-ready series.
//!
//! Pure and deterministic for a given time zone and clock format: no sorting,
//! filtering or deduplication, the service's order is trusted.

use {
    chrono::TimeZone,
    std::fmt,
};

use crate::{
    domain::PriceSample,
    utils::{ClockFormat, format_clock_time, mean_or_zero, min_max},
};

/// One chart point: a wall-clock label and the price observed at that instant.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayPoint {
    pub label: String,
    pub price: f64,
}

/// Display points plus the whole-window mean.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransformedHistory {
    pub points: Vec<DisplayPoint>,
    pub average: f64,
}

impl TransformedHistory {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// `[x, price]` with x the sample's position in the history.
    pub fn price_series(&self) -> Vec<[f64; 2]> {
        self.points
            .iter()
            .enumerate()
            .map(|(i, p)| [i as f64, p.price])
            .collect()
    }

    /// Flat `[x, average]` series aligned with `price_series`.
    pub fn average_series(&self) -> Vec<[f64; 2]> {
        (0..self.points.len())
            .map(|i| [i as f64, self.average])
            .collect()
    }

    /// Label for an x position on the ordinal axis, if it lands on a sample.
    pub fn label_at(&self, x: f64) -> Option<&str> {
        let rounded = x.round();
        if (x - rounded).abs() > 1e-6 || rounded < 0.0 {
            return None;
        }
        self.points.get(rounded as usize).map(|p| p.label.as_str())
    }

    pub fn price_bounds(&self) -> Option<(f64, f64)> {
        let prices: Vec<f64> = self.points.iter().map(|p| p.price).collect();
        min_max(&prices)
    }
}

pub fn transform_history<Tz>(
    history: Option<&[PriceSample]>,
    tz: &Tz,
    clock: ClockFormat,
) -> TransformedHistory
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let samples = history.unwrap_or_default();

    let points: Vec<DisplayPoint> = samples
        .iter()
        .map(|s| DisplayPoint {
            label: format_clock_time(&s.last_updated_at, tz, clock),
            price: s.price,
        })
        .collect();

    let prices: Vec<f64> = points.iter().map(|p| p.price).collect();

    TransformedHistory {
        average: mean_or_zero(&prices),
        points,
    }
}
