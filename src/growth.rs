//! Growth chart series
//!
//! An illustrative weight-by-day trajectory: the current weight on day 1,
//! growing linearly by a fixed daily gain up to the current postnatal day.
//! Rendering is left to the caller; [`GrowthSeries::write_csv`] exports the
//! points for any plotting tool.

use crate::error::NeoError;
use crate::patient::limits;
use csv::WriterBuilder;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Default daily weight gain (kg/day)
pub const DEFAULT_DAILY_GAIN_KG: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthPoint {
    /// Day of life, starting at 1
    pub day: u32,
    pub weight_kg: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GrowthSeries {
    points: Vec<GrowthPoint>,
}

impl GrowthSeries {
    pub fn points(&self) -> &[GrowthPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn days(&self) -> Vec<u32> {
        self.points.iter().map(|p| p.day).collect()
    }

    pub fn weights(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.weight_kg).collect()
    }

    /// Write the series as `day,weight_kg` CSV
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), NeoError> {
        let mut wtr = WriterBuilder::new().has_headers(true).from_writer(writer);
        for point in &self.points {
            wtr.serialize(point)?;
        }
        wtr.flush()?;
        Ok(())
    }
}

/// One point per day of life, from day 1 to `postnatal_age_days`
///
/// The day count is capped at the largest accepted postnatal age.
pub fn growth_series(weight_kg: f64, postnatal_age_days: u32, daily_gain_kg: f64) -> GrowthSeries {
    let (_, max_days) = limits::POSTNATAL_AGE_DAYS;
    let points = (1..=postnatal_age_days.min(max_days))
        .map(|day| GrowthPoint {
            day,
            weight_kg: weight_kg + f64::from(day - 1) * daily_gain_kg,
        })
        .collect();
    GrowthSeries { points }
}
