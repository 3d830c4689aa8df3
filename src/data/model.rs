use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// TemperaturePoint / TemperatureSeries – the public dataset
// ---------------------------------------------------------------------------

/// One dated sea-surface temperature observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperaturePoint {
    pub date: NaiveDate,
    /// Temperature in °C.
    pub value: f64,
}

/// The public SST series. Normalized at construction and immutable after:
/// dates are ascending, unique, and never later than load-time "today".
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureSeries {
    pub points: Vec<TemperaturePoint>,
}

impl TemperatureSeries {
    /// Build a series from raw rows: rows dated after `today` are dropped,
    /// the rest sorted ascending and deduplicated by date (first occurrence
    /// wins).
    pub fn from_rows(mut rows: Vec<TemperaturePoint>, today: NaiveDate) -> Self {
        rows.retain(|p| p.date <= today);
        // Stable sort, so the first-seen row per date survives the dedup.
        rows.sort_by_key(|p| p.date);
        rows.dedup_by_key(|p| p.date);
        TemperatureSeries { points: rows }
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series has no observations.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

// ---------------------------------------------------------------------------
// RegionalReading / RegionalSeries – the sample dataset
// ---------------------------------------------------------------------------

/// One dated observation tagged with a coastal region label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionalReading {
    pub date: NaiveDate,
    /// Temperature in °C.
    pub value: f64,
    pub region: String,
}

/// The full regional sample table with its distinct region labels.
/// Filtering never mutates this; it yields row indices into `readings`.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionalSeries {
    pub readings: Vec<RegionalReading>,
    /// Sorted set of distinct region labels present in `readings`.
    pub regions: BTreeSet<String>,
}

impl RegionalSeries {
    /// Build the table from raw readings, dropping rows dated after `today`
    /// and indexing the distinct region labels.
    pub fn from_readings(mut readings: Vec<RegionalReading>, today: NaiveDate) -> Self {
        readings.retain(|r| r.date <= today);
        let regions = readings.iter().map(|r| r.region.clone()).collect();
        RegionalSeries { readings, regions }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}
