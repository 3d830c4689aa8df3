use chrono::NaiveDate;
use thiserror::Error;

use super::model::{RegionalReading, RegionalSeries, TemperaturePoint, TemperatureSeries};

// ---------------------------------------------------------------------------
// Public dataset
// ---------------------------------------------------------------------------

/// NOAA OISST v2.1 (AVHRR) sea-surface temperature, published as CSV.
/// Source: https://www.ncei.noaa.gov/products/optimum-interpolation-sst
pub const PUBLIC_DATA_URL: &str = "https://www.ncei.noaa.gov/data/sea-surface-temperature-optimum-interpolation/v2.1/access/avhrr/2023/AVHRR_OI_v2.1_20230101.csv";

/// Why the public fetch failed. Every variant recovers to the fallback
/// series; the split exists so the log can tell a dead network from an
/// upstream schema change.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("http request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("server answered {0}")]
    Status(reqwest::StatusCode),
    #[error("csv parse failed: {0}")]
    Parse(#[from] csv::Error),
}

/// Which dataset the public chart is actually showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesSource {
    Remote,
    Fallback,
}

/// The public series plus where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct PublicSeries {
    pub series: TemperatureSeries,
    pub source: SeriesSource,
}

/// Fetch and parse the remote public series.
pub fn fetch_public_series(url: &str, today: NaiveDate) -> Result<TemperatureSeries, FetchError> {
    let response = reqwest::blocking::get(url)?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status));
    }
    let body = response.text()?;
    parse_public_csv(&body, today)
}

/// Parse a CSV body with at least `date` and `value` columns (extra columns
/// are ignored) into a normalized series.
pub fn parse_public_csv(body: &str, today: NaiveDate) -> Result<TemperatureSeries, FetchError> {
    let mut reader = csv::Reader::from_reader(body.as_bytes());
    let mut rows = Vec::new();
    for row in reader.deserialize::<TemperaturePoint>() {
        rows.push(row?);
    }
    Ok(TemperatureSeries::from_rows(rows, today))
}

/// Load the public series, substituting the synthetic fallback on any
/// failure. Never fails; the result is tagged with its source so the UI
/// can surface the warning banner.
pub fn load_public_series(url: &str, today: NaiveDate) -> PublicSeries {
    match fetch_public_series(url, today) {
        Ok(series) => {
            log::info!("loaded {} public SST rows", series.len());
            PublicSeries {
                series,
                source: SeriesSource::Remote,
            }
        }
        Err(err) => {
            log::warn!("public SST load failed ({err}), substituting the synthetic series");
            PublicSeries {
                series: fallback_series(),
                source: SeriesSource::Fallback,
            }
        }
    }
}

/// Deterministic stand-in for the public series: twelve 2023 month-end
/// values linearly spaced from 26.0 to 28.0 °C. Returned verbatim, without
/// the future-date rule applied to fetched data.
pub fn fallback_series() -> TemperatureSeries {
    const MONTH_ENDS_2023: [(i32, u32, u32); 12] = [
        (2023, 1, 31),
        (2023, 2, 28),
        (2023, 3, 31),
        (2023, 4, 30),
        (2023, 5, 31),
        (2023, 6, 30),
        (2023, 7, 31),
        (2023, 8, 31),
        (2023, 9, 30),
        (2023, 10, 31),
        (2023, 11, 30),
        (2023, 12, 31),
    ];

    let last = (MONTH_ENDS_2023.len() - 1) as f64;
    let points = MONTH_ENDS_2023
        .iter()
        .enumerate()
        .filter_map(|(i, &(y, m, d))| {
            let date = NaiveDate::from_ymd_opt(y, m, d)?;
            let value = 26.0 + 2.0 * i as f64 / last;
            Some(TemperaturePoint { date, value })
        })
        .collect();

    TemperatureSeries { points }
}

// ---------------------------------------------------------------------------
// Sample dataset
// ---------------------------------------------------------------------------

pub const WEST_SEA: &str = "서해";
pub const SOUTH_SEA: &str = "남해";

/// Hard-coded 2024 sample table: six months of 서해 readings followed by six
/// months of 남해 readings, in chronological order. Rows dated after `today`
/// are dropped, which truncates the series on clocks earlier than the 2024
/// horizon.
pub fn sample_series(today: NaiveDate) -> RegionalSeries {
    const MONTH_ENDS_2024: [(i32, u32, u32); 12] = [
        (2024, 1, 31),
        (2024, 2, 29),
        (2024, 3, 31),
        (2024, 4, 30),
        (2024, 5, 31),
        (2024, 6, 30),
        (2024, 7, 31),
        (2024, 8, 31),
        (2024, 9, 30),
        (2024, 10, 31),
        (2024, 11, 30),
        (2024, 12, 31),
    ];
    const VALUES: [f64; 12] = [
        26.1, 26.5, 27.0, 27.2, 27.8, 28.0, 28.3, 28.5, 28.6, 28.9, 29.0, 29.2,
    ];

    let readings = MONTH_ENDS_2024
        .iter()
        .zip(VALUES)
        .enumerate()
        .filter_map(|(i, (&(y, m, d), value))| {
            let date = NaiveDate::from_ymd_opt(y, m, d)?;
            let region = if i < 6 { WEST_SEA } else { SOUTH_SEA };
            Some(RegionalReading {
                date,
                value,
                region: region.to_string(),
            })
        })
        .collect();

    RegionalSeries::from_readings(readings, today)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn fallback_series_is_the_documented_synthetic_set() {
        let series = fallback_series();

        assert_eq!(series.len(), 12);
        assert_eq!(series.points[0].date, d(2023, 1, 31));
        assert_eq!(series.points[11].date, d(2023, 12, 31));
        assert_eq!(series.points[0].value, 26.0);
        assert_eq!(series.points[11].value, 28.0);

        for pair in series.points.windows(2) {
            assert!(pair[0].date < pair[1].date);
            let step = pair[1].value - pair[0].value;
            assert!((step - 2.0 / 11.0).abs() < 1e-12);
        }
    }

    #[test]
    fn parse_keeps_only_past_unique_dates() {
        let body = "date,value,anom\n\
                    2023-02-28,26.4,0.1\n\
                    2023-01-31,26.0,0.2\n\
                    2023-02-28,27.9,0.3\n\
                    2099-01-31,30.0,0.4\n";
        let series = parse_public_csv(body, d(2023, 12, 31)).unwrap();

        assert_eq!(series.len(), 2);
        assert_eq!(series.points[0].date, d(2023, 1, 31));
        assert_eq!(series.points[1].date, d(2023, 2, 28));
        assert_eq!(series.points[1].value, 26.4);
    }

    #[test]
    fn body_without_expected_columns_is_a_parse_error() {
        let body = "station,anom\nbuoy-7,0.2\n";
        let err = parse_public_csv(body, d(2023, 12, 31)).unwrap_err();
        assert!(matches!(err, FetchError::Parse(_)));
    }

    #[test]
    fn non_numeric_value_is_a_parse_error() {
        let body = "date,value\n2023-01-31,warm\n";
        let err = parse_public_csv(body, d(2023, 12, 31)).unwrap_err();
        assert!(matches!(err, FetchError::Parse(_)));
    }

    #[test]
    fn unreachable_host_falls_back_to_the_synthetic_series() {
        let loaded = load_public_series("http://127.0.0.1:1/sst.csv", d(2023, 12, 31));

        assert_eq!(loaded.source, SeriesSource::Fallback);
        assert_eq!(loaded.series, fallback_series());
        assert_eq!(loaded.series.points[0].value, 26.0);
        assert_eq!(loaded.series.points[11].value, 28.0);
    }

    #[test]
    fn sample_series_is_six_west_then_six_south() {
        let series = sample_series(d(2025, 1, 1));

        assert_eq!(series.len(), 12);
        assert!(series.readings[..6].iter().all(|r| r.region == WEST_SEA));
        assert!(series.readings[6..].iter().all(|r| r.region == SOUTH_SEA));
        for pair in series.readings.windows(2) {
            assert!(pair[0].date < pair[1].date);
        }
        assert_eq!(series.readings[0].value, 26.1);
        assert_eq!(series.readings[11].value, 29.2);
    }

    #[test]
    fn sample_series_truncates_at_today() {
        let series = sample_series(d(2024, 6, 30));

        assert_eq!(series.len(), 6);
        assert!(series.readings.iter().all(|r| r.region == WEST_SEA));
        assert_eq!(series.regions.len(), 1);
    }
}
