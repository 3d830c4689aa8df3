use anyhow::{Context, Result};

use super::model::{RegionalSeries, TemperatureSeries};

// ---------------------------------------------------------------------------
// CSV export of the charted tables
// ---------------------------------------------------------------------------

/// Default file names offered by the save dialogs.
pub const PUBLIC_CSV_NAME: &str = "public_sea_temp.csv";
pub const USER_CSV_NAME: &str = "user_sea_temp.csv";

/// Serialize the public series as `date,value` CSV, header row included.
pub fn public_series_csv(series: &TemperatureSeries) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    if series.is_empty() {
        writer
            .write_record(["date", "value"])
            .context("writing csv header")?;
    }
    for point in &series.points {
        writer.serialize(point).context("serializing public row")?;
    }
    into_string(writer)
}

/// Serialize the filtered view of the regional table as `date,value,region`
/// CSV, header row included. `indices` is the view produced by the region
/// filter; rows are written in view order.
pub fn regional_view_csv(series: &RegionalSeries, indices: &[usize]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    if indices.is_empty() {
        writer
            .write_record(["date", "value", "region"])
            .context("writing csv header")?;
    }
    for &idx in indices {
        writer
            .serialize(&series.readings[idx])
            .context("serializing regional row")?;
    }
    into_string(writer)
}

fn into_string(writer: csv::Writer<Vec<u8>>) -> Result<String> {
    let bytes = writer
        .into_inner()
        .map_err(|err| anyhow::anyhow!("flushing csv writer: {err}"))?;
    String::from_utf8(bytes).context("csv output was not utf-8")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::{filtered_indices, RegionSelection};
    use crate::data::loader::{fallback_series, sample_series, SOUTH_SEA};
    use crate::data::model::{RegionalReading, TemperaturePoint};
    use chrono::NaiveDate;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn public_csv_round_trips() {
        let series = fallback_series();
        let text = public_series_csv(&series).unwrap();

        assert!(text.starts_with("date,value\n"));
        let mut reader = csv::Reader::from_reader(text.as_bytes());
        let rows: Vec<TemperaturePoint> = reader.deserialize().collect::<Result<_, _>>().unwrap();
        assert_eq!(rows, series.points);
    }

    #[test]
    fn regional_csv_exports_exactly_the_filtered_view() {
        let series = sample_series(d(2025, 1, 1));
        let selection: RegionSelection = [SOUTH_SEA.to_string()].into();
        let indices = filtered_indices(&series, &selection);
        let text = regional_view_csv(&series, &indices).unwrap();

        assert!(text.starts_with("date,value,region\n"));
        let mut reader = csv::Reader::from_reader(text.as_bytes());
        let rows: Vec<RegionalReading> = reader.deserialize().collect::<Result<_, _>>().unwrap();

        let expected: Vec<RegionalReading> =
            indices.iter().map(|&i| series.readings[i].clone()).collect();
        assert_eq!(rows, expected);
        assert_eq!(rows.len(), 6);
        assert!(rows.iter().all(|r| r.region == SOUTH_SEA));
    }

    #[test]
    fn empty_public_series_still_writes_the_header() {
        let series = TemperatureSeries { points: Vec::new() };
        let text = public_series_csv(&series).unwrap();
        assert_eq!(text.trim_end(), "date,value");
    }

    #[test]
    fn empty_view_still_writes_the_header() {
        let series = sample_series(d(2025, 1, 1));
        let text = regional_view_csv(&series, &[]).unwrap();
        assert_eq!(text.trim_end(), "date,value,region");
    }
}
