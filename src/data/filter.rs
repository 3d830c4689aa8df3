use std::collections::BTreeSet;

use super::model::RegionalSeries;

// ---------------------------------------------------------------------------
// Region filter: which labels are checked in the sidebar
// ---------------------------------------------------------------------------

/// The set of region labels currently selected.
pub type RegionSelection = BTreeSet<String>;

/// Initial selection: every region present in the base table.
pub fn init_selection(series: &RegionalSeries) -> RegionSelection {
    series.regions.clone()
}

/// Indices of readings whose region is selected, in original row order.
/// An empty selection selects nothing; the chart then renders no lines.
pub fn filtered_indices(series: &RegionalSeries, selection: &RegionSelection) -> Vec<usize> {
    series
        .readings
        .iter()
        .enumerate()
        .filter(|(_, r)| selection.contains(&r.region))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::{sample_series, SOUTH_SEA, WEST_SEA};
    use chrono::NaiveDate;

    fn base() -> RegionalSeries {
        sample_series(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap())
    }

    #[test]
    fn default_selection_covers_the_whole_table() {
        let series = base();
        let selection = init_selection(&series);
        let indices = filtered_indices(&series, &selection);
        assert_eq!(indices, (0..series.len()).collect::<Vec<_>>());
    }

    #[test]
    fn empty_selection_yields_an_empty_view() {
        let series = base();
        let indices = filtered_indices(&series, &RegionSelection::new());
        assert!(indices.is_empty());
    }

    #[test]
    fn south_sea_subset_is_the_second_half_in_order() {
        let series = base();
        let selection: RegionSelection = [SOUTH_SEA.to_string()].into();
        let indices = filtered_indices(&series, &selection);

        assert_eq!(indices, (6..12).collect::<Vec<_>>());
        for &idx in &indices {
            assert_eq!(series.readings[idx].region, SOUTH_SEA);
        }
    }

    #[test]
    fn west_sea_subset_keeps_original_row_order() {
        let series = base();
        let selection: RegionSelection = [WEST_SEA.to_string()].into();
        let indices = filtered_indices(&series, &selection);

        assert_eq!(indices, (0..6).collect::<Vec<_>>());
        let dates: Vec<_> = indices.iter().map(|&i| series.readings[i].date).collect();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted);
    }

    #[test]
    fn unknown_label_matches_nothing() {
        let series = base();
        let selection: RegionSelection = ["동해".to_string()].into();
        assert!(filtered_indices(&series, &selection).is_empty());
    }
}
