use crate::color::ColorMap;
use crate::data::filter::{self, RegionSelection};
use crate::data::loader::PublicSeries;
use crate::data::model::RegionalSeries;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Public series once the startup fetch resolves (None while loading).
    pub public: Option<PublicSeries>,

    /// The hard-coded regional sample table, built once at startup.
    pub sample: RegionalSeries,

    /// Region labels currently checked in the sidebar.
    pub selected_regions: RegionSelection,

    /// Region → line colour.
    pub color_map: ColorMap,

    /// Status line for export results, shown in the top bar.
    pub status_message: Option<String>,

    /// Whether the public fetch is still in flight.
    pub loading: bool,
}

impl AppState {
    /// State for a freshly opened window: sample table ready, every region
    /// selected, public series pending.
    pub fn new(sample: RegionalSeries) -> Self {
        let selected_regions = filter::init_selection(&sample);
        let color_map = ColorMap::new(&sample.regions);
        Self {
            public: None,
            sample,
            selected_regions,
            color_map,
            status_message: None,
            loading: true,
        }
    }

    /// Ingest the startup fetch result.
    pub fn set_public(&mut self, loaded: PublicSeries) {
        self.public = Some(loaded);
        self.loading = false;
    }

    /// The derived view: indices of sample rows passing the region filter.
    /// Recomputed on every call; the view is never cached.
    pub fn filtered_view(&self) -> Vec<usize> {
        filter::filtered_indices(&self.sample, &self.selected_regions)
    }

    /// Toggle one region checkbox.
    pub fn toggle_region(&mut self, region: &str) {
        if !self.selected_regions.remove(region) {
            self.selected_regions.insert(region.to_string());
        }
    }

    /// Select every region.
    pub fn select_all_regions(&mut self) {
        self.selected_regions = self.sample.regions.clone();
    }

    /// Deselect every region; the filtered view becomes empty.
    pub fn select_no_regions(&mut self) {
        self.selected_regions = RegionSelection::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::{sample_series, SOUTH_SEA, WEST_SEA};
    use chrono::NaiveDate;

    fn state() -> AppState {
        AppState::new(sample_series(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()))
    }

    #[test]
    fn new_state_selects_every_region() {
        let state = state();
        assert_eq!(state.selected_regions, state.sample.regions);
        assert_eq!(state.filtered_view().len(), state.sample.len());
    }

    #[test]
    fn toggling_a_region_narrows_then_restores_the_view() {
        let mut state = state();

        state.toggle_region(WEST_SEA);
        let view = state.filtered_view();
        assert_eq!(view.len(), 6);
        assert!(view.iter().all(|&i| state.sample.readings[i].region == SOUTH_SEA));

        state.toggle_region(WEST_SEA);
        assert_eq!(state.filtered_view().len(), 12);
    }

    #[test]
    fn select_none_empties_the_view() {
        let mut state = state();
        state.select_no_regions();
        assert!(state.filtered_view().is_empty());

        state.select_all_regions();
        assert_eq!(state.filtered_view().len(), 12);
    }
}
