/// Data layer: core types, loading, filtering, and CSV export.
///
/// Architecture:
/// ```text
///   remote CSV ──▶ loader ──▶ TemperatureSeries ─────────────▶ export
///                    │ (fallback series on any fetch error)
///   hard-coded ────▶ loader ──▶ RegionalSeries ──▶ filter ───▶ export
/// ```

pub mod export;
pub mod filter;
pub mod loader;
pub mod model;
