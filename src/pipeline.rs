//! Top-level orchestration
//!
//! Fetch, aggregate, forecast and render in one pass. No fetch failure is
//! fatal: a missing year degrades to an all-zero series and the figure
//! still renders.

use crate::chart::{self, shared_price_range};
use crate::error::Result;
use crate::forecast::predict;
use crate::sources::{monthly_averages_or_zero, FrankfurterSource, NbpSource};
use crate::types::{Year, YearlyDataset};
use std::path::Path;

/// First observed year
pub const PREVIOUS_YEAR: Year = 2023;
/// Second observed year
pub const CURRENT_YEAR: Year = 2024;
/// Projected year
pub const FORECAST_YEAR: Year = 2025;

/// Run the whole pipeline and write the figure to `output`
///
/// The four fetches run sequentially in a fixed order (NBP before
/// Frankfurter, earlier year first) so log output stays deterministic.
pub async fn run(output: &Path) -> Result<()> {
    let nbp = NbpSource::new()?;
    let frankfurter = FrankfurterSource::new()?;

    let nbp_prev = monthly_averages_or_zero(&nbp, PREVIOUS_YEAR).await;
    let frankfurter_prev = monthly_averages_or_zero(&frankfurter, PREVIOUS_YEAR).await;
    let nbp_cur = monthly_averages_or_zero(&nbp, CURRENT_YEAR).await;
    let frankfurter_cur = monthly_averages_or_zero(&frankfurter, CURRENT_YEAR).await;

    let predicted = predict(&nbp_prev, &frankfurter_prev, &nbp_cur, &frankfurter_cur);

    let dataset = YearlyDataset {
        prev_year: PREVIOUS_YEAR,
        cur_year: CURRENT_YEAR,
        forecast_year: FORECAST_YEAR,
        nbp_prev,
        frankfurter_prev,
        nbp_cur,
        frankfurter_cur,
        predicted,
    };
    let range = shared_price_range(&dataset.all_series());

    log::info!("Rendering figure to {}", output.display());
    chart::render_figure(output, &dataset, range)?;

    Ok(())
}
