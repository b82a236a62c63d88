//! Chart rendering
//!
//! Draws the three stacked panels (two observed years and the projection)
//! with a shared y range so the panels are visually comparable.

use crate::error::{OutlookError, Result};
use crate::types::{MonthlySeries, Price, Year, YearlyDataset, MONTH_ABBREVS, MONTHS_PER_YEAR};
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::{RangedCoordf64, RangedCoordu32};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use std::path::Path;

/// Figure size in pixels, tall enough for three stacked panels
const FIGURE_SIZE: (u32, u32) = (1000, 1400);

/// Margin added above and below the observed extremes
const RANGE_PADDING: Price = 0.05;

/// Axis range used when there are no values at all
///
/// Unreachable from the pipeline itself: the adapters always hand back a
/// 12-length series, so the combined value list is never empty there.
const FALLBACK_RANGE: PriceRange = PriceRange { min: 4.0, max: 5.0 };

const MAROON: RGBColor = RGBColor(128, 0, 0);

/// Shared y-axis range across all panels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    pub min: Price,
    pub max: Price,
}

/// A scaffolded panel ready for series drawing
pub type Panel<'a, 'b> =
    ChartContext<'a, BitMapBackend<'b>, Cartesian2d<RangedCoordu32, RangedCoordf64>>;

/// Compute the shared axis range: the combined extremes padded by 0.05,
/// or the fixed fallback when the combined value list is empty.
pub fn shared_price_range(series: &[&MonthlySeries]) -> PriceRange {
    let values: Vec<Price> = series.iter().flat_map(|s| s.iter()).collect();
    if values.is_empty() {
        return FALLBACK_RANGE;
    }

    let min = values.iter().copied().fold(f64::INFINITY, Price::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, Price::max);

    PriceRange {
        min: min - RANGE_PADDING,
        max: max + RANGE_PADDING,
    }
}

fn chart_err<E: std::fmt::Display>(e: E) -> OutlookError {
    OutlookError::Chart(e.to_string())
}

fn month_points(series: &MonthlySeries) -> impl Iterator<Item = (u32, Price)> + Clone + '_ {
    (1..=MONTHS_PER_YEAR as u32).map(move |month| (month, series[(month - 1) as usize]))
}

/// Draw one panel: axis scaffolding plus up to two observed provider
/// series. The legend appears only when a series was plotted; with both
/// series absent the caller receives the bare scaffolding to draw on.
pub fn draw_panel<'a, 'b>(
    area: &'a DrawingArea<BitMapBackend<'b>, Shift>,
    title: &str,
    nbp: Option<&MonthlySeries>,
    frankfurter: Option<&MonthlySeries>,
    range: PriceRange,
) -> Result<Panel<'a, 'b>>
where
    'b: 'a,
{
    let mut chart = ChartBuilder::on(area)
        .caption(title, ("sans-serif", 22))
        .margin(12)
        .x_label_area_size(40)
        .y_label_area_size(55)
        .build_cartesian_2d(1u32..MONTHS_PER_YEAR as u32, range.min..range.max)
        .map_err(chart_err)?;

    chart
        .configure_mesh()
        .x_labels(MONTHS_PER_YEAR)
        .x_label_formatter(&|month| {
            MONTH_ABBREVS
                .get((*month as usize).saturating_sub(1))
                .copied()
                .unwrap_or("")
                .to_string()
        })
        .x_desc("Months")
        .y_desc("Price of 1 EUR in PLN")
        .draw()
        .map_err(chart_err)?;

    if let Some(series) = nbp {
        draw_nbp(&mut chart, series)?;
    }
    if let Some(series) = frankfurter {
        draw_frankfurter(&mut chart, series)?;
    }
    if nbp.is_some() || frankfurter.is_some() {
        draw_legend(&mut chart)?;
    }

    Ok(chart)
}

fn draw_nbp(chart: &mut Panel<'_, '_>, series: &MonthlySeries) -> Result<()> {
    chart
        .draw_series(LineSeries::new(month_points(series), &BLUE))
        .map_err(chart_err)?
        .label("NBP")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], BLUE));

    chart
        .draw_series(month_points(series).map(|point| Circle::new(point, 4, BLUE.filled())))
        .map_err(chart_err)?;

    Ok(())
}

fn draw_frankfurter(chart: &mut Panel<'_, '_>, series: &MonthlySeries) -> Result<()> {
    chart
        .draw_series(DashedLineSeries::new(
            month_points(series),
            8,
            5,
            ShapeStyle::from(&RED),
        ))
        .map_err(chart_err)?
        .label("Frankfurter")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], RED));

    chart
        .draw_series(month_points(series).map(|point| Circle::new(point, 2, RED.filled())))
        .map_err(chart_err)?;

    Ok(())
}

/// Draw the projected series with diamond markers
pub fn draw_prediction(
    chart: &mut Panel<'_, '_>,
    series: &MonthlySeries,
    year: Year,
) -> Result<()> {
    chart
        .draw_series(LineSeries::new(month_points(series), &MAROON))
        .map_err(chart_err)?
        .label(format!("Prediction {}", year))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], MAROON));

    chart
        .draw_series(month_points(series).map(|point| {
            EmptyElement::at(point)
                + Polygon::new(vec![(0, -5), (6, 0), (0, 5), (-6, 0)], MAROON.filled())
        }))
        .map_err(chart_err)?;

    Ok(())
}

/// Draw the legend box for every labeled series on the panel
pub fn draw_legend<'a, 'b>(chart: &mut Panel<'a, 'b>) -> Result<()>
where
    'b: 'a,
{
    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .position(SeriesLabelPosition::UpperRight)
        .draw()
        .map_err(chart_err)?;

    Ok(())
}

/// Render the full three-panel figure to a bitmap image
pub fn render_figure(path: &Path, dataset: &YearlyDataset, range: PriceRange) -> Result<()> {
    let root = BitMapBackend::new(path, FIGURE_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let titled = root
        .titled("Euro exchange rate comparison", ("sans-serif", 28))
        .map_err(chart_err)?;
    let panels = titled.split_evenly((3, 1));

    draw_panel(
        &panels[0],
        &format!("Year {}", dataset.prev_year),
        Some(&dataset.nbp_prev),
        Some(&dataset.frankfurter_prev),
        range,
    )?;
    draw_panel(
        &panels[1],
        &format!("Year {}", dataset.cur_year),
        Some(&dataset.nbp_cur),
        Some(&dataset.frankfurter_cur),
        range,
    )?;

    // The prediction panel gets scaffolding only, then its single series.
    let mut prediction_panel = draw_panel(
        &panels[2],
        &format!("Prediction for year {}", dataset.forecast_year),
        None,
        None,
        range,
    )?;
    draw_prediction(
        &mut prediction_panel,
        &dataset.predicted,
        dataset.forecast_year,
    )?;
    draw_legend(&mut prediction_panel)?;

    root.present().map_err(chart_err)?;

    Ok(())
}
