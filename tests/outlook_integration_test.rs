//! End-to-end pipeline tests over synthetic data
//!
//! These tests exercise aggregation, forecasting, the shared axis range
//! and figure rendering without touching the network.

use approx::assert_relative_eq;
use chrono::NaiveDate;
use eurpln_outlook::chart::{render_figure, shared_price_range};
use eurpln_outlook::error::{OutlookError, Result};
use eurpln_outlook::forecast::predict;
use eurpln_outlook::sources::{monthly_averages_or_zero, monthly_means, RateSource};
use eurpln_outlook::types::{
    MonthlySeries, RateObservation, Year, YearlyDataset, MONTHS_PER_YEAR,
};
use std::future::Future;

fn obs(y: i32, m: u32, d: u32, rate: f64) -> RateObservation {
    RateObservation::new(NaiveDate::from_ymd_opt(y, m, d).unwrap(), rate)
}

#[test]
fn test_flat_years_scenario() {
    // NBP and Frankfurter agree: 4.5 across 2023, 4.6 across 2024. The
    // year-over-year step carries into January and the flat years
    // contribute no further drift.
    let prev = MonthlySeries::flat(4.5);
    let cur = MonthlySeries::flat(4.6);

    let predicted = predict(&prev, &prev, &cur, &cur);
    for month in 0..MONTHS_PER_YEAR {
        assert_relative_eq!(predicted[month], 4.7, max_relative = 1e-12);
    }

    let dataset = YearlyDataset {
        prev_year: 2023,
        cur_year: 2024,
        forecast_year: 2025,
        nbp_prev: prev,
        frankfurter_prev: prev,
        nbp_cur: cur,
        frankfurter_cur: cur,
        predicted,
    };

    // Extremes 4.5 and 4.7 padded by 0.05 on both sides
    let range = shared_price_range(&dataset.all_series());
    assert_relative_eq!(range.min, 4.45, max_relative = 1e-12);
    assert_relative_eq!(range.max, 4.75, max_relative = 1e-12);
}

#[test]
fn test_observations_to_projection() {
    // Two observations per month keep the expected means obvious.
    let mut prev_observations = Vec::new();
    let mut cur_observations = Vec::new();
    for month in 1..=12u32 {
        prev_observations.push(obs(2023, month, 5, 4.4));
        prev_observations.push(obs(2023, month, 20, 4.6));
        cur_observations.push(obs(2024, month, 5, 4.5));
        cur_observations.push(obs(2024, month, 20, 4.7));
    }

    let prev = monthly_means(2023, &prev_observations);
    let cur = monthly_means(2024, &cur_observations);
    assert_relative_eq!(prev[0], 4.5, max_relative = 1e-12);
    assert_relative_eq!(cur[6], 4.6, max_relative = 1e-12);

    let predicted = predict(&prev, &prev, &cur, &cur);
    for month in 0..MONTHS_PER_YEAR {
        assert_relative_eq!(predicted[month], 4.7, max_relative = 1e-9);
    }
}

struct OfflineSource;

impl RateSource for OfflineSource {
    fn fetch_year(
        &self,
        _year: Year,
    ) -> impl Future<Output = Result<Vec<RateObservation>>> + Send {
        async { Err(OutlookError::Transport("dns failure".to_string())) }
    }

    fn name(&self) -> &str {
        "offline"
    }
}

#[tokio::test]
async fn test_total_fetch_failure_still_renders() {
    // Every fetch fails; the pipeline degrades to zeros end to end and
    // the figure still comes out.
    let nbp_prev = monthly_averages_or_zero(&OfflineSource, 2023).await;
    let frankfurter_prev = monthly_averages_or_zero(&OfflineSource, 2023).await;
    let nbp_cur = monthly_averages_or_zero(&OfflineSource, 2024).await;
    let frankfurter_cur = monthly_averages_or_zero(&OfflineSource, 2024).await;

    assert!(nbp_prev.iter().all(|v| v == 0.0));
    assert!(frankfurter_cur.iter().all(|v| v == 0.0));

    let predicted = predict(&nbp_prev, &frankfurter_prev, &nbp_cur, &frankfurter_cur);
    assert!(predicted.iter().all(|v| v == 0.0));

    let dataset = YearlyDataset {
        prev_year: 2023,
        cur_year: 2024,
        forecast_year: 2025,
        nbp_prev,
        frankfurter_prev,
        nbp_cur,
        frankfurter_cur,
        predicted,
    };

    // Zero-filled series are still values, so the range is numeric
    // rather than the fixed fallback.
    let range = shared_price_range(&dataset.all_series());
    assert_relative_eq!(range.min, -0.05);
    assert_relative_eq!(range.max, 0.05);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("degraded.png");
    render_figure(&path, &dataset, range).unwrap();
    assert!(std::fs::metadata(&path).unwrap().len() > 0);
}
