//! Exchange-rate providers
//!
//! This module provides the two public EUR/PLN history sources:
//! - NBP: the Polish central bank's table A fixing
//! - Frankfurter: the generic currency-history API
//!
//! Both sit behind the same one-year fetch contract. The reduction to
//! monthly means and the degrade-to-zeros boundary live here so the
//! adapters share them.

pub mod frankfurter;
pub mod nbp;

pub use frankfurter::FrankfurterSource;
pub use nbp::NbpSource;

use crate::error::Result;
use crate::types::{MonthlySeries, Price, RateObservation, Year, MONTHS_PER_YEAR};
use chrono::Datelike;
use statrs::statistics::Statistics;

/// Contract shared by rate providers
pub trait RateSource {
    /// Fetch every observation the provider has for one calendar year
    fn fetch_year(
        &self,
        year: Year,
    ) -> impl std::future::Future<Output = Result<Vec<RateObservation>>> + Send;

    /// Provider name used in legends and logs
    fn name(&self) -> &str;
}

/// Bucket observations by calendar month and reduce each bucket to its
/// arithmetic mean; a month without observations reduces to `0.0`.
///
/// Observations from a different year than requested are discarded. The
/// provider URLs already bound the date range, so the filter should not
/// normally trigger.
pub fn monthly_means(year: Year, observations: &[RateObservation]) -> MonthlySeries {
    let mut buckets: [Vec<Price>; MONTHS_PER_YEAR] = Default::default();

    for obs in observations {
        if obs.date.year() != year {
            continue;
        }
        buckets[obs.date.month0() as usize].push(obs.rate);
    }

    let mut means = [0.0; MONTHS_PER_YEAR];
    for (slot, bucket) in means.iter_mut().zip(buckets.iter()) {
        if !bucket.is_empty() {
            *slot = Statistics::mean(bucket.iter());
        }
    }

    MonthlySeries::new(means)
}

/// Degrade boundary: any fetch failure becomes an all-zero series, so a
/// missing year never aborts the pipeline.
pub async fn monthly_averages_or_zero<S: RateSource>(source: &S, year: Year) -> MonthlySeries {
    match source.fetch_year(year).await {
        Ok(observations) => {
            log::debug!(
                "{} returned {} observations for {}",
                source.name(),
                observations.len(),
                year
            );
            monthly_means(year, &observations)
        }
        Err(e) => {
            log::error!("Error with downloading data: {}", e);
            log::warn!("There is no data for year {}", year);
            MonthlySeries::zeros()
        }
    }
}
