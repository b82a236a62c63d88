//! Frankfurter data source integration
//!
//! Free currency-history API keyed by date range and target currency;
//! returns one date→quotes entry per business day.

use crate::error::{OutlookError, Result};
use crate::http;
use crate::sources::RateSource;
use crate::types::{RateObservation, Year};
use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::future::Future;

const FRANKFURTER_BASE_URL: &str = "https://api.frankfurter.app";

/// Frankfurter exchange-rate source (no API key required)
pub struct FrankfurterSource {
    client: Client,
}

#[derive(Debug, Deserialize)]
struct FrankfurterResponse {
    #[serde(default)]
    rates: HashMap<String, HashMap<String, f64>>,
}

impl FrankfurterSource {
    /// Create a new Frankfurter source
    pub fn new() -> Result<Self> {
        Ok(Self {
            client: http::client()?,
        })
    }

    fn year_url(year: Year) -> String {
        format!(
            "{}/{}-01-01..{}-12-31?to=PLN",
            FRANKFURTER_BASE_URL, year, year
        )
    }

    fn parse_response(response: FrankfurterResponse) -> Result<Vec<RateObservation>> {
        let mut observations = Vec::with_capacity(response.rates.len());

        for (date_str, quotes) in response.rates {
            // Entries without a PLN quote carry nothing for this pipeline
            if let Some(&rate) = quotes.get("PLN") {
                let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
                    .map_err(|e| OutlookError::Malformed(format!("Date parse error: {}", e)))?;
                observations.push(RateObservation::new(date, rate));
            }
        }

        // Map iteration order is arbitrary; keep observations chronological
        observations.sort_by_key(|obs| obs.date);

        Ok(observations)
    }
}

impl RateSource for FrankfurterSource {
    fn fetch_year(
        &self,
        year: Year,
    ) -> impl Future<Output = Result<Vec<RateObservation>>> + Send {
        async move {
            let url = Self::year_url(year);
            let response: FrankfurterResponse = http::fetch_json(&self.client, &url).await?;
            Self::parse_response(response)
        }
    }

    fn name(&self) -> &str {
        "Frankfurter"
    }
}
