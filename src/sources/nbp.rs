//! NBP data source integration
//!
//! The Polish central bank's rate-table API; table A carries the daily
//! mid fixing for the requested currency code.

use crate::error::{OutlookError, Result};
use crate::http;
use crate::sources::RateSource;
use crate::types::{RateObservation, Year};
use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use std::future::Future;

const NBP_BASE_URL: &str = "https://api.nbp.pl/api/exchangerates/rates";

/// NBP exchange-rate source (no API key required)
pub struct NbpSource {
    client: Client,
}

#[derive(Debug, Deserialize)]
struct NbpResponse {
    #[serde(default)]
    rates: Vec<NbpRate>,
}

#[derive(Debug, Deserialize)]
struct NbpRate {
    #[serde(rename = "effectiveDate")]
    effective_date: String,
    mid: f64,
}

impl NbpSource {
    /// Create a new NBP source
    pub fn new() -> Result<Self> {
        Ok(Self {
            client: http::client()?,
        })
    }

    fn year_url(year: Year) -> String {
        format!(
            "{}/A/EUR/{}-01-01/{}-12-31/?format=json",
            NBP_BASE_URL, year, year
        )
    }

    fn parse_response(response: NbpResponse) -> Result<Vec<RateObservation>> {
        let mut observations = Vec::with_capacity(response.rates.len());

        for rate in response.rates {
            let date = NaiveDate::parse_from_str(&rate.effective_date, "%Y-%m-%d")
                .map_err(|e| OutlookError::Malformed(format!("Date parse error: {}", e)))?;
            observations.push(RateObservation::new(date, rate.mid));
        }

        Ok(observations)
    }
}

impl RateSource for NbpSource {
    fn fetch_year(
        &self,
        year: Year,
    ) -> impl Future<Output = Result<Vec<RateObservation>>> + Send {
        async move {
            let url = Self::year_url(year);
            let response: NbpResponse = http::fetch_json(&self.client, &url).await?;
            Self::parse_response(response)
        }
    }

    fn name(&self) -> &str {
        "NBP"
    }
}
