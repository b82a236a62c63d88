//! # EUR/PLN Outlook
//!
//! Fetches historical EUR→PLN exchange rates from two public providers
//! (the NBP table A fixing and the Frankfurter history API), reduces each
//! provider year to twelve monthly mean rates, projects the following
//! year with an averaged first-difference extrapolation and renders a
//! three-panel comparison chart.
//!
//! ## Example
//!
//! ```rust,no_run
//! use eurpln_outlook::pipeline;
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> eurpln_outlook::error::Result<()> {
//!     pipeline::run(Path::new("eur_pln_outlook.png")).await
//! }
//! ```

pub mod chart;
pub mod error;
pub mod forecast;
pub mod http;
pub mod pipeline;
pub mod sources;
pub mod types;

pub mod prelude {
    //! Commonly used types and traits
    pub use crate::chart::{shared_price_range, PriceRange};
    pub use crate::error::{OutlookError, Result};
    pub use crate::forecast::predict;
    pub use crate::sources::{
        monthly_averages_or_zero, monthly_means, FrankfurterSource, NbpSource, RateSource,
    };
    pub use crate::types::*;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lib_compile() {
        // Smoke test to ensure library compiles
        let _ = types::MonthlySeries::zeros();
    }
}
