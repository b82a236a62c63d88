//! Next-year projection
//!
//! A cumulative first-difference extrapolation: December of the current
//! year seeds the accumulator and each forecast month advances it by the
//! month-over-month delta averaged across the two observed years. No
//! clamping and no smoothing.

use crate::types::{MonthlySeries, Price, MONTHS_PER_YEAR};

/// Project the next year from two observed years
///
/// Each year is first blended elementwise from its two provider series.
/// The January step uses the December→January delta across the year
/// boundary; later months average the same-position deltas of both years.
pub fn predict(
    nbp_prev: &MonthlySeries,
    frankfurter_prev: &MonthlySeries,
    nbp_cur: &MonthlySeries,
    frankfurter_cur: &MonthlySeries,
) -> MonthlySeries {
    let y_prev = nbp_prev.blend(frankfurter_prev);
    let y_cur = nbp_cur.blend(frankfurter_cur);

    let mut predicted = [0.0; MONTHS_PER_YEAR];
    let mut base: Price = y_cur[11];

    for i in 0..MONTHS_PER_YEAR {
        let change = if i == 0 {
            y_cur[0] - y_prev[11]
        } else {
            ((y_prev[i] - y_prev[i - 1]) + (y_cur[i] - y_cur[i - 1])) / 2.0
        };
        base += change;
        predicted[i] = base;
    }

    MonthlySeries::new(predicted)
}
