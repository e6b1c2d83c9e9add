use std::cmp::Ordering;

use crate::{MonthlyAverage, MonthlySeries};

/// The `n` months with the highest averages, highest first.
///
/// Equal averages keep their series order. Fewer than `n` months are
/// returned as-is.
pub fn best_months(series: &MonthlySeries, n: usize) -> Vec<MonthlyAverage> {
    ranked(series, n, |a, b| b.average.total_cmp(&a.average))
}

/// The `n` months with the lowest averages, lowest first.
pub fn worst_months(series: &MonthlySeries, n: usize) -> Vec<MonthlyAverage> {
    ranked(series, n, |a, b| a.average.total_cmp(&b.average))
}

fn ranked<F>(series: &MonthlySeries, n: usize, compare: F) -> Vec<MonthlyAverage>
where
    F: FnMut(&MonthlyAverage, &MonthlyAverage) -> Ordering,
{
    let mut months = series.months.clone();
    months.sort_by(compare);
    months.truncate(n);
    months
}
