//! Weighted, limit-aware cost model for physical join selection.
//!
//! A candidate's scalar cost is the weighted sum of its `JoinCoefficients`.
//! When the query only needs a limited number of results, blocking operators
//! that would iterate past that limit before emitting anything are penalized
//! by the cheapest streaming alternative's cost.

use medbus_core::config::WeightConfig;

use crate::join::JoinCoefficients;

/// Weighted sum of one cost vector.
///
/// The dimension/weight pairing is fixed: `blocking_items` goes with
/// `time_weight` and `request_time` with `io_weight`.
pub fn join_cost(c: &JoinCoefficients, w: &WeightConfig) -> f64 {
    c.iterations * w.cpu_weight
        + c.persisted_items * w.memory_weight
        + c.blocking_items * w.time_weight
        + c.request_time * w.io_weight
}

/// Penalize blocking candidates that iterate past `limit`.
///
/// `costs[i]` must be the raw cost of `coefficients[i]`. Every blocking
/// candidate with `iterations > limit` gets the minimum raw cost over the
/// non-blocking candidates added. NaN costs are not eligible as that
/// minimum. Without an eligible non-blocking candidate nothing changes.
pub fn apply_limit(coefficients: &[&JoinCoefficients], costs: &mut [f64], limit: u64) {
    debug_assert_eq!(coefficients.len(), costs.len());

    let min_non_blocking = coefficients
        .iter()
        .zip(costs.iter())
        .filter(|(c, _)| !c.is_blocking())
        .map(|(_, cost)| *cost)
        .filter(|cost| !cost.is_nan())
        .fold(None, |acc: Option<f64>, cost| match acc {
            Some(best) if best <= cost => Some(best),
            _ => Some(cost),
        });

    let Some(boost) = min_non_blocking else {
        return;
    };

    let limit = limit as f64;
    for (c, cost) in coefficients.iter().zip(costs.iter_mut()) {
        if c.is_blocking() && c.iterations > limit {
            *cost += boost;
        }
    }
}

/// Index of the strictly smallest cost; ties keep the earliest index. NaN
/// costs never win.
pub fn cheapest(costs: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &cost) in costs.iter().enumerate() {
        if cost.is_nan() {
            continue;
        }
        match best {
            Some((_, b)) if cost >= b => {}
            _ => best = Some((i, cost)),
        }
    }
    best.map(|(i, _)| i)
}
