//! Route ranking for aggregated search results.

use std::cmp::Ordering;

use super::Criterion;
use super::route::Route;

/// Compare two routes under `criterion`.
///
/// Routes are ranked by:
/// - Time: total time, then total cost, then transfers.
/// - Cost: total cost, then total time, then transfers.
/// - Transfers: transfers, then total cost, then total time.
pub fn compare_routes(a: &Route, b: &Route, criterion: Criterion) -> Ordering {
    let time = || a.total_time().cmp(&b.total_time());
    let cost = || a.total_cost().total_cmp(&b.total_cost());
    let transfers = || a.transfers().cmp(&b.transfers());

    match criterion {
        Criterion::Time => time().then_with(cost).then_with(transfers),
        Criterion::Cost => cost().then_with(time).then_with(transfers),
        Criterion::Transfers => transfers().then_with(cost).then_with(time),
    }
}

/// Sort routes best-first under `criterion` and keep the first `limit`.
///
/// The sort is stable: routes that compare equal keep their input order.
pub fn rank_routes(mut routes: Vec<Route>, criterion: Criterion, limit: usize) -> Vec<Route> {
    routes.sort_by(|a, b| compare_routes(a, b, criterion));
    routes.truncate(limit);
    routes
}
