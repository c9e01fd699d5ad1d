//! Ordering rules applied before matching.

use core::cmp::Ordering;

use chrono::NaiveDate;

use wms_location::{Location, ProximityRanker};
use wms_stock::StockItemAssignmentRequest;

/// FEFO comparison of two expiration dates.
///
/// Earlier dates first; undated (non-perishable) stock after every dated line,
/// and equal among itself.
pub fn compare_expiry(a: Option<NaiveDate>, b: Option<NaiveDate>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Assignable requests in FEFO order. Expired lines are dropped.
///
/// The sort is stable: lines with the same expiry keep their input order.
pub fn fefo_order(requests: &[StockItemAssignmentRequest]) -> Vec<&StockItemAssignmentRequest> {
    let mut ordered: Vec<&StockItemAssignmentRequest> =
        requests.iter().filter(|r| r.is_assignable()).collect();
    ordered.sort_by(|a, b| compare_expiry(a.expiration_date(), b.expiration_date()));
    ordered
}

/// Assignable locations, closest to the picking zone first.
///
/// Ranks are computed once per location; ties keep their input order.
pub fn proximity_order<'a, R>(locations: &'a [Location], ranker: &R) -> Vec<&'a Location>
where
    R: ProximityRanker + ?Sized,
{
    let mut ranked: Vec<(u32, &Location)> = locations
        .iter()
        .filter(|l| l.is_assignable())
        .map(|l| (ranker.rank(l), l))
        .collect();
    ranked.sort_by_key(|(rank, _)| *rank);
    ranked.into_iter().map(|(_, l)| l).collect()
}
