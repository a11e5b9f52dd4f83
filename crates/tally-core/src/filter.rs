//! Pure query layer over a store snapshot

use chrono::{Duration, Local, NaiveDate};

use crate::models::{DateRange, FilterCriteria, Transaction};

/// Select transactions matching `criteria`, using today's local date for
/// the trailing-window cutoff.
pub fn select(snapshot: &[Transaction], criteria: &FilterCriteria) -> Vec<Transaction> {
    select_as_of(snapshot, criteria, Local::now().date_naive())
}

/// `select` with an explicit "today".
///
/// The predicate is the conjunction of category equality, kind equality,
/// and `date >= today - days` (inclusive: a transaction dated exactly at
/// the cutoff is retained). The result is sorted by date descending; the
/// sort is stable, so same-date transactions keep their snapshot order.
pub fn select_as_of(
    snapshot: &[Transaction],
    criteria: &FilterCriteria,
    today: NaiveDate,
) -> Vec<Transaction> {
    let cutoff = match criteria.date_range {
        DateRange::Days(days) => Some(today - Duration::days(i64::from(days))),
        DateRange::All => None,
    };

    let mut matched: Vec<Transaction> = snapshot
        .iter()
        .filter(|t| {
            criteria
                .category
                .as_deref()
                .map_or(true, |c| t.category == c)
                && criteria.kind.map_or(true, |k| t.kind == k)
                && cutoff.map_or(true, |cut| t.date >= cut)
        })
        .cloned()
        .collect();

    matched.sort_by(|a, b| b.date.cmp(&a.date));
    matched
}
