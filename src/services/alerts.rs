//! Budget-alert evaluation with once-per-category-per-day dedup.

use chrono::NaiveDate;

use crate::models::{Alert, Category, NotificationState};
use crate::services::aggregator::MonthlyAggregation;

/// Categories at or above this share of their limit become alert candidates.
pub const NOTIFY_THRESHOLD_PERCENT: i64 = 80;

/// Pick at most one alert for this evaluation: the highest uncapped
/// percent-of-limit among categories that crossed the threshold and have
/// not been alerted today on this channel. Equal percents fall back to
/// canonical category order, which keeps selection deterministic.
///
/// The returned alert is not recorded; callers acknowledge explicitly.
pub fn evaluate(
    aggregation: &MonthlyAggregation,
    state: &NotificationState,
    today: NaiveDate,
) -> Option<Alert> {
    let mut candidates: Vec<Alert> = aggregation
        .rows
        .iter()
        .filter(|row| row.total > 0.0)
        .map(|row| Alert {
            category: row.category,
            amount: row.total,
            limit: row.limit,
            percent: (100.0 * row.total / row.limit).round() as i64,
            is_over: row.total > row.limit,
        })
        .filter(|alert| {
            alert.percent >= NOTIFY_THRESHOLD_PERCENT
                && !state.has_notified(today, alert.category)
        })
        .collect();

    candidates.sort_by(|a, b| b.percent.cmp(&a.percent).then(a.category.cmp(&b.category)));
    candidates.into_iter().next()
}

/// Record that a category's alert was surfaced, yielding the dedup state
/// to persist. Stale state from a previous day is discarded, which is the
/// implicit daily reset. Re-acknowledging the same category is a no-op.
pub fn acknowledge(
    category: Category,
    state: &NotificationState,
    today: NaiveDate,
) -> NotificationState {
    let mut next = if state.date == today {
        state.clone()
    } else {
        NotificationState::empty(today)
    };
    next.notified.insert(category);
    next
}
