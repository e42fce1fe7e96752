//! Per-category totals and percentages for one calendar month.

use serde::Serialize;

use crate::date_utils::Period;
use crate::models::{Category, CategoryLimits, Transaction};
use crate::services::classifier;

#[derive(Debug, Clone, Serialize)]
pub struct CategorySpending {
    pub category: Category,
    pub label: &'static str,
    pub icon: &'static str,
    pub total: f64,
    pub limit: f64,
    /// Rounded percent of the category limit, capped at 100 for display.
    /// Alerting recomputes the uncapped value from `total` and `limit`.
    pub percent_of_limit: i64,
    /// Rounded share of the month's total spend; 0 when nothing was spent.
    pub percent_of_total: i64,
}

impl CategorySpending {
    pub fn is_over_limit(&self) -> bool {
        self.total > self.limit
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthlyAggregation {
    pub period: Period,
    /// One row per canonical category, zeros included.
    pub rows: Vec<CategorySpending>,
    pub total_expense: f64,
}

impl MonthlyAggregation {
    pub fn row(&self, category: Category) -> &CategorySpending {
        // rows always hold all nine categories in canonical order
        &self.rows[category as usize]
    }

    /// Highest-total category with any spend. Ties keep the earliest row
    /// in canonical order.
    pub fn top_category(&self) -> Option<&CategorySpending> {
        self.rows
            .iter()
            .filter(|r| r.total > 0.0)
            .fold(None, |best: Option<&CategorySpending>, row| match best {
                Some(b) if b.total >= row.total => Some(b),
                _ => Some(row),
            })
    }

    pub fn over_limit(&self) -> Vec<&CategorySpending> {
        self.rows.iter().filter(|r| r.is_over_limit()).collect()
    }
}

fn round_percent(part: f64, whole: f64) -> i64 {
    (100.0 * part / whole).round() as i64
}

/// Sum expenses per category for the month. Transactions carrying a real
/// category keep it; everything else goes through the classifier. Rows
/// with unparseable dates fall outside every period.
pub fn aggregate(
    transactions: &[Transaction],
    period: Period,
    limits: &CategoryLimits,
) -> MonthlyAggregation {
    let mut totals = [0.0f64; Category::ALL.len()];

    for tx in transactions {
        if !tx.is_expense() {
            continue;
        }
        let in_period = tx.occurred_on().map(|d| period.contains(d)).unwrap_or(false);
        if !in_period {
            continue;
        }

        let category = tx
            .effective_category()
            .unwrap_or_else(|| classifier::classify(&tx.description));
        totals[category as usize] += tx.amount;
    }

    let total_expense: f64 = totals.iter().sum();

    let rows = Category::ALL
        .iter()
        .zip(totals.iter())
        .map(|(&category, &total)| {
            let limit = limits.get(category);
            CategorySpending {
                category,
                label: category.label(),
                icon: category.icon(),
                total,
                limit,
                percent_of_limit: round_percent(total, limit).min(100),
                percent_of_total: if total_expense > 0.0 {
                    round_percent(total, total_expense)
                } else {
                    0
                },
            }
        })
        .collect();

    MonthlyAggregation {
        period,
        rows,
        total_expense,
    }
}
