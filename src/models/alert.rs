use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::Category;

/// Independently dedup-tracked notification channels sharing one
/// threshold rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    InApp,
    Email,
}

impl Channel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::InApp => "in_app",
            Channel::Email => "email",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "in_app" => Some(Channel::InApp),
            "email" => Some(Channel::Email),
            _ => None,
        }
    }
}

/// A budget alert for a single category. At most one is surfaced per
/// evaluation even when several categories qualify.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub category: Category,
    pub amount: f64,
    pub limit: f64,
    /// Uncapped percent-of-limit, rounded.
    pub percent: i64,
    pub is_over: bool,
}

/// Which categories have already been alerted on a given calendar day.
/// The set implicitly resets when the date changes; day comparison is
/// calendar equality, not a rolling 24h window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationState {
    pub date: NaiveDate,
    pub notified: BTreeSet<Category>,
}

impl NotificationState {
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            notified: BTreeSet::new(),
        }
    }

    pub fn has_notified(&self, today: NaiveDate, category: Category) -> bool {
        self.date == today && self.notified.contains(&category)
    }
}
