use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::date_utils;
use crate::models::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TxType {
    Income,
    Expense,
}

impl TxType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TxType::Income => "income",
            TxType::Expense => "expense",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "income" => Some(TxType::Income),
            "expense" => Some(TxType::Expense),
            _ => None,
        }
    }
}

impl std::fmt::Display for TxType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub tx_type: TxType,
    pub description: String,
    pub amount: f64,
    pub category: Option<Category>,
    /// "YYYY-MM-DD"
    pub date: String,
    pub note: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl Transaction {
    pub fn occurred_on(&self) -> Option<NaiveDate> {
        date_utils::parse_date(&self.date)
    }

    /// The persisted category when it carries information. "Other" is the
    /// fallback bucket, so it does not count as classified.
    pub fn effective_category(&self) -> Option<Category> {
        self.category.filter(|&c| c != Category::Other)
    }

    pub fn is_expense(&self) -> bool {
        self.tx_type == TxType::Expense
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewTransaction {
    pub tx_type: TxType,
    pub description: String,
    #[serde(default)]
    pub amount: f64,
    pub category: Option<Category>,
    pub date: String,
    pub note: Option<String>,
}

impl NewTransaction {
    pub fn validate(&self) -> Result<(), String> {
        if self.description.trim().is_empty() {
            return Err("Description must not be empty".into());
        }
        if self.amount < 0.0 || !self.amount.is_finite() {
            return Err("Amount must be a non-negative number".into());
        }
        if date_utils::parse_date(&self.date).is_none() {
            return Err(format!("Invalid date '{}', expected YYYY-MM-DD", self.date));
        }
        Ok(())
    }
}
