//! Full monthly analysis: classify, aggregate, advise, alert.

use chrono::NaiveDate;
use rusqlite::Connection;
use serde::Serialize;
use tracing::warn;

use crate::config::Config;
use crate::date_utils::Period;
use crate::db::queries;
use crate::error::AppResult;
use crate::models::{Alert, Channel};
use crate::services::aggregator::{self, MonthlyAggregation};
use crate::services::{advice, alerts, classifier, email};

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisOutcome {
    pub aggregation: MonthlyAggregation,
    pub advice: String,
    /// The pending in-app alert, if one qualifies. Surfacing it does not
    /// mark it as seen; the acknowledge endpoint does that.
    pub alert: Option<Alert>,
}

/// Run the whole pipeline for one month.
///
/// Expenses without a meaningful category are classified from their
/// description and the result written back, so future runs see a stable
/// category even if the lexicon changes. The in-app alert is evaluated
/// but never auto-acknowledged. The email channel, when configured, is
/// delivered and acknowledged in the same run since there is no separate
/// user action that could confirm it.
pub fn run_analysis(
    conn: &Connection,
    config: &Config,
    period: Period,
    today: NaiveDate,
) -> AppResult<AnalysisOutcome> {
    let mut transactions = queries::transactions::list_transactions(conn, Some(period))?;
    let limits = queries::limits::load_limits(conn)?;

    for tx in &mut transactions {
        if !tx.is_expense() || tx.effective_category().is_some() {
            continue;
        }
        let category = classifier::classify(&tx.description);
        if let Err(e) = queries::transactions::set_category(conn, tx.id, category) {
            warn!(transaction_id = tx.id, "Failed to persist category: {}", e);
        }
        tx.category = Some(category);
    }

    let aggregation = aggregator::aggregate(&transactions, period, &limits);
    let advice = advice::advise(&aggregation);

    let in_app_state = queries::notifications::read_state(conn, Channel::InApp, today)?;
    let alert = alerts::evaluate(&aggregation, &in_app_state, today);

    if let Some(recipient) = &config.alert_email {
        let email_state = queries::notifications::read_state(conn, Channel::Email, today)?;
        if let Some(email_alert) = alerts::evaluate(&aggregation, &email_state, today) {
            match email::deliver_alert(recipient, &email_alert) {
                Ok(()) => {
                    let next = alerts::acknowledge(email_alert.category, &email_state, today);
                    if let Err(e) =
                        queries::notifications::write_state(conn, Channel::Email, &next)
                    {
                        warn!("Failed to record email alert: {}", e);
                    }
                }
                Err(e) => warn!("Failed to deliver alert email: {}", e),
            }
        }
    }

    Ok(AnalysisOutcome {
        aggregation,
        advice,
        alert,
    })
}
