//! Email channel for budget alerts.

use tracing::info;

use crate::error::AppResult;
use crate::models::Alert;
use crate::services::advice::format_amount;

pub fn alert_subject(alert: &Alert) -> String {
    format!("⚠️ แจ้งเตือนงบประมาณ: {}", alert.category.label())
}

pub fn alert_body(alert: &Alert) -> String {
    if alert.is_over {
        format!(
            "คุณใช้จ่ายในหมวด {} ไปแล้ว {} บาท เกินลิมิต {} บาท ({}%)",
            alert.category.label(),
            format_amount(alert.amount),
            format_amount(alert.limit),
            alert.percent
        )
    } else {
        format!(
            "คุณใช้จ่ายในหมวด {} ไปแล้ว {} บาท ใกล้ถึงลิมิต {} บาท ({}%)",
            alert.category.label(),
            format_amount(alert.amount),
            format_amount(alert.limit),
            alert.percent
        )
    }
}

/// Hand an alert to the email channel. No provider is wired up; the
/// rendered message is logged so the delivery point stays observable.
pub fn deliver_alert(recipient: &str, alert: &Alert) -> AppResult<()> {
    info!(
        recipient,
        subject = %alert_subject(alert),
        body = %alert_body(alert),
        "budget alert email"
    );
    Ok(())
}
