use chrono::NaiveDate;
use rusqlite::{params, Connection};
use tracing::debug;

use crate::models::{Category, Channel, NotificationState};

/// The dedup set for one channel on one calendar day. Days other than the
/// requested one are simply absent, which is the implicit daily reset.
pub fn read_state(
    conn: &Connection,
    channel: Channel,
    date: NaiveDate,
) -> rusqlite::Result<NotificationState> {
    let mut stmt =
        conn.prepare("SELECT category FROM notification_log WHERE channel = ? AND date = ?")?;
    let rows = stmt.query_map(
        params![channel.as_str(), date.to_string()],
        |row| row.get::<_, String>(0),
    )?;

    let mut state = NotificationState::empty(date);
    for category in rows.filter_map(|r| r.ok()) {
        if let Some(category) = Category::parse(&category) {
            state.notified.insert(category);
        }
    }

    Ok(state)
}

/// Persist the dedup set. INSERT OR IGNORE keeps re-acknowledging the same
/// category on the same day a no-op.
pub fn write_state(
    conn: &Connection,
    channel: Channel,
    state: &NotificationState,
) -> rusqlite::Result<()> {
    for category in &state.notified {
        conn.execute(
            "INSERT OR IGNORE INTO notification_log (channel, date, category) VALUES (?, ?, ?)",
            params![channel.as_str(), state.date.to_string(), category.as_str()],
        )?;
    }
    debug!(
        channel = channel.as_str(),
        date = %state.date,
        count = state.notified.len(),
        "Recorded notification state"
    );
    Ok(())
}
