use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::{debug, trace};

use crate::date_utils::Period;
use crate::models::{Category, NewTransaction, Transaction, TxType};

fn map_transaction(row: &Row<'_>) -> rusqlite::Result<Transaction> {
    let tx_type: String = row.get(1)?;
    let category: Option<String> = row.get(4)?;
    Ok(Transaction {
        id: row.get(0)?,
        // Unknown values can only come from manual edits; treat them as
        // expenses so they still show up somewhere.
        tx_type: TxType::parse(&tx_type).unwrap_or(TxType::Expense),
        description: row.get(2)?,
        amount: row.get(3)?,
        category: category.as_deref().and_then(Category::parse),
        date: row.get(5)?,
        note: row.get(6)?,
        created_at: row.get(7)?,
        updated_at: row.get(8)?,
    })
}

const SELECT_COLUMNS: &str = "id, tx_type, description, amount, category, date, note,
        created_at, updated_at";

pub fn list_transactions(
    conn: &Connection,
    period: Option<Period>,
) -> rusqlite::Result<Vec<Transaction>> {
    let mut sql = format!("SELECT {} FROM transactions", SELECT_COLUMNS);
    let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

    if let Some(period) = period {
        sql.push_str(" WHERE date LIKE ?");
        params_vec.push(Box::new(period.date_pattern()));
    }
    sql.push_str(" ORDER BY date DESC, id DESC");

    let params_refs: Vec<&dyn rusqlite::ToSql> = params_vec.iter().map(|p| p.as_ref()).collect();
    let mut stmt = conn.prepare(&sql)?;
    let transactions: Vec<Transaction> = stmt
        .query_map(params_refs.as_slice(), map_transaction)?
        .filter_map(|t| t.ok())
        .collect();

    debug!(count = transactions.len(), "Listed transactions");
    Ok(transactions)
}

pub fn get_transaction(conn: &Connection, id: i64) -> rusqlite::Result<Option<Transaction>> {
    trace!(transaction_id = id, "Fetching transaction");
    conn.query_row(
        &format!("SELECT {} FROM transactions WHERE id = ?", SELECT_COLUMNS),
        [id],
        map_transaction,
    )
    .optional()
}

pub fn create_transaction(conn: &Connection, new: &NewTransaction) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO transactions (tx_type, description, amount, category, date, note)
         VALUES (?, ?, ?, ?, ?, ?)",
        params![
            new.tx_type.as_str(),
            new.description,
            new.amount,
            new.category.map(|c| c.as_str()),
            new.date,
            new.note,
        ],
    )?;

    let id = conn.last_insert_rowid();
    debug!(transaction_id = id, amount = new.amount, "Created transaction");
    Ok(id)
}

pub fn update_transaction(
    conn: &Connection,
    id: i64,
    new: &NewTransaction,
) -> rusqlite::Result<bool> {
    let rows = conn.execute(
        "UPDATE transactions SET tx_type = ?, description = ?, amount = ?,
         category = ?, date = ?, note = ?, updated_at = datetime('now')
         WHERE id = ?",
        params![
            new.tx_type.as_str(),
            new.description,
            new.amount,
            new.category.map(|c| c.as_str()),
            new.date,
            new.note,
            id,
        ],
    )?;

    if rows > 0 {
        debug!(transaction_id = id, "Updated transaction");
    }
    Ok(rows > 0)
}

/// Category back-write after classification. Best-effort at the call site;
/// only rewrites rows still missing a meaningful category so a later pass
/// is a no-op.
pub fn set_category(conn: &Connection, id: i64, category: Category) -> rusqlite::Result<()> {
    conn.execute(
        "UPDATE transactions SET category = ?, updated_at = datetime('now')
         WHERE id = ? AND (category IS NULL OR category = 'other')",
        params![category.as_str(), id],
    )?;
    trace!(transaction_id = id, category = %category, "Persisted classified category");
    Ok(())
}

pub fn delete_transaction(conn: &Connection, id: i64) -> rusqlite::Result<bool> {
    let rows = conn.execute("DELETE FROM transactions WHERE id = ?", [id])?;
    if rows > 0 {
        debug!(transaction_id = id, "Deleted transaction");
    }
    Ok(rows > 0)
}

/// Income/expense totals, optionally restricted to one month.
pub fn sum_by_type(
    conn: &Connection,
    period: Option<Period>,
) -> rusqlite::Result<(f64, f64)> {
    let mut sql = String::from(
        "SELECT
            COALESCE(SUM(CASE WHEN tx_type = 'income' THEN amount ELSE 0 END), 0),
            COALESCE(SUM(CASE WHEN tx_type = 'expense' THEN amount ELSE 0 END), 0)
         FROM transactions",
    );
    let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

    if let Some(period) = period {
        sql.push_str(" WHERE date LIKE ?");
        params_vec.push(Box::new(period.date_pattern()));
    }

    let params_refs: Vec<&dyn rusqlite::ToSql> = params_vec.iter().map(|p| p.as_ref()).collect();
    conn.query_row(&sql, params_refs.as_slice(), |row| {
        Ok((row.get(0)?, row.get(1)?))
    })
}
