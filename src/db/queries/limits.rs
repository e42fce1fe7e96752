use std::collections::HashMap;

use rusqlite::{params, Connection};
use tracing::debug;

use crate::models::{Category, CategoryLimits};

pub fn load_limits(conn: &Connection) -> rusqlite::Result<CategoryLimits> {
    let mut stmt = conn.prepare("SELECT category, amount FROM category_limits")?;
    let rows = stmt.query_map([], |row| {
        let category: String = row.get(0)?;
        let amount: f64 = row.get(1)?;
        Ok((category, amount))
    })?;

    let mut limits: HashMap<Category, f64> = HashMap::new();
    for row in rows.filter_map(|r| r.ok()) {
        if let Some(category) = Category::parse(&row.0) {
            limits.insert(category, row.1);
        }
    }

    Ok(CategoryLimits::new(limits))
}

pub fn save_limits(conn: &Connection, limits: &HashMap<Category, f64>) -> rusqlite::Result<()> {
    for (category, amount) in limits {
        conn.execute(
            "INSERT INTO category_limits (category, amount) VALUES (?, ?)
             ON CONFLICT(category) DO UPDATE SET amount = excluded.amount",
            params![category.as_str(), amount],
        )?;
    }
    debug!(count = limits.len(), "Saved category limits");
    Ok(())
}
