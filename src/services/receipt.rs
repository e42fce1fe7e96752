//! Turns raw OCR text from a shop receipt into importable line items.

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::Serialize;

use crate::models::Category;
use crate::services::classifier;

/// Lines containing any of these (lowercased) are totals, payment noise
/// or tax lines, never purchasable items.
const IGNORE_KEYWORDS: &[&str] = &[
    "รวม",
    "ยอดรวม",
    "ยอดสุทธิ",
    "เงินสด",
    "เงินทอน",
    "ชำระ",
    "ภาษี",
    "ส่วนลด",
    "สมาชิก",
    "ใบเสร็จ",
    "ขอบคุณ",
    "total",
    "subtotal",
    "cash",
    "change",
    "vat",
    "tax",
    "credit",
    "debit",
    "payment",
    "discount",
];

/// Store names recognised in header lines. Matched against the raw line
/// because brand casing matters for the stored name.
const STORE_KEYWORDS: &[&str] = &[
    "7-eleven",
    "เซเว่น",
    "lotus",
    "โลตัส",
    "big c",
    "บิ๊กซี",
    "makro",
    "แม็คโคร",
    "tops",
    "familymart",
    "แฟมิลี่มาร์ท",
    "cj",
    "ptt",
    "ร้าน",
    "supermarket",
    "มินิมาร์ท",
];

fn date_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d{1,2})[/\-.](\d{1,2})[/\-.](\d{2,4})").unwrap())
}

fn item_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(.+?)\s+(\d+(?:\.\d{1,2})?)\s*(?:บาท)?$").unwrap())
}

#[derive(Debug, Clone, Serialize)]
pub struct ReceiptItem {
    pub description: String,
    pub amount: f64,
    /// Classifier suggestion; the import endpoint persists it as-is.
    pub category: Category,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReceiptDraft {
    pub store: Option<String>,
    pub date: Option<NaiveDate>,
    pub items: Vec<ReceiptItem>,
}

/// Parse day/month/year with Thai receipt conventions: two-digit years
/// are Buddhist-era shorthand, and full Buddhist years are shifted back
/// to the common era.
fn parse_receipt_date(day: u32, month: u32, year: i32) -> Option<NaiveDate> {
    let year = if year < 100 { year + 2500 } else { year };
    let year = if year > 2200 { year - 543 } else { year };
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Scan OCR text line by line. Noise lines are dropped first, then store
/// and date lines are captured (first hit each wins), and whatever is
/// left that ends in a price becomes a line item.
pub fn parse_receipt(text: &str) -> ReceiptDraft {
    let mut draft = ReceiptDraft {
        store: None,
        date: None,
        items: Vec::new(),
    };

    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let lowered = line.to_lowercase();

        if IGNORE_KEYWORDS.iter().any(|kw| lowered.contains(kw)) {
            continue;
        }

        if draft.store.is_none() && STORE_KEYWORDS.iter().any(|kw| lowered.contains(kw)) {
            draft.store = Some(line.to_string());
            continue;
        }

        if draft.date.is_none() {
            if let Some(caps) = date_re().captures(line) {
                let day = caps[1].parse().unwrap_or(0);
                let month = caps[2].parse().unwrap_or(0);
                let year = caps[3].parse().unwrap_or(0);
                if let Some(date) = parse_receipt_date(day, month, year) {
                    draft.date = Some(date);
                    continue;
                }
            }
        }

        if let Some(caps) = item_re().captures(line) {
            let description = caps[1].trim().to_string();
            if let Ok(amount) = caps[2].parse::<f64>() {
                if amount > 0.0 {
                    let category = classifier::classify(&description);
                    draft.items.push(ReceiptItem {
                        description,
                        amount,
                        category,
                    });
                }
            }
        }
    }

    draft
}
