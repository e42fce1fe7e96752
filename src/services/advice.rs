//! Monthly spending advice derived from the aggregation.

use crate::services::aggregator::MonthlyAggregation;

/// One Thai sentence summarising the month. Over-limit categories take
/// precedence and the message names all of them, not just the single
/// category the alert engine would pick. With no overruns the advice
/// highlights the top spending category, and an empty month yields a
/// fixed placeholder.
pub fn advise(aggregation: &MonthlyAggregation) -> String {
    let over = aggregation.over_limit();
    if !over.is_empty() {
        let names: Vec<&str> = over.iter().map(|row| row.label).collect();
        return format!(
            "คุณใช้จ่ายฟุ่มเฟือยในหมวด {} กรุณาพิจารณาเพิ่มลิมิตของหมวดนี้ 💸",
            names.join(" / ")
        );
    }

    match aggregation.top_category() {
        Some(top) => format!(
            "เดือนนี้คุณใช้จ่ายในหมวด \"{}\" มากที่สุด ({} บาท)",
            top.label,
            format_amount(top.total)
        ),
        None => "ยังไม่มีข้อมูลเพียงพอในการให้คำแนะนำ".to_string(),
    }
}

/// Thousands-grouped amount. Whole numbers drop the fraction, everything
/// else keeps two decimals.
pub fn format_amount(amount: f64) -> String {
    let negative = amount < 0.0;
    let amount = amount.abs();

    let (int_part, frac_part) = if amount.fract() == 0.0 {
        (format!("{:.0}", amount), None)
    } else {
        let s = format!("{:.2}", amount);
        let (i, f) = s.split_once('.').unwrap_or((s.as_str(), "00"));
        (i.to_string(), Some(f.to_string()))
    };

    let mut grouped = String::new();
    let digits: Vec<char> = int_part.chars().collect();
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*c);
    }

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if let Some(f) = frac_part {
        out.push('.');
        out.push_str(&f);
    }
    out
}
