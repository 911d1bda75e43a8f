//! Exports an action-plan step as a monthly iCalendar reminder.

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

const PRODUCT_ID: &str = "-//FinanceWise//Budget Planner//EN";
const CRLF: &str = "\r\n";
/// Longest content line allowed before folding, in octets.
const MAX_LINE_OCTETS: usize = 75;

pub struct ReminderService;

impl ReminderService {
    /// Renders a VCALENDAR containing one all-day event that repeats monthly from `start`.
    pub fn to_icalendar(action: &str, start: NaiveDate, now: DateTime<Utc>) -> String {
        let summary = strip_step_number(action);
        let end = start.succ_opt().unwrap_or(start);
        let lines = [
            "BEGIN:VCALENDAR".to_string(),
            "VERSION:2.0".to_string(),
            format!("PRODID:{PRODUCT_ID}"),
            "CALSCALE:GREGORIAN".to_string(),
            "BEGIN:VEVENT".to_string(),
            format!("UID:{}@financewise", Uuid::new_v4()),
            format!("DTSTAMP:{}", now.format("%Y%m%dT%H%M%SZ")),
            format!("DTSTART;VALUE=DATE:{}", start.format("%Y%m%d")),
            format!("DTEND;VALUE=DATE:{}", end.format("%Y%m%d")),
            "RRULE:FREQ=MONTHLY".to_string(),
            format!("SUMMARY:{}", escape_text(summary)),
            format!(
                "DESCRIPTION:{}",
                escape_text(&format!("FinanceWise action plan: {}", action.trim()))
            ),
            "END:VEVENT".to_string(),
            "END:VCALENDAR".to_string(),
        ];
        let folded: Vec<String> = lines.iter().map(|line| fold_line(line)).collect();
        let mut out = folded.join(CRLF);
        out.push_str(CRLF);
        out
    }
}

/// Drops a leading `"2. "` style step prefix.
fn strip_step_number(action: &str) -> &str {
    let trimmed = action.trim();
    match trimmed.split_once(". ") {
        Some((prefix, rest)) if !prefix.is_empty() && prefix.chars().all(|c| c.is_ascii_digit()) => {
            rest.trim()
        }
        _ => trimmed,
    }
}

/// Escapes TEXT values per RFC 5545.
fn escape_text(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            ';' => escaped.push_str("\\;"),
            ',' => escaped.push_str("\\,"),
            '\n' => escaped.push_str("\\n"),
            '\r' => {}
            other => escaped.push(other),
        }
    }
    escaped
}

/// Splits a content line into 75-octet pieces joined by CRLF and a space.
fn fold_line(line: &str) -> String {
    let mut folded = String::with_capacity(line.len() + line.len() / MAX_LINE_OCTETS * 3);
    let mut width = 0;
    for ch in line.chars() {
        let len = ch.len_utf8();
        if width + len > MAX_LINE_OCTETS {
            folded.push_str(CRLF);
            folded.push(' ');
            width = 1;
        }
        folded.push(ch);
        width += len;
    }
    folded
}
