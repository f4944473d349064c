use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};

use crate::models::event::Event;
use crate::utils::date::format_utc_basic;

/// Longest content line allowed before folding, in octets (RFC 5545 3.1)
const MAX_LINE_OCTETS: usize = 75;

pub(super) fn export_window(event: &Event) -> Result<(DateTime<Utc>, DateTime<Utc>)> {
    event.export_window().ok_or_else(|| {
        anyhow!(
            "Event '{}' has an invalid date ('{}') and cannot be exported",
            event.title,
            event.raw_date
        )
    })
}

pub(super) fn format_datetime(dt: &DateTime<Utc>) -> String {
    format_utc_basic(dt)
}

pub(super) fn escape_text(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace("\r\n", "\\n")
        .replace('\n', "\\n")
        .replace(',', "\\,")
        .replace(';', "\\;")
}

/// Fold a content line so no physical line exceeds 75 octets.
/// Continuation lines start with a single space.
pub(super) fn fold_line(line: &str) -> String {
    if line.len() <= MAX_LINE_OCTETS {
        return line.to_string();
    }

    let mut folded = String::with_capacity(line.len() + line.len() / MAX_LINE_OCTETS * 3);
    let mut current = 0;
    // Continuation lines lose one octet to the leading space
    let mut limit = MAX_LINE_OCTETS;

    for ch in line.chars() {
        if current + ch.len_utf8() > limit {
            folded.push_str("\r\n ");
            current = 0;
            limit = MAX_LINE_OCTETS - 1;
        }
        folded.push(ch);
        current += ch.len_utf8();
    }

    folded
}
