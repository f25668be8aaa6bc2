//! Locating the "last updated" marker inside a document.
//!
//! Extraction runs in two steps: find the first `<label>: <date>` pair in the
//! text, then normalize the date token to ISO form and hand it to chrono for
//! calendar validation. Adding a locale means adding a label and, if needed, a
//! [`DateStyle`] with its own normalization.

use chrono::NaiveDate;
use regex::{Captures, Regex};
use std::sync::LazyLock;

pub const LABELS: [&str; 5] = ["Created", "Last Updated", "最終更新日", "作成日", "更新日"];

/// Separator conventions a date token may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// `2024-01-01`
    Iso,
    /// `2024年01月01日`
    Kanji,
}

static MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    let labels = LABELS
        .iter()
        .map(|l| regex::escape(l))
        .collect::<Vec<_>>()
        .join("|");
    let pattern = format!(
        r"(?:{labels})\s*[:：]\s*(?:(?P<iso>[0-9]{{4}}-[0-9]{{2}}-[0-9]{{2}})|(?P<kanji>[0-9]{{4}}年[0-9]{{1,2}}月[0-9]{{1,2}}日))"
    );
    Regex::new(&pattern).expect("marker pattern must compile")
});

/// Returns the raw date token of the first labelled date in `text`.
#[must_use]
pub fn find_date_token(text: &str) -> Option<(&str, DateStyle)> {
    let caps: Captures<'_> = MARKER_RE.captures(text)?;
    if let Some(m) = caps.name("iso") {
        return Some((m.as_str(), DateStyle::Iso));
    }
    caps.name("kanji").map(|m| (m.as_str(), DateStyle::Kanji))
}

/// Rewrites a date token as `YYYY-MM-DD`. No calendar validation happens here.
#[must_use]
pub fn normalize(token: &str, style: DateStyle) -> Option<String> {
    match style {
        DateStyle::Iso => Some(token.to_string()),
        DateStyle::Kanji => {
            let (year, rest) = token.split_once('年')?;
            let (month, rest) = rest.split_once('月')?;
            let day = rest.strip_suffix('日')?;
            Some(format!("{year}-{month:0>2}-{day:0>2}"))
        }
    }
}

/// Extracts the marker date from document text.
///
/// Only the first labelled date counts. If its token is not a real calendar
/// date (`2024-13-40`), the document is treated as having no marker at all.
#[must_use]
pub fn extract_marker_date(text: &str) -> Option<NaiveDate> {
    let (token, style) = find_date_token(text)?;
    let iso = normalize(token, style)?;
    match NaiveDate::parse_from_str(&iso, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(e) => {
            log::debug!("Ignoring marker date '{token}': {e}");
            None
        }
    }
}
