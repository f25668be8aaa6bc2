use crate::error::CheckError;
use crate::marker::extract_marker_date;
use chrono::{DateTime, Duration, NaiveTime, Utc};
use std::fs;
use std::path::Path;

/// Where a resolved timestamp came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Marker,
    Modified,
}

/// Determines when the document at `path` was last updated.
///
/// A marker date resolves to midnight UTC of that day. Without a usable marker
/// the file's modification time is used. The caller is expected to have
/// checked that `path` exists.
pub fn resolve_last_updated(path: &Path) -> Result<(DateTime<Utc>, Source), CheckError> {
    // read_to_string closes the handle before returning
    let text = fs::read_to_string(path).map_err(|source| CheckError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    if let Some(date) = extract_marker_date(&text) {
        return Ok((date.and_time(NaiveTime::MIN).and_utc(), Source::Marker));
    }

    let modified = fs::metadata(path)
        .and_then(|m| m.modified())
        .map_err(|source| CheckError::Metadata {
            path: path.to_path_buf(),
            source,
        })?;
    Ok((DateTime::<Utc>::from(modified), Source::Modified))
}

/// Strictly older than `max_age_days`; exactly on the threshold is fresh.
#[must_use]
pub fn is_stale(now: DateTime<Utc>, last: DateTime<Utc>, max_age_days: i64) -> bool {
    now.signed_duration_since(last) > Duration::days(max_age_days)
}
