use anyhow::{Context, Result};
use chrono::NaiveDateTime;

/// Fixed human-readable format the archive uses for message timestamps,
/// e.g. `Thursday, 14 June 2018 at 21:03 UTC`. The trailing timezone-name
/// token is recognized and discarded: the export never applies it, so the
/// parsed value is naive.
const ARCHIVE_TIMESTAMP_FORMAT: &str = "%A, %d %B %Y at %H:%M";

/// Parse a timestamp in the archive's date format.
///
/// The weekday must be consistent with the date; a mismatch means the
/// document is not what this tool expects and is reported as an error.
pub fn parse_archive_timestamp(raw: &str) -> Result<NaiveDateTime> {
    let trimmed = raw.trim();
    // Split off the timezone-name token; whatever it says, it is ignored.
    let datetime_part = match trimmed.rsplit_once(' ') {
        Some((head, _zone)) => head,
        None => trimmed,
    };
    NaiveDateTime::parse_from_str(datetime_part, ARCHIVE_TIMESTAMP_FORMAT)
        .with_context(|| format!("unrecognized archive timestamp: {raw:?}"))
}
