use std::time::Duration;

use serde_json::Value;

use crate::types::BookEntry;

const EXCLUDED_CHARS: [char; 7] = ['/', '.', ',', '[', ']', ':', ' '];
const NOT_AVAILABLE: &str = "N/A";
const MAX_BACKOFF: Duration = Duration::from_secs(120);

/// Cleans a raw field value from the library system for presentation.
///
/// Catalogue data carries ISBD punctuation such as a trailing ` /` or
/// surrounding brackets. One excluded character is dropped from the end,
/// then one from the start, then whitespace is trimmed. Missing, null and
/// non-string values, as well as values that end up empty, become `"N/A"`.
pub fn clean_string_data(data: Option<&Value>) -> String {
    let Some(Value::String(raw)) = data else {
        return NOT_AVAILABLE.to_string();
    };

    let mut cleaned = raw.as_str();
    if let Some(stripped) = cleaned.strip_suffix(EXCLUDED_CHARS) {
        cleaned = stripped;
    }
    if let Some(stripped) = cleaned.strip_prefix(EXCLUDED_CHARS) {
        cleaned = stripped;
    }

    match cleaned.trim() {
        "" => NOT_AVAILABLE.to_string(),
        value => value.to_string(),
    }
}

pub fn sort_records_by_title(records: &mut [BookEntry], descending: bool) {
    if descending {
        records.sort_by(|a, b| b.title.cmp(&a.title));
    } else {
        records.sort_by(|a, b| a.title.cmp(&b.title));
    }
}

/// Sorts records by their publication year.
///
/// Dates that are not plain integers compare lower than any parsed date.
/// Both directions are stable, so records with the same year keep their
/// listing order.
pub fn sort_records_by_publish_date(records: &mut [BookEntry], descending: bool) {
    if descending {
        records.sort_by_key(|record| std::cmp::Reverse(publish_year(record)));
    } else {
        records.sort_by_key(publish_year);
    }
}

fn publish_year(record: &BookEntry) -> Option<i64> {
    record.date_of_publication.trim().parse().ok()
}

/// Delay before retrying a request after `consecutive_failures` failed attempts.
///
/// The first retry happens immediately; later retries wait
/// `factor * 2^(failures - 1)`, capped at two minutes.
pub fn backoff_delay(factor: Duration, consecutive_failures: u32) -> Duration {
    if consecutive_failures <= 1 {
        return Duration::ZERO;
    }

    let multiplier = 1u32
        .checked_shl(consecutive_failures - 1)
        .unwrap_or(u32::MAX);
    factor.saturating_mul(multiplier).min(MAX_BACKOFF)
}
