//! Title search over a fetched record list.

use scraper::{Html, Selector};
use std::sync::LazyLock;

use super::record::MediaRecord;

static TEXTAREA: LazyLock<Selector> = LazyLock::new(|| Selector::parse("textarea").unwrap());

/// Decode HTML character references in a title.
///
/// The text is parsed as the body of a `<textarea>` (RCDATA), so entities are
/// decoded while markup stays literal text. `<` is escaped first so a literal
/// `</textarea>` in the title cannot close the element early.
pub fn decode_html_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }

    let body = text.replace('<', "&lt;");
    let fragment = Html::parse_fragment(&format!("<textarea>{}</textarea>", body));
    fragment
        .select(&TEXTAREA)
        .next()
        .map(|el| el.text().collect())
        .unwrap_or_else(|| text.to_string())
}

/// Whether a record's decoded title contains `needle` (already lowercased).
fn title_matches(record: &MediaRecord, needle: &str) -> bool {
    decode_html_entities(&record.title)
        .to_lowercase()
        .contains(needle)
}

/// Filter records by case-insensitive title substring.
///
/// An empty or whitespace-only query keeps every record. Order is preserved.
pub fn filter_records<'a>(records: &'a [MediaRecord], query: &str) -> Vec<&'a MediaRecord> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return records.iter().collect();
    }

    records
        .iter()
        .filter(|record| title_matches(record, &needle))
        .collect()
}

/// Find a record by identifier.
pub fn find_record<'a>(records: &'a [MediaRecord], id: &str) -> Option<&'a MediaRecord> {
    records.iter().find(|r| r.id == id)
}
