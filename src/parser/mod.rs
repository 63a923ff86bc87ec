//! VoiceCal parser module
//!
//! Implements the voice-to-event resolution pipeline: four extractors run
//! independently over the same raw utterance and their results are merged
//! into a [`ParsedEventData`]. No extractor sees another's output, which
//! keeps each one a pure function that tests can exercise in isolation.

pub mod classifier;
pub mod date_resolver;
pub mod patterns;
pub mod time_extractor;
pub mod title;

use chrono::{Local, NaiveDate};
use log::debug;

/// Aggregate result of resolving one utterance. Transient: it only lives
/// between resolution and assembly into an [`crate::event::Event`].
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedEventData {
    pub title: String,
    pub date: NaiveDate,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub category_id: Option<String>,
    pub description: Option<String>,
}

/// Resolve an utterance against an explicit reference date.
///
/// The reference stands in for "now" so resolution is a deterministic
/// function of its inputs.
pub fn parse_voice_input(input: &str, reference: NaiveDate) -> ParsedEventData {
    debug!("Parsing voice input: '{}'", input);

    let date = date_resolver::resolve_date(input, reference);
    let mut times = time_extractor::extract_times(input);
    let end_time = if times.len() > 1 { times.pop() } else { None };
    let start_time = times.pop();
    let category_id = classifier::classify(input).map(String::from);
    let title = title::normalize_title(input);

    // Keep the raw transcript around whenever normalization changed it.
    let description =
        if title != input { Some(format!("原始輸入：{}", input)) } else { None };

    ParsedEventData { title, date, start_time, end_time, category_id, description }
}

/// Resolve an utterance against the host's local calendar date.
pub fn parse_voice_input_today(input: &str) -> ParsedEventData {
    parse_voice_input(input, Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // 2025-06-15 is a Sunday.
    fn reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    #[test]
    fn test_end_to_end_meeting() {
        let parsed = parse_voice_input("明天下午2點開會", reference());
        assert_eq!(parsed.date, NaiveDate::from_ymd_opt(2025, 6, 16).unwrap());
        assert_eq!(parsed.start_time.as_deref(), Some("14:00"));
        assert_eq!(parsed.end_time, None);
        assert_eq!(parsed.category_id.as_deref(), Some("work"));
        assert_eq!(parsed.title, "開會");
        assert_eq!(parsed.description.as_deref(), Some("原始輸入：明天下午2點開會"));
    }

    #[test]
    fn test_time_range_maps_to_start_and_end() {
        let parsed = parse_voice_input("14:30 到 16:00 開會", reference());
        assert_eq!(parsed.start_time.as_deref(), Some("14:30"));
        assert_eq!(parsed.end_time.as_deref(), Some("16:00"));
    }

    #[test]
    fn test_unparseable_input_uses_fallbacks() {
        let parsed = parse_voice_input("呃那個", reference());
        assert_eq!(parsed.date, reference());
        assert_eq!(parsed.start_time, None);
        assert_eq!(parsed.end_time, None);
        assert_eq!(parsed.category_id, None);
        assert_eq!(parsed.title, "呃那個");
        assert_eq!(parsed.description, None);
    }

    #[test]
    fn test_description_only_when_title_differs() {
        let untouched = parse_voice_input("跟客戶吃飯", reference());
        assert_eq!(untouched.description, None);

        let altered = parse_voice_input("明天下午2點", reference());
        assert_eq!(altered.title, title::PLACEHOLDER_TITLE);
        assert_eq!(altered.description.as_deref(), Some("原始輸入：明天下午2點"));
    }
}
