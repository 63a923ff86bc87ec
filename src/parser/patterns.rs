//! Shared lexical pattern tables for the voice pipeline.
//!
//! Every extractor and the title normalizer read the same tables, so the
//! spans the normalizer deletes are always the spans the extractors consume.
//! The rule set is closed and known at build time; adding a marker here is
//! the single place to do it.

use once_cell::sync::Lazy;
use regex::Regex;

/// Relative day words and their offset from the reference date.
pub const RELATIVE_DAY_WORDS: [(&str, i64); 5] =
    [("今天", 0), ("今日", 0), ("明天", 1), ("明日", 1), ("後天", 2)];

/// Weekday characters recognized after 下週/下星期 or standing alone.
/// 日 and 天 both mean Sunday.
pub const WEEKDAY_CHARS: [char; 8] = ['一', '二', '三', '四', '五', '六', '日', '天'];

/// Leading connectives stripped once from a normalized title.
pub const LEADING_CONNECTIVES: [char; 6] = ['要', '去', '有', '的', '是', '在'];

/// "Next week" qualifier followed by a weekday character.
pub static RE_NEXT_WEEK_WEEKDAY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(下週|下星期)([一二三四五六日天])").unwrap());

/// Explicit month/day, e.g. "8月7日" or "12月24號".
pub static RE_MONTH_DAY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{1,2})月(\d{1,2})[日號]").unwrap());

/// Explicit hour and minute joined by a colon-like token, e.g. "14:30", "14點30".
pub static RE_HOUR_MINUTE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{1,2})[：:點](\d{2})").unwrap());

/// Bare hour mention, e.g. "14點", "2:".
pub static RE_HOUR_ONLY: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d{1,2})[：:點]").unwrap());

/// Period-qualified time, e.g. "下午2點", "晚上8點30", "上午10:15".
/// The hour digit is required; a bare period word is not a time mention.
pub static RE_PERIOD_TIME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(上午|下午|早上|晚上|中午)(\d{1,2})[：:點]?(\d{2})?").unwrap());

/// Every date-referring token in one alternation, used for title cleanup.
/// Multi-character words come first so they win over the single weekday chars.
pub static RE_DATE_TOKENS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"今天|今日|明天|明日|後天|下週|下星期|\d{1,2}月\d{1,2}[日號]|[一二三四五六日天]")
        .unwrap()
});

/// Weekday index of a weekday character, Sunday = 0 through Saturday = 6.
pub fn weekday_index(ch: char) -> Option<u32> {
    match ch {
        '日' | '天' => Some(0),
        '一' => Some(1),
        '二' => Some(2),
        '三' => Some(3),
        '四' => Some(4),
        '五' => Some(5),
        '六' => Some(6),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_index_covers_all_chars() {
        for ch in WEEKDAY_CHARS {
            assert!(weekday_index(ch).is_some(), "no index for {}", ch);
        }
        assert_eq!(weekday_index('日'), Some(0));
        assert_eq!(weekday_index('天'), Some(0));
        assert_eq!(weekday_index('六'), Some(6));
        assert_eq!(weekday_index('月'), None);
    }

    #[test]
    fn test_date_tokens_prefer_whole_words() {
        // 明天 must be consumed as one token, not leave 明 behind after
        // the weekday alternative eats 天.
        let m = RE_DATE_TOKENS.find("明天出發").unwrap();
        assert_eq!(m.as_str(), "明天");
    }

    #[test]
    fn test_period_time_requires_an_hour() {
        assert!(RE_PERIOD_TIME.find("中午").is_none());
        assert!(RE_PERIOD_TIME.find("中午12點").is_some());
    }
}
