//! Title normalization.
//!
//! Deletes from the utterance the union of every span the date and time
//! pattern families match, then tidies what is left. The same static tables
//! drive extraction and deletion, so the two cannot drift apart.

use super::patterns::{
    LEADING_CONNECTIVES, RE_DATE_TOKENS, RE_HOUR_MINUTE, RE_HOUR_ONLY, RE_PERIOD_TIME,
};

/// Substituted when removal leaves fewer than two characters of title.
pub const PLACEHOLDER_TITLE: &str = "語音建立的事件";

/// Strip recognized date/time spans and leading connectives from an
/// utterance, falling back to [`PLACEHOLDER_TITLE`] for near-empty results.
pub fn normalize_title(utterance: &str) -> String {
    let mut spans: Vec<(usize, usize)> = Vec::new();
    for re in [&*RE_DATE_TOKENS, &*RE_PERIOD_TIME, &*RE_HOUR_MINUTE, &*RE_HOUR_ONLY] {
        spans.extend(re.find_iter(utterance).map(|m| (m.start(), m.end())));
    }

    let title = delete_spans(utterance, &mut spans);

    // Collapse whitespace runs, then drop one leading connective word.
    let title = title.split_whitespace().collect::<Vec<_>>().join(" ");
    let title = strip_leading_connective(&title);

    if title.chars().count() < 2 {
        PLACEHOLDER_TITLE.to_string()
    } else {
        title.to_string()
    }
}

/// Rebuild the string with every byte covered by a span removed. Spans may
/// overlap or nest; the union is what disappears.
fn delete_spans(text: &str, spans: &mut Vec<(usize, usize)>) -> String {
    spans.sort_unstable();
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    for &(start, end) in spans.iter() {
        if start > cursor {
            out.push_str(&text[cursor..start]);
        }
        cursor = cursor.max(end);
    }
    if cursor < text.len() {
        out.push_str(&text[cursor..]);
    }
    out
}

fn strip_leading_connective(title: &str) -> &str {
    let mut chars = title.chars();
    match chars.next() {
        Some(first) if LEADING_CONNECTIVES.contains(&first) => chars.as_str().trim_start(),
        _ => title,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_strips_date_and_time_spans() {
        assert_eq!(normalize_title("明天下午2點開會"), "開會");
        assert_eq!(normalize_title("後天14:30跟客戶吃飯"), "跟客戶吃飯");
    }

    #[test]
    fn test_period_phrase_removed_whole() {
        // 下午2點 must go as one span; a leftover 下午 would pollute the title.
        assert_eq!(normalize_title("下午2點簽約"), "簽約");
    }

    #[test]
    fn test_weekday_chars_removed() {
        assert_eq!(normalize_title("下週三部門聚餐"), "部門聚餐");
        assert_eq!(normalize_title("8月7日交報告"), "交報告");
    }

    #[test]
    fn test_leading_connective_stripped_once() {
        assert_eq!(normalize_title("明天要去開會"), "去開會");
        assert_eq!(normalize_title("今天去看牙"), "看牙");
    }

    #[test]
    fn test_whitespace_collapsed() {
        assert_eq!(normalize_title("明天  開會  記得帶筆電"), "開會 記得帶筆電");
    }

    #[test]
    fn test_fully_consumed_input_gets_placeholder() {
        assert_eq!(normalize_title("明天下午2點"), PLACEHOLDER_TITLE);
        assert_eq!(normalize_title("今天"), PLACEHOLDER_TITLE);
        assert_eq!(normalize_title(""), PLACEHOLDER_TITLE);
    }

    #[test]
    fn test_single_char_remainder_gets_placeholder() {
        assert_eq!(normalize_title("明天買"), PLACEHOLDER_TITLE);
    }

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(normalize_title("跟客戶吃飯"), "跟客戶吃飯");
    }
}
