//! Clock-time extraction for voice utterances.
//!
//! Scans three pattern classes over the raw text (explicit hour:minute,
//! bare hour mentions, and period-qualified times 上午/下午/早上/晚上/中午),
//! concatenates their matches in that order, deduplicates preserving
//! first-seen order, and keeps at most two results. The caller assigns the
//! first survivor to the event start and the second to the end.
//!
//! Voice transcripts are noisy, so a candidate with an out-of-range hour or
//! minute is dropped silently rather than reported.

use log::debug;

use super::patterns::{RE_HOUR_MINUTE, RE_HOUR_ONLY, RE_PERIOD_TIME};

/// Extract up to two `HH:MM` times, in the order they were recognized.
pub fn extract_times(utterance: &str) -> Vec<String> {
    // Period-qualified matches own their digits: "下午2點" must never also
    // surface as a bare "02:00", so class 1 and 2 skip anything inside a
    // period span.
    let period_spans: Vec<(usize, usize)> = RE_PERIOD_TIME
        .find_iter(utterance)
        .map(|m| (m.start(), m.end()))
        .collect();
    let inside_period =
        |start: usize, end: usize| period_spans.iter().any(|&(s, e)| start >= s && end <= e);

    let mut times: Vec<String> = Vec::new();

    for caps in RE_HOUR_MINUTE.captures_iter(utterance) {
        let m = caps.get(0).unwrap();
        if inside_period(m.start(), m.end()) {
            continue;
        }
        let hour: u32 = caps[1].parse().unwrap_or(u32::MAX);
        let minute: u32 = caps[2].parse().unwrap_or(u32::MAX);
        push_valid(&mut times, hour, minute);
    }

    for caps in RE_HOUR_ONLY.captures_iter(utterance) {
        let m = caps.get(0).unwrap();
        if inside_period(m.start(), m.end()) {
            continue;
        }
        let hour: u32 = caps[1].parse().unwrap_or(u32::MAX);
        push_valid(&mut times, hour, 0);
    }

    for caps in RE_PERIOD_TIME.captures_iter(utterance) {
        let hour: u32 = caps[2].parse().unwrap_or(u32::MAX);
        let minute: u32 = caps.get(3).map_or(0, |m| m.as_str().parse().unwrap_or(u32::MAX));
        if hour > 23 {
            continue;
        }
        push_valid(&mut times, apply_period(&caps[1], hour), minute);
    }

    let mut seen = std::collections::HashSet::new();
    times.retain(|t| seen.insert(t.clone()));
    times.truncate(2);
    debug!("Extracted times from '{}': {:?}", utterance, times);
    times
}

/// Shift an hour into 24-hour form for its period qualifier.
fn apply_period(period: &str, hour: u32) -> u32 {
    match period {
        "下午" | "晚上" => {
            if hour != 12 {
                hour + 12
            } else {
                hour
            }
        }
        "上午" | "早上" => {
            if hour == 12 {
                0
            } else {
                hour
            }
        }
        "中午" => 12,
        _ => hour,
    }
}

fn push_valid(times: &mut Vec<String>, hour: u32, minute: u32) {
    if hour <= 23 && minute <= 59 {
        times.push(format!("{:02}:{:02}", hour, minute));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test]
    fn test_explicit_range_is_order_preserving() {
        assert_eq!(extract_times("14:30 到 16:00 開會"), vec!["14:30", "16:00"]);
    }

    #[test]
    fn test_fullwidth_colon_and_dian() {
        assert_eq!(extract_times("14：30出發"), vec!["14:30", "14:00"]);
        assert_eq!(extract_times("14點30出發"), vec!["14:30", "14:00"]);
    }

    #[test]
    fn test_bare_hour_defaults_minute() {
        assert_eq!(extract_times("9點站會"), vec!["09:00"]);
    }

    #[test_case("下午2點", "14:00" ; "afternoon")]
    #[test_case("晚上8點", "20:00" ; "evening")]
    #[test_case("上午9點", "09:00" ; "morning")]
    #[test_case("早上7點30", "07:30" ; "early morning with minutes")]
    #[test_case("中午12點", "12:00" ; "noon")]
    #[test_case("下午12點", "12:00" ; "twelve pm stays twelve")]
    #[test_case("上午12點", "00:00" ; "twelve am wraps to zero")]
    fn test_period_qualified(input: &str, expected: &str) {
        assert_eq!(extract_times(input), vec![expected]);
    }

    #[test]
    fn test_period_owns_its_digits() {
        // The bare-hour scan must not also surface 02:00 for 下午2點.
        assert_eq!(extract_times("明天下午2點開會"), vec!["14:00"]);
    }

    #[test]
    fn test_bare_noon_is_not_a_time() {
        // A period word needs an hour digit; 中午 alone is not a mention.
        assert_eq!(extract_times("中午吃飯"), Vec::<String>::new());
    }

    #[test]
    fn test_capped_at_two() {
        assert_eq!(extract_times("10:00 11:00 12:00"), vec!["10:00", "11:00"]);
    }

    #[test]
    fn test_duplicates_collapse() {
        assert_eq!(extract_times("14:00 之後還是 14:00"), vec!["14:00"]);
    }

    #[test]
    fn test_out_of_range_discarded_silently() {
        assert_eq!(extract_times("25:00 見"), Vec::<String>::new());
        assert_eq!(extract_times("23:75 見"), vec!["23:00"]);
    }

    #[test]
    fn test_no_time_mention() {
        assert_eq!(extract_times("跟客戶吃飯"), Vec::<String>::new());
    }
}
