//! Lexical date resolution for voice utterances.
//!
//! Maps date-referring substrings to a concrete calendar date relative to an
//! injectable reference date, so callers (and tests) control what "today"
//! means. First matching rule wins; later rules never override an earlier
//! match even when several date phrases co-occur in the text.

use chrono::{Datelike, Duration, NaiveDate};
use log::debug;

use super::patterns::{
    weekday_index, RELATIVE_DAY_WORDS, RE_MONTH_DAY, RE_NEXT_WEEK_WEEKDAY,
};

/// Resolve the date an utterance refers to.
///
/// Precedence, in fixed order:
/// 1. 今天/今日: the reference date
/// 2. 明天/明日: reference + 1
/// 3. 後天: reference + 2
/// 4. 下週/下星期 + weekday: that weekday within the week starting 7 days out
/// 5. explicit 月/日: this year, rolled to next year if already past
/// 6. a bare weekday character: the upcoming occurrence, never today
/// 7. fallback: the reference date
pub fn resolve_date(utterance: &str, reference: NaiveDate) -> NaiveDate {
    for (word, offset) in RELATIVE_DAY_WORDS {
        if utterance.contains(word) {
            debug!("Date word '{}' -> reference {:+} days", word, offset);
            return reference + Duration::days(offset);
        }
    }

    if let Some(caps) = RE_NEXT_WEEK_WEEKDAY.captures(utterance) {
        let ch = caps[2].chars().next().unwrap();
        if let Some(target) = weekday_index(ch) {
            return next_week_weekday(reference, target);
        }
    }

    if let Some(caps) = RE_MONTH_DAY.captures(utterance) {
        let month: u32 = caps[1].parse().unwrap_or(0);
        let day: u32 = caps[2].parse().unwrap_or(0);
        // The month/day phrase owns its match even when impossible; its
        // 日/號 suffix must not be reread as a bare weekday below.
        return month_day_this_or_next_year(reference, month, day).unwrap_or_else(|| {
            debug!("Discarding impossible month/day {}月{}日", month, day);
            reference
        });
    }

    // A weekday character with no 週/星期 qualifier anywhere means the
    // upcoming occurrence of that weekday.
    if !utterance.contains("星期") && !utterance.contains("週") {
        if let Some(target) = utterance.chars().find_map(weekday_index) {
            return upcoming_weekday(reference, target);
        }
    }

    reference
}

/// The named weekday within the week anchored 7 days after the reference.
fn next_week_weekday(reference: NaiveDate, target: u32) -> NaiveDate {
    let anchor = reference + Duration::days(7);
    let current = anchor.weekday().num_days_from_sunday();
    let days_to_add = if target >= current {
        (target - current) as i64
    } else {
        (7 + target - current) as i64
    };
    anchor + Duration::days(days_to_add)
}

/// The upcoming occurrence of a bare weekday. A weekday matching the
/// reference's own weekday lands a full week out, never on the reference.
fn upcoming_weekday(reference: NaiveDate, target: u32) -> NaiveDate {
    let current = reference.weekday().num_days_from_sunday();
    let days_to_add = if target > current {
        (target - current) as i64
    } else {
        (7 - current + target) as i64
    };
    reference + Duration::days(days_to_add)
}

/// An explicit month/day in the reference year, rolled forward a year when
/// the date has already passed. Impossible dates yield `None`.
fn month_day_this_or_next_year(reference: NaiveDate, month: u32, day: u32) -> Option<NaiveDate> {
    let this_year = NaiveDate::from_ymd_opt(reference.year(), month, day)?;
    if this_year < reference {
        NaiveDate::from_ymd_opt(reference.year() + 1, month, day)
    } else {
        Some(this_year)
    }
}
