//! The persisted event record and its assembly from parsed voice data.

use chrono::{NaiveDate, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::category::{Category, CategoryRegistry};
use crate::parser::ParsedEventData;

/// A calendar event as handed to the store. Never mutated by the pipeline
/// after creation.
///
/// `color` duplicates `category.color` so list renderers never chase the
/// category record; [`Event::reassign_category`] keeps the pair in sync.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub category: Category,
    pub color: String,
}

impl Event {
    /// Swap the event's category, updating the cached color with it.
    pub fn reassign_category(&mut self, category: Category) {
        self.color = category.color.clone();
        self.category = category;
    }
}

/// Merge parsed voice data into an [`Event`], minting a fresh id.
///
/// This is the only place the default-category policy lives: an absent or
/// unknown category id resolves to the registry's first declared category.
pub fn assemble_event(parsed: ParsedEventData, registry: &CategoryRegistry) -> Event {
    let category = parsed
        .category_id
        .as_deref()
        .and_then(|id| registry.get(id))
        .unwrap_or_else(|| registry.default_category())
        .clone();

    let event = Event {
        id: generate_event_id(),
        title: parsed.title,
        description: parsed.description.unwrap_or_default(),
        date: parsed.date,
        start_time: parsed.start_time,
        end_time: parsed.end_time,
        color: category.color.clone(),
        category,
    };
    debug!("Assembled event '{}' ({})", event.title, event.id);
    event
}

/// Mint an event id: millisecond wall clock in base36 plus a random suffix.
/// Unique within a process lifetime, which is all the single-process store
/// needs.
pub fn generate_event_id() -> String {
    let millis = Utc::now().timestamp_millis().max(0) as u64;
    format!("{}{}", to_base36(millis), uuid::Uuid::new_v4().simple())
}

fn to_base36(mut value: u64) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while value > 0 {
        out.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap()
}
