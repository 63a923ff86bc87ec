use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use crate::event::Event;

const STATE_DIR: &str = ".voicecal";
const EVENTS_FILE: &str = "events.json";
// Maximum allowed size for state files to prevent DoS attacks (10MB)
const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;
const MAX_ITEMS: usize = 10000;

// Trait for items that can be persisted
pub trait Persistent: Sized + Serialize + for<'de> Deserialize<'de> {
    fn filename() -> &'static str;
}

impl Persistent for Event {
    fn filename() -> &'static str {
        EVENTS_FILE
    }
}

pub struct StateManager {
    state_dir: PathBuf,
}

impl StateManager {
    pub fn new() -> Result<Self> {
        let home_dir = dirs::home_dir().ok_or_else(|| anyhow!("Could not find home directory"))?;
        let mut state_dir = home_dir;
        state_dir.push(STATE_DIR);
        std::fs::create_dir_all(&state_dir)?;
        Ok(Self { state_dir })
    }

    pub fn load<T: Persistent>(&self) -> Result<Vec<T>> {
        let path = self.state_dir.join(T::filename());
        if !path.exists() {
            return Ok(Vec::new());
        }

        // Check file size before loading
        let metadata = std::fs::metadata(&path)?;
        if metadata.len() > MAX_FILE_SIZE {
            return Err(anyhow!("File size exceeds security limits"));
        }

        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let json_value: serde_json::Value = serde_json::from_reader(reader)
            .map_err(|e| anyhow!("Failed to parse JSON data: {}", e))?;

        if let Some(array) = json_value.as_array() {
            if array.len() > MAX_ITEMS {
                return Err(anyhow!("Too many items in file (maximum {})", MAX_ITEMS));
            }
        }

        let items: Vec<T> = serde_json::from_value(json_value)
            .map_err(|e| anyhow!("Failed to deserialize data: {}", e))?;

        Ok(items)
    }

    pub fn save<T: Persistent>(&self, items: &[T]) -> Result<()> {
        let path = self.state_dir.join(T::filename());
        let file = OpenOptions::new().write(true).create(true).truncate(true).open(path)?;

        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, items)?;
        Ok(())
    }

    pub fn add<T: Persistent>(&self, item: T) -> Result<()> {
        let mut items = self.load::<T>()?;
        items.push(item);
        self.save(&items)
    }

    /// Remove a stored event by id. Returns whether anything was removed.
    pub fn remove_event(&self, id: &str) -> Result<bool> {
        let mut events: Vec<Event> = self.load()?;
        let before = events.len();
        events.retain(|e| e.id != id);
        if events.len() == before {
            return Ok(false);
        }
        self.save(&events)?;
        Ok(true)
    }
}

#[allow(dead_code)]
pub fn load_events() -> Result<Vec<Event>> {
    StateManager::new()?.load()
}
