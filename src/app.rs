//! Interactive shell: every line that is not a command is treated as a
//! voice-recognized utterance and resolved into a stored event.

use anyhow::Result;
use log::{debug, error, info};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::category::CategoryRegistry;
use crate::config::Config;
use crate::event::{assemble_event, Event};
use crate::parser::parse_voice_input_today;
use crate::state::StateManager;

pub struct Application {
    registry: CategoryRegistry,
    state: StateManager,
}

impl Application {
    pub fn new() -> Result<Self> {
        let config = Config::load()?;
        Ok(Self { registry: config.registry()?, state: StateManager::new()? })
    }

    pub fn run(&self) -> Result<()> {
        info!("Starting VoiceCal shell");

        let mut rl = DefaultEditor::new()?;
        println!("Welcome to VoiceCal! Type an utterance, or 'help' for commands.");

        loop {
            match rl.readline("🎤 ") {
                Ok(line) => {
                    let _ = rl.add_history_entry(line.as_str());
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    match line {
                        "help" => print_help(),
                        "list" => {
                            if let Err(err) = self.list_events() {
                                error!("Failed to list events: {:?}", err);
                            }
                        }
                        "categories" => self.list_categories(),
                        "exit" => break,
                        utterance => {
                            if let Err(err) = self.create_event(utterance) {
                                error!("Failed to create event: {:?}", err);
                            }
                        }
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("CTRL-C");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    println!("CTRL-D");
                    break;
                }
                Err(err) => {
                    println!("Error: {:?}", err);
                    break;
                }
            }
        }
        Ok(())
    }

    fn create_event(&self, utterance: &str) -> Result<()> {
        let parsed = parse_voice_input_today(utterance);
        debug!("Parsed utterance into: {:?}", parsed);
        let event = assemble_event(parsed, &self.registry);
        self.state.add(event.clone())?;
        info!("Created event '{}' on {}", event.title, event.date);
        print_event(&event);
        Ok(())
    }

    fn list_events(&self) -> Result<()> {
        let events: Vec<Event> = self.state.load()?;
        if events.is_empty() {
            println!("No events stored.");
            return Ok(());
        }
        for event in &events {
            print_event(event);
        }
        Ok(())
    }

    fn list_categories(&self) {
        for category in self.registry.iter() {
            println!("  {} {} ({})", category.id, category.name, category.color);
        }
    }
}

fn print_event(event: &Event) {
    let time = match (&event.start_time, &event.end_time) {
        (Some(start), Some(end)) => format!("{}-{}", start, end),
        (Some(start), None) => start.clone(),
        _ => "all day".to_string(),
    };
    println!("{} | {} | {} | {}", event.date, time, event.category.name, event.title);
    if !event.description.is_empty() {
        println!("    {}", event.description);
    }
}

fn print_help() {
    println!("Available commands:");
    println!("  list       - Show stored events");
    println!("  categories - Show the category registry");
    println!("  help       - Show this help");
    println!("  exit       - Exit the application");
    println!("Any other input is parsed as a voice utterance, e.g. 明天下午2點開會");
}
