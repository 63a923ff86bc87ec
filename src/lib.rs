pub mod app;
pub mod category;
pub mod config;
pub mod event;
pub mod parser;
pub mod speech;
pub mod state;

use anyhow::Result;
use log::info;

pub fn run() -> Result<()> {
    let app = app::Application::new()?;
    info!("Initializing VoiceCal application");
    app.run()
}

// Re-export commonly used types
pub use category::{Category, CategoryRegistry};
pub use config::Config;
pub use event::Event;
pub use parser::ParsedEventData;
pub use speech::SpeechCaptureError;
