//! Config command

use crate::app::App;
use anyhow::Result;
use chapiz_cli::output::{OutputFormat, Status};

/// Print the effective configuration
pub fn run(app: &App) -> Result<()> {
    if app.format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(app.schema())?);
        return Ok(());
    }

    match &app.config.path {
        Some(path) => Status::info(&format!("Loaded from {}", path.display())),
        None => Status::info("No configuration file found; using defaults"),
    }
    println!();
    print!("{}", toml::to_string_pretty(app.schema())?);
    Ok(())
}
