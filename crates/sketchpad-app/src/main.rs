//! Main application entry point.

use clap::Parser;
use sketchpad_app::{AppConfig, run};

fn main() {
    env_logger::init();
    log::info!("Starting Sketchpad");

    let config = AppConfig::parse();
    if let Err(e) = run(&config) {
        log::error!("{}", e);
        eprintln!("sketchpad: {}", e);
        std::process::exit(1);
    }
}
