//! Subcommand handlers for the slides listing and config actions.

use std::path::Path;

use crate::config::{self, Config, DEFAULT_CONFIG};
use crate::deck::Deck;

/// Print the slides of a deck to stdout.
pub fn list_slides(deck: &Deck) {
    if deck.is_empty() {
        println!("Deck '{}' has no slides.", deck.title);
        return;
    }

    println!("{} ({} slides):", deck.title, deck.len());
    for (i, slide) in deck.slides().iter().enumerate() {
        if slide.tags.is_empty() {
            println!("  {}. {}", i + 1, slide.title);
        } else {
            println!("  {}. {} [{}]", i + 1, slide.title, slide.tags.join(", "));
        }
        if !slide.summary.is_empty() {
            println!("     {}", slide.summary);
        }
    }
}

/// Handle config subcommand actions.
pub fn handle_config_action(
    action: crate::cli::ConfigAction,
    path: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    match action {
        crate::cli::ConfigAction::Show => {
            let config = Config::load(path)?;
            println!("Current configuration:");
            println!(
                "  Deck: {}",
                config
                    .deck
                    .path
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "(built-in sample)".to_string())
            );
            println!(
                "  Autoplay: {} ({} ms)",
                if config.autoplay.enabled { "on" } else { "off" },
                config.autoplay.interval_ms
            );
            println!("  Transition: {} ms", config.transition.duration_ms);
            println!(
                "  Min swipe distance: {}",
                config.gesture.min_swipe_distance
            );
            println!(
                "  Status bar: {}",
                if config.ui.status_bar { "yes" } else { "no" }
            );
            println!("  Mouse: {}", if config.ui.mouse { "yes" } else { "no" });
            println!();

            let config_path = path
                .map(|p| p.to_path_buf())
                .unwrap_or_else(config::default_path);
            if config_path.exists() {
                println!("Config file: {} (exists)", config_path.display());
            } else {
                println!("Config file: {} (not found)", config_path.display());
            }
        }
        crate::cli::ConfigAction::Init => {
            let config_path = path
                .map(|p| p.to_path_buf())
                .unwrap_or_else(config::default_path);
            if config_path.exists() {
                println!("Config file already exists: {}", config_path.display());
                return Ok(());
            }
            if let Some(parent) = config_path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&config_path, DEFAULT_CONFIG)?;
            println!("Created config file: {}", config_path.display());
        }
    }
    Ok(())
}
