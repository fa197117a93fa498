use std::time::Instant;

use clap::Parser;

use showcase::carousel::{Carousel, Tuning};
use showcase::cli::{self, Args};
use showcase::config::Config;
use showcase::deck::Deck;
use showcase::event_loop;
use showcase::terminal::{StatusBar, Tui};

#[tokio::main]
async fn main() {
    env_logger::init();

    let args = Args::parse();

    let config = match Config::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    match args.command {
        Some(cli::Command::Slides) => match load_deck(&args, &config) {
            Ok(deck) => cli::list_slides(&deck),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        Some(cli::Command::Config { action }) => {
            if let Err(e) = cli::handle_config_action(action, args.config.as_deref()) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        None => {
            if let Err(e) = run(&args, &config).await {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }
}

/// Load the deck named on the command line, in the config, or fall back
/// to the built-in sample.
fn load_deck(args: &Args, config: &Config) -> Result<Deck, showcase::deck::DeckError> {
    let path = args.deck.as_deref().or(config.deck.path.as_deref());
    match path {
        Some(path) => Deck::load(path),
        None => Ok(Deck::sample()),
    }
}

async fn run(args: &Args, config: &Config) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let deck = load_deck(args, config)?;

    let tuning = Tuning {
        transition: config.transition_duration(),
        autoplay_interval: args
            .interval_ms
            .map(std::time::Duration::from_millis)
            .unwrap_or_else(|| config.autoplay_interval()),
        autoplay_enabled: config.autoplay.enabled && !args.no_autoplay,
    };

    let carousel = Carousel::new(deck, tuning, Instant::now());
    if carousel.is_none() {
        log::warn!("deck has no slides; carousel disabled");
    }

    let status_bar = StatusBar::with_visibility(config.ui.status_bar && !args.no_status);
    let mouse = config.ui.mouse && !args.no_mouse;

    let mut tui = Tui::new(mouse)?;
    let result = event_loop::run(
        &mut tui,
        carousel,
        status_bar,
        config.gesture.min_swipe_distance,
    )
    .await;
    tui.restore()?;

    result
}
