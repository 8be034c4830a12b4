//! vocalize main entry point
//!
//! Speaks its arguments through the platform TTS engine and waits for
//! the engine to finish so the audio is not cut off at exit.

use anyhow::Context;
use log::{error, info};
use std::process;
use std::time::Duration;
use vocalize::config::Config;
use vocalize::speech::backends::TtsHost;
use vocalize::speech::{SpeechDispatcher, SpeechHost};

/// How often to check whether the engine is still speaking
const SPEAKING_POLL: Duration = Duration::from_millis(50);

fn main() {
    // Parse command line arguments
    let args: Vec<String> = std::env::args().skip(1).collect();
    let debug_mode = args.iter().any(|arg| arg == "--debug" || arg == "-d");

    // Initialize logger
    if debug_mode {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .init();
        info!("vocalize version {} starting (debug mode)", vocalize::VERSION);
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
            .init();
    }

    let words: Vec<String> = args
        .into_iter()
        .filter(|arg| arg != "--debug" && arg != "-d")
        .collect();
    if words.is_empty() {
        eprintln!("Usage: {} [--debug] WORDS...", vocalize::APP_NAME);
        eprintln!("Example: {} Sir Thud", vocalize::APP_NAME);
        process::exit(2);
    }

    if let Err(e) = run(&words.join(" ")) {
        error!("Fatal error: {:#}", e);
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(text: &str) -> anyhow::Result<()> {
    let config = Config::load().context("Failed to load configuration")?;
    info!("Configuration loaded from {:?}", config.path());

    // Without an engine the host is inert and speaking is a no-op
    let host = TtsHost::new();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("Failed to start async runtime")?;

    runtime.block_on(async {
        let dispatcher = SpeechDispatcher::with_options(host, config.dispatch_options());
        dispatcher.speak(text).await;

        // Give the engine a moment to start before polling
        tokio::time::sleep(SPEAKING_POLL).await;
        while dispatcher.host().is_speaking() {
            tokio::time::sleep(SPEAKING_POLL).await;
        }
    });

    Ok(())
}
