//! # Board Demo
//!
//! Terminal front end for the in-memory board: lists posts and their
//! comments and lets you add comments, one command per line on stdin.

use std::sync::Arc;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use board_core::ports::PostStore;
use board_infra::InMemoryPostStore;

mod config;
mod console;
mod feed;
mod form;
mod render;
mod telemetry;

use config::AppConfig;
use console::{Command, Console};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    telemetry::init_telemetry(&config.telemetry);

    tracing::info!(
        latency = ?config.store.latency,
        "Starting board demo"
    );

    let store: Arc<dyn PostStore> = Arc::new(InMemoryPostStore::new(config.store.clone()));
    let mut console = Console::new(store, config.load_timeout, config.author.clone());

    let mut stdout = tokio::io::stdout();
    stdout.write_all(console.start().await.as_bytes()).await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await.context("Failed to read stdin")? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let output = match line.parse::<Command>() {
            Ok(command) => match console.execute(command).await? {
                Some(output) => output,
                None => break,
            },
            Err(e) => format!("{e}\n"),
        };
        stdout.write_all(output.as_bytes()).await?;
    }

    tracing::info!("Board demo stopped");
    Ok(())
}
