//! Pokédex - an interactive PokeAPI explorer
//!
//! Reads commands from stdin and prints results to stdout. Logs go to stderr.

use std::io::{self, Write};
use std::sync::Arc;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::commands::Endpoints;
use pokedex::{Config, FetchClient, Flow, Session, TimedCache};

const PROMPT: &str = "Pokedex > ";

/// Main entry point for the Pokédex shell.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the response cache (which starts its reaper) unless disabled
/// 4. Build the fetch client and the session
/// 5. Run the read-eval loop until `exit` or end of input
/// 6. Stop the reaper
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "warn" so the shell stays quiet; override with RUST_LOG
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: cache_enabled={}, cache_interval={}ms, base_url={}",
        config.cache_enabled, config.cache_interval_ms, config.base_url
    );

    let cache = config
        .cache_enabled
        .then(|| Arc::new(TimedCache::new(config.cache_interval())));
    let client = FetchClient::new(cache.clone(), &config).context("failed to build HTTP client")?;
    let mut session = Session::new(client, Endpoints::new(config.base_url.as_str()));

    run_shell(&mut session).await?;

    if let Some(cache) = cache {
        let stats = cache.stats();
        debug!(
            "Cache stats: hits={}, misses={}, reaped={}, entries={}",
            stats.hits, stats.misses, stats.reaped, stats.total_entries
        );
        cache.shutdown();
    }

    Ok(())
}

/// Prompts, reads a line, runs it. Command errors are printed and the loop goes on.
async fn run_shell(session: &mut Session) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = io::stdout();

    loop {
        write!(stdout, "{}", PROMPT)?;
        stdout.flush()?;

        let Some(line) = lines.next_line().await.context("failed to read input")? else {
            // End of input behaves like `exit`
            writeln!(stdout)?;
            break;
        };

        match session.execute(&line, &mut stdout).await {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => break,
            Err(err) => writeln!(stdout, "{}", err)?,
        }
    }

    Ok(())
}
