//! CLI entrypoint for Sanctuary
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use chrono::Utc;
use clap::Parser;
use sanctuary_application::AggregateAnswerUseCase;
use sanctuary_infrastructure::{
    ConfigLoader, FileConfig, FileLoggingConfig, build_http_client, in_memory_repositories,
    seed_fixture,
};
use sanctuary_presentation::{AppState, Cli, Command, ConsoleFormatter, LookupSpinner};
use std::path::Path;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    // The server logs its lifecycle at info, so it starts one level louder
    let verbosity = match cli.command {
        Command::Serve { .. } => cli.verbose.max(1),
        _ => cli.verbose,
    };
    let _guard = init_logging(verbosity, &config.logging);

    let issues = config.validate();
    if !issues.is_empty() {
        let lines: Vec<String> = issues.iter().map(|issue| format!("  - {}", issue)).collect();
        bail!("Invalid configuration:\n{}", lines.join("\n"));
    }

    match cli.command {
        Command::Config => {
            show_config(&config, cli.config.as_deref())?;
            Ok(())
        }
        Command::Ask {
            question,
            fragments,
            json,
            quiet,
        } => {
            let use_case = build_aggregator(&config)?;

            let spinner = LookupSpinner::start("Consulting sources...", !quiet && !json);
            let answer = use_case.execute(&question).await;
            spinner.finish(answer.fragments.len(), answer.failure_count());

            let output = if json {
                ConsoleFormatter::format_json(&answer)
            } else if fragments {
                ConsoleFormatter::format_fragments(&answer)
            } else {
                ConsoleFormatter::format(&answer)
            };
            println!("{}", output);
            Ok(())
        }
        Command::Serve { bind, no_seed } => {
            info!("Starting Sanctuary {}", env!("CARGO_PKG_VERSION"));

            // === Dependency Injection ===
            let use_case = build_aggregator(&config)?;
            let repositories = in_memory_repositories();
            if config.storage.seed && !no_seed {
                seed_fixture(&repositories, Utc::now())
                    .await
                    .context("Failed to seed the record store")?;
            }

            let shutdown = CancellationToken::new();
            let signal = shutdown.clone();
            tokio::spawn(async move {
                match tokio::signal::ctrl_c().await {
                    Ok(()) => info!("Shutdown requested"),
                    Err(e) => warn!("Failed to listen for Ctrl-C: {}", e),
                }
                signal.cancel();
            });

            let bind = bind.unwrap_or_else(|| config.server.bind.clone());
            sanctuary_presentation::run(AppState::new(use_case, repositories), &bind, shutdown)
                .await
                .with_context(|| format!("Server on {} failed", bind))?;
            Ok(())
        }
    }
}

/// Install the tracing subscriber.
///
/// `RUST_LOG` wins over `-v`. The returned guard must stay alive for the
/// file writer to flush.
fn init_logging(verbose: u8, logging: &FileLoggingConfig) -> Option<WorkerGuard> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    match &logging.directory {
        Some(directory) => {
            let appender = tracing_appender::rolling::daily(directory, "sanctuary.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer)
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
            None
        }
    }
}

fn build_aggregator(config: &FileConfig) -> Result<AggregateAnswerUseCase> {
    let policy = config.apologetics.lookup_policy();
    let http = build_http_client(policy.timeout).context("Failed to build HTTP client")?;

    let generator = Arc::new(config.inference.build_client(http.clone()));
    let verses = Arc::new(config.bible_api.build_client(http));
    let classifier = config.apologetics.classifier()?;

    Ok(AggregateAnswerUseCase::new(generator, verses)
        .with_classifier(classifier)
        .with_policy(policy))
}

fn show_config(config: &FileConfig, explicit: Option<&Path>) -> Result<()> {
    for line in ConfigLoader::describe_sources(explicit) {
        println!("{}", line);
    }
    println!();
    println!("{}", toml::to_string_pretty(config)?);
    Ok(())
}
