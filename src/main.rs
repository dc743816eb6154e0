// src/main.rs
// womancart-hero: quiz answers in, shopping superhero out

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use womancart::avatar::factory::{build_photo_analyzer, build_requester};
use womancart::config::EnvConfig;
use womancart::http::create_shared_client;
use womancart::persona::{AnswerSet, resolve_persona, resolve_persona_described};
use womancart::web::{AppState, create_router};

#[derive(Parser)]
#[command(name = "womancart-hero")]
#[command(about = "Turns shopping quiz answers into a superhero card and avatar", version)]
struct Cli {
    /// Config file (default: ~/.womancart/config.toml)
    #[arg(long, global = true, env = "HERO_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP server (default)
    Serve {
        /// Bind host (overrides HERO_HOST)
        #[arg(long)]
        host: Option<String>,

        /// Bind port (overrides HERO_PORT)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Print the persona a set of answers resolves to
    Persona {
        #[arg(long)]
        cart_behavior: String,

        #[arg(long)]
        payment_style: String,

        #[arg(long)]
        shopping_speed: String,

        /// Compose traits from the answers when the combination is unknown
        #[arg(long)]
        describe: bool,
    },

    /// Validate configuration and print a report
    CheckConfig,
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Serve { host: None, port: None }) {
        Command::Serve { host, port } => serve(cli.config, host, port).await,
        Command::Persona {
            cart_behavior,
            payment_style,
            shopping_speed,
            describe,
        } => {
            let answers = AnswerSet::new(cart_behavior, payment_style, shopping_speed);
            let persona = if describe {
                resolve_persona_described(&answers)
            } else {
                resolve_persona(&answers).clone()
            };
            println!("{}", serde_json::to_string_pretty(&persona)?);
            Ok(())
        }
        Command::CheckConfig => {
            let config = EnvConfig::load(cli.config.as_deref())?;
            let validation = config.validate();
            println!("Provider: {}", config.generation.provider);
            println!("API keys: {}", config.api_keys.summary());
            println!("Failure policy: {}", config.generation.failure_policy);
            println!("{}", validation.report());
            if !validation.is_valid() {
                anyhow::bail!("configuration has {} error(s)", validation.errors.len());
            }
            Ok(())
        }
    }
}

async fn serve(config_path: Option<PathBuf>, host: Option<String>, port: Option<u16>) -> Result<()> {
    let mut config = EnvConfig::load(config_path.as_deref())?;
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    let validation = config.validate();
    for warning in &validation.warnings {
        warn!("{}", warning);
    }
    if !validation.is_valid() {
        anyhow::bail!("invalid configuration\n{}", validation.report());
    }

    let http = create_shared_client();
    let requester = build_requester(&config, http.clone())?;
    let shutdown = CancellationToken::new();
    let state = AppState::new(requester)
        .with_analyzer(build_photo_analyzer(&config, http))
        .with_describe_fallback(config.generation.describe_fallback)
        .with_shutdown(shutdown.clone());
    let app = create_router(state, config.server.max_body_bytes);

    let addr = config.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(
        addr = %addr,
        provider = %config.generation.provider,
        failure_policy = %config.generation.failure_policy,
        "Superhero generator listening"
    );

    tokio::spawn({
        let shutdown = shutdown.clone();
        async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => {
                    info!("Shutdown signal received");
                    shutdown.cancel();
                }
                Err(e) => warn!(error = %e, "Unable to listen for shutdown signal"),
            }
        }
    });

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown.cancelled_owned())
        .await?;

    info!("Server stopped");
    Ok(())
}
