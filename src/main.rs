//! tilegate - demo pages for a tile-serving gateway.
//!
//! This binary loads the gateway configuration and starts the HTTP server.

use clap::Parser;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tilegate::demo::URL_METADATA_KEY;
use tilegate::{create_router, Config, GatewayConfig, RouterConfig};

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::parse();

    init_logging(config.verbose);

    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        return ExitCode::FAILURE;
    }

    let gateway = match GatewayConfig::load(&config.config) {
        Ok(gateway) => gateway,
        Err(e) => {
            error!("Failed to load {}: {}", config.config.display(), e);
            return ExitCode::FAILURE;
        }
    };

    info!("tilegate v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: {}", config.config.display());
    for service in gateway.services.iter() {
        info!("  Service {:<6} at /{}", service.kind.name(), service.url_prefix);
    }
    info!("  Tilesets: {}", gateway.tilesets.len());
    if let Some(url) = gateway.metadata.get(URL_METADATA_KEY) {
        info!("  Public URL: {}", url);
    }
    if config.single_tile {
        info!("  Single-tile demo layers: enabled");
    }

    let demo_prefix = gateway.demo_prefix().to_string();
    let router = create_router(gateway, build_router_config(&config));

    let addr = config.bind_address();

    info!("");
    info!("  Server listening on: http://{}", addr);
    info!("  Demo pages:          http://{}/{}", addr, demo_prefix);
    info!("");

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind to {}: {}", addr, e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = axum::serve(listener, router).await {
        error!("Server error: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Initialize the tracing/logging subsystem.
fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        "tilegate=debug,tower_http=debug"
    } else {
        "tilegate=info,tower_http=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| env_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Build RouterConfig from the command-line Config.
fn build_router_config(config: &Config) -> RouterConfig {
    let mut router_config = RouterConfig::new()
        .with_cache_max_age(config.cache_max_age)
        .with_demo_options(config.demo_options())
        .with_tracing(!config.no_tracing);

    if let Some(ref origins) = config.cors_origins {
        router_config = router_config.with_cors_origins(origins.clone());
    }

    router_config
}
