//! Command-line configuration for tilegate.
//!
//! Server settings come from command-line arguments or environment variables
//! with the `TILEGATE_` prefix. Services, grids and tile sets live in a
//! separate TOML file (see [`crate::gateway`]) referenced by `--config`.
//!
//! # Environment Variables
//!
//! - `TILEGATE_CONFIG` - Path to the gateway configuration file (required)
//! - `TILEGATE_HOST` - Server bind address (default: 0.0.0.0)
//! - `TILEGATE_PORT` - Server port (default: 3000)
//! - `TILEGATE_SINGLE_TILE` - Add single-tile WMS demo layers (default: false)
//! - `TILEGATE_CACHE_MAX_AGE` - HTTP cache max-age seconds (default: 300)
//! - `TILEGATE_CORS_ORIGINS` - Allowed CORS origins, comma-separated

use std::path::PathBuf;

use clap::Parser;

use crate::demo::DemoOptions;

// =============================================================================
// Default Values
// =============================================================================

/// Default server host.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default server port.
pub const DEFAULT_PORT: u16 = 3000;

/// Default HTTP cache max-age for demo pages in seconds (5 minutes).
pub const DEFAULT_CACHE_MAX_AGE: u32 = 300;

// =============================================================================
// CLI Arguments
// =============================================================================

/// tilegate - demo pages for a tile-serving gateway.
///
/// Serves a landing page listing the configured services and an OpenLayers
/// WMS demo covering every configured tile set and grid.
#[derive(Parser, Debug, Clone)]
#[command(name = "tilegate")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Path to the gateway configuration file (TOML).
    #[arg(short, long, env = "TILEGATE_CONFIG")]
    pub config: PathBuf,

    // =========================================================================
    // Server Configuration
    // =========================================================================
    /// Host address to bind the server to.
    #[arg(long, default_value = DEFAULT_HOST, env = "TILEGATE_HOST")]
    pub host: String,

    /// Port to listen on.
    #[arg(short, long, default_value_t = DEFAULT_PORT, env = "TILEGATE_PORT")]
    pub port: u16,

    // =========================================================================
    // Demo Configuration
    // =========================================================================
    /// Also declare a single-tile variant of every WMS demo layer.
    #[arg(long, default_value_t = false, env = "TILEGATE_SINGLE_TILE")]
    pub single_tile: bool,

    /// HTTP Cache-Control max-age in seconds for demo pages.
    #[arg(long, default_value_t = DEFAULT_CACHE_MAX_AGE, env = "TILEGATE_CACHE_MAX_AGE")]
    pub cache_max_age: u32,

    // =========================================================================
    // CORS Configuration
    // =========================================================================
    /// Allowed CORS origins (comma-separated).
    ///
    /// If not specified, allows any origin.
    #[arg(long, env = "TILEGATE_CORS_ORIGINS", value_delimiter = ',')]
    pub cors_origins: Option<Vec<String>>,

    // =========================================================================
    // Logging Configuration
    // =========================================================================
    /// Enable verbose logging (debug level).
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Disable request tracing.
    #[arg(long, default_value_t = false)]
    pub no_tracing: bool,
}

impl Config {
    /// Validate the configuration and return an error message if invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.config.as_os_str().is_empty() {
            return Err(
                "Gateway configuration file is required. Set --config or TILEGATE_CONFIG"
                    .to_string(),
            );
        }

        if self.host.is_empty() {
            return Err("host must not be empty".to_string());
        }

        if let Some(origins) = &self.cors_origins {
            if let Some(bad) = origins.iter().find(|o| o.parse::<http::HeaderValue>().is_err()) {
                return Err(format!("Invalid CORS origin: {}", bad));
            }
        }

        Ok(())
    }

    /// Get the server bind address as "host:port".
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Demo generation options selected on the command line.
    pub fn demo_options(&self) -> DemoOptions {
        DemoOptions::default().with_single_tile(self.single_tile)
    }
}

// =============================================================================
// Tests
// =============================================================================
