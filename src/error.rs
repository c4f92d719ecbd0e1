use thiserror::Error;

/// Errors raised while routing or generating a demo document
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DemoError {
    /// No configured service matches the requested path (should map to HTTP 404)
    #[error("demo service \"{fragment}\" not recognised or not enabled")]
    NotFound { fragment: String },

    /// The demo service itself was selected as the demo target (should map to HTTP 400)
    #[error("selected service does not provide a demo page")]
    UnsupportedDemo,

    /// The output buffer could not be reserved (should map to HTTP 500)
    #[error("failed to allocate demo document")]
    AllocationFailure,
}

/// Errors that can occur when loading or validating the gateway configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("Failed to read configuration file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid TOML or has the wrong shape
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// The same protocol type was configured more than once
    #[error("Service type {0} configured more than once")]
    DuplicateService(&'static str),

    /// Two services share a URL prefix
    #[error("Duplicate service prefix: {0}")]
    DuplicatePrefix(String),

    /// Prefix is malformed or reserved by the server
    #[error("Invalid service prefix \"{prefix}\": {reason}")]
    InvalidPrefix { prefix: String, reason: &'static str },

    /// No demo service is configured
    #[error("No demo service configured")]
    MissingDemoService,

    /// Two grids share a name
    #[error("Duplicate grid name: {0}")]
    DuplicateGrid(String),

    /// Two tile sets share a name
    #[error("Duplicate tileset name: {0}")]
    DuplicateTileSet(String),

    /// A tile set references a grid that is not configured
    #[error("Tileset {tileset} references unknown grid {grid}")]
    UnknownGrid { tileset: String, grid: String },

    /// A grid has no resolution levels
    #[error("Grid {0} has no resolutions")]
    EmptyResolutions(String),

    /// A grid resolution is not a finite positive number
    #[error("Grid {grid} has invalid resolution {value}")]
    InvalidResolution { grid: String, value: f64 },

    /// A grid extent has min >= max on some axis
    #[error("Grid {grid} has invalid extent: {message}")]
    InvalidExtent { grid: String, message: String },

    /// Metadata `url` entry is not an absolute URL
    #[error("Invalid metadata url \"{value}\": {source}")]
    InvalidUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
}
