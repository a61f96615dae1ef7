//! Error types for landing-kit
//!
//! Only loading page configuration can fail. Rendering and validation never return
//! errors: unknown sections render empty and field failures become per-field messages.

use std::path::PathBuf;

use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    /// Config file could not be read
    #[snafu(display("Failed to read {}: {source}", path.display()))]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Malformed JSON, or JSON whose shape does not match the page model
    #[snafu(display("JSON config error: {source}"))]
    Json { source: serde_json::Error },

    /// Malformed TOML, or TOML whose shape does not match the page model
    #[snafu(display("TOML config error: {source}"))]
    TomlDe { source: toml::de::Error },

    #[snafu(display("Unsupported config format: {extension:?} (expected toml or json)"))]
    UnsupportedFormat { extension: String },
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Error::Json { source }
    }
}

impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        Error::TomlDe { source }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
