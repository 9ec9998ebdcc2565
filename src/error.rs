use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Hayrack
#[derive(Error, Debug)]
pub enum HayrackError {
    #[error("Config error: {0}\n\nTroubleshooting:\n- List known sections: hayrack-config sections\n- Show the merged configuration: hayrack-config show\n- Run with RUST_LOG=debug for more details")]
    Config(String),

    #[error("Settings file error in {}: {message}\n\nTroubleshooting:\n- Check the file syntax (TOML: [section] headers followed by key = value lines)\n- Options must live inside a [section]\n- Option values must be plain scalars (no arrays or nested tables)", path.display())]
    Parse { path: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, HayrackError>;
