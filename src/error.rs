use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Could not write config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("Invalid legacy config: {0}")]
    LegacyConfig(#[from] serde_json::Error),

    #[error("No config dir")]
    NoConfigDir,

    #[error("Selection required: please select at least one recipient")]
    EmptySelection,

    #[error("Unknown message: {0}")]
    UnknownMessage(String),

    #[error("Contact already in network: {0}")]
    DuplicateContact(String),
}
