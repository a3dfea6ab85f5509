use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Config error: {0}")]
    ConfigError(#[from] toml::de::Error),
    #[error(transparent)]
    CatalogueError(#[from] busnet_core::Error),
    #[error("No routing settings in the document or the config file")]
    MissingRoutingSettings,
}
