#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("unsupported file type: {0}")]
    UnsupportedFileType(String),
    #[error("failure reading configuration {msg}: {source}")]
    ConfigReadError {
        msg: String,
        source: config::ConfigError,
    },
    #[error("configuration has no [{0}] section")]
    MissingSection(String),
    #[error("invalid configuration: {0}")]
    InvalidValue(String),
}
