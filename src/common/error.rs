use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoggerError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] toml::de::Error),

    #[error("A global logger is already installed: {0}")]
    AlreadyInstalled(#[from] tracing_subscriber::util::TryInitError),
}

pub type LoggerResult<T> = Result<T, LoggerError>;
