use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read creator id file {path}: {source}")]
    CreatorIdsFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse creator id file: {0}")]
    CreatorIdsFileParse(#[from] serde_yaml::Error),

    #[error("creator id file validation failed: {0}")]
    Validation(String),
}
