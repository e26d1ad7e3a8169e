pub mod app_config;
pub mod config;
pub mod filter;
pub mod record;
pub mod sample;
pub mod vocab;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use filter::{filter_records, is_chain, matches_industry, IndustrySelection};
pub use record::{AgeEstimate, BusinessRecord, RecordSource, NOT_AVAILABLE};
pub use sample::generate_sample;
pub use vocab::{load_vocabulary, IndustryFilter, Vocabulary, ALL_INDUSTRIES};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read vocabulary file {path}: {source}")]
    VocabularyFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse vocabulary file: {0}")]
    VocabularyFileParse(#[source] serde_yaml::Error),

    #[error("vocabulary validation failed: {0}")]
    Validation(String),
}
