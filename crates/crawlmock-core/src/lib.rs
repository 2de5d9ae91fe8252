pub mod app_config;
pub mod config;
pub mod error;
pub mod pool;
pub mod schema;
pub mod sink;
pub mod validate;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use error::ConfigError;
pub use pool::{
    load_creator_pool, CreatorPool, SampleError, DEFAULT_SAMPLE_SIZE, MAX_SAMPLE_SIZE,
    MIN_SAMPLE_SIZE,
};
pub use schema::{CrawlError, CreatorId, CreatorResult};
pub use sink::{ObservationSink, RecordingSink, TracingSink};
pub use validate::{
    validate_batch, validate_crawl_error, validate_creator_result, BatchOutcome,
    UnknownFieldPolicy, ValidateOptions, ValidationFailure,
};
