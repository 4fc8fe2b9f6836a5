pub mod api;
pub mod catalog;
pub mod errors;
pub mod logging;
pub mod root;

pub use api::ApiConfig;
pub use catalog::CatalogConfig;
pub use errors::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use root::{CliOverrides, Config};
