mod config;
mod error;
mod log_files;
mod parser;

pub use config::{
    AppConfig, AppConfigExt, CapacityLimits, TruncationMode, default_log_directory,
};
pub use error::{ConfigError, DiscoveryError};
pub use log_files::{Discovery, discover};
pub use parser::{ParseResult, ParsingSession, parse_file, resolve_log_path};
