pub mod errors;
pub mod types;

pub use errors::{ChatbarError, ConfigError};
pub use types::DeviceClass;

pub type Result<T> = std::result::Result<T, ChatbarError>;
