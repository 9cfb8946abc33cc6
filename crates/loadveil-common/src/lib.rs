pub mod errors;
pub mod status;

pub use errors::{ConfigError, LoadveilError, SurfaceError};
pub use status::{LoadStatus, StatusKind, PROGRESS_EPSILON};

pub type Result<T> = std::result::Result<T, LoadveilError>;
