//! Application-wide constants.

/// The display name of the application.
pub const APP_NAME: &str = "Layoutsmith";

/// The binary name of the application (used in command examples and archive names).
pub const APP_BINARY_NAME: &str = "layoutsmith";

/// Schema format version written by this build.
pub const SCHEMA_VERSION: &str = "2.0";

/// Major schema version this build can read.
pub const SUPPORTED_SCHEMA_MAJOR: u32 = 2;
