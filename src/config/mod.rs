//! Configuration module for fnpack
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (FNPACK_*)
//! 3. Project config (fnpack.toml) or an explicit `--config` file
//! 4. User config (~/.config/fnpack/config.toml)
//! 5. Built-in defaults (lowest priority)

mod env_validator;
mod loader;
mod types;

pub use loader::{
    apply_env_overrides, load_with_warnings, resolve, user_config_path, ConfigWarning,
    LoadedConfig, CONFIG_FILE_NAME,
};
pub use types::{
    Config, LogFormat, OutputConfig, PackagingConfig, ServiceConfig, Verbosity,
    DEFAULT_HOST_VERSION,
};
