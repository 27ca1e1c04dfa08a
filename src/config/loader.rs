//! Configuration discovery, loading and environment overrides

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PackResult, PackagingError};

use super::env_validator::{suggest, EnvVarValidator};
use super::types::{Config, LogFormat, Verbosity};

/// Project configuration file name
pub const CONFIG_FILE_NAME: &str = "fnpack.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, ". Did you mean '{}'?", suggestion)?;
        }
        Ok(())
    }
}

/// Configuration plus everything worth telling the user about how it was built
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the configuration came from, if any
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
    /// Rejected environment overrides
    pub env_warnings: Vec<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> PackResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| PackagingError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| PackagingError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
                key,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve configuration for a project.
///
/// Order: explicit path (must exist), `<project>/fnpack.toml`,
/// `<config dir>/fnpack/config.toml`, built-in defaults. `FNPACK_*`
/// environment variables are applied last.
pub fn resolve(project_root: &Path, explicit: Option<&Path>) -> PackResult<LoadedConfig> {
    let candidate = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => [Some(project_root.join(CONFIG_FILE_NAME)), user_config_path()]
            .into_iter()
            .flatten()
            .find(|p| p.is_file()),
    };

    let mut loaded = match candidate {
        Some(path) => {
            let (config, warnings) = load_with_warnings(&path)?;
            LoadedConfig {
                config,
                source: Some(path),
                warnings,
                env_warnings: Vec::new(),
            }
        }
        None => LoadedConfig::default(),
    };

    let (config, env_warnings) =
        apply_env_overrides(loaded.config, |name| std::env::var(name).ok());
    loaded.config = config;
    loaded.env_warnings = env_warnings;
    Ok(loaded)
}

/// User-level configuration file
pub fn user_config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("FNPACK_USER_CONFIG") {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|d| d.join("fnpack").join("config.toml"))
}

/// Apply `FNPACK_*` overrides read through `env`; invalid values are skipped.
pub fn apply_env_overrides<F>(mut config: Config, env: F) -> (Config, Vec<String>)
where
    F: Fn(&str) -> Option<String>,
{
    let mut warnings = Vec::new();

    if let Some(packager) = env("FNPACK_PACKAGER").filter(|v| !v.trim().is_empty()) {
        config.packaging.packager = packager.trim().to_string();
    }

    if let Some(version) = env("FNPACK_HOST_VERSION").filter(|v| !v.trim().is_empty()) {
        config.service.host_version = version.trim().to_string();
    }

    if let Some(value) = env("FNPACK_CONCURRENCY") {
        match EnvVarValidator::new("FNPACK_CONCURRENCY", &[])
            .parse(&value, |s| s.parse::<usize>().ok().filter(|n| *n > 0))
        {
            Ok(n) => config.packaging.concurrency = Some(n),
            Err(w) => warnings.push(w),
        }
    }

    if let Some(value) = env("FNPACK_VERBOSITY") {
        match EnvVarValidator::new("FNPACK_VERBOSITY", &["quiet", "normal", "verbose", "debug"])
            .parse(&value, parse_verbosity)
        {
            Ok(v) => config.output.verbosity = v,
            Err(w) => warnings.push(w),
        }
    }

    if let Some(value) = env("FNPACK_LOG_FORMAT") {
        match EnvVarValidator::new("FNPACK_LOG_FORMAT", &["console", "tracing"])
            .parse(&value, parse_log_format)
        {
            Ok(f) => config.output.log_format = f,
            Err(w) => warnings.push(w),
        }
    }

    (config, warnings)
}

fn parse_verbosity(value: &str) -> Option<Verbosity> {
    match value.to_lowercase().as_str() {
        "quiet" => Some(Verbosity::Quiet),
        "normal" => Some(Verbosity::Normal),
        "verbose" => Some(Verbosity::Verbose),
        "debug" => Some(Verbosity::Debug),
        _ => None,
    }
}

fn parse_log_format(value: &str) -> Option<LogFormat> {
    match value.to_lowercase().as_str() {
        "console" => Some(LogFormat::Console),
        "tracing" => Some(LogFormat::Tracing),
        _ => None,
    }
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "service",
        "name",
        "provider",
        "host_version",
        "individually",
        "functions",
        "handler",
        "artifact",
        "package",
        "disable",
        "include",
        "packaging",
        "packager",
        "build_output",
        "exclude",
        "concurrency",
        "compression_level",
        "include_modules",
        "scripts",
        "ignore_scripts",
        "dependency_depth",
        "output",
        "verbosity",
        "log_format",
    ];

    suggest(unknown, CANDIDATES).map(str::to_string)
}
