//! Profiler configuration with environment overrides
use poolprof_core::{
    PoolError, Result, DEFAULT_POOL_NAME, POOLPROF_POOL_NAME_VAR, POOLPROF_TRACE_OPERATIONS_VAR,
};

/// Where a configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Built-in defaults only
    Default,
    /// At least one value was read from the environment
    EnvironmentVariable(String),
    /// Set in code through the builder
    Programmatic,
}

/// Configuration for a profiled pool
#[derive(Debug, Clone)]
pub struct ProfilerConfig {
    /// Pool name used in logs and reports
    pub name: String,
    /// Wrap every pool call in a tracing span
    pub trace_operations: bool,
    /// Configuration source for debugging
    pub source: ConfigSource,
}

impl Default for ProfilerConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_POOL_NAME.to_string(),
            trace_operations: false,
            source: ConfigSource::Default,
        }
    }
}

impl ProfilerConfig {
    /// Create a configuration for a named pool
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: ConfigSource::Programmatic,
            ..Self::default()
        }
    }

    /// Load configuration, applying environment overrides on top of defaults
    pub fn load() -> Result<Self> {
        let mut config = Self::default();
        let mut overridden = Vec::new();

        if let Ok(name) = std::env::var(POOLPROF_POOL_NAME_VAR) {
            let name = name.trim();
            if name.is_empty() {
                return Err(PoolError::configuration(format!(
                    "{POOLPROF_POOL_NAME_VAR} must not be empty"
                )));
            }
            config.name = name.to_string();
            overridden.push(POOLPROF_POOL_NAME_VAR);
        }

        if let Ok(value) = std::env::var(POOLPROF_TRACE_OPERATIONS_VAR) {
            config.trace_operations = parse_flag(POOLPROF_TRACE_OPERATIONS_VAR, &value)?;
            overridden.push(POOLPROF_TRACE_OPERATIONS_VAR);
        }

        if !overridden.is_empty() {
            config.source = ConfigSource::EnvironmentVariable(overridden.join(","));
        }

        tracing::debug!(
            name = %config.name,
            trace_operations = config.trace_operations,
            source = ?config.source,
            "Loaded profiler configuration"
        );

        Ok(config)
    }
}

/// Parse a boolean flag the way environment switches are usually written
pub fn parse_flag(variable: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(PoolError::configuration(format!(
            "{variable} must be a boolean (true/false/1/0/yes/no), got '{other}'"
        ))),
    }
}
