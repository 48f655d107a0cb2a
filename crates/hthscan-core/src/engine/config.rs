use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Invalid value for '{parameter}': {reason}")]
    InvalidValue {
        parameter: &'static str,
        reason: String,
    },
}

/// Worker pool settings for the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DispatchConfig {
    /// Upper bound on concurrent workers. `None` uses the global rayon pool, which defaults
    /// to one worker per logical core.
    pub threads: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScanConfig {
    pub dispatch: DispatchConfig,
}

#[derive(Default)]
pub struct ScanConfigBuilder {
    threads: Option<usize>,
}

impl ScanConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn threads(mut self, threads: Option<usize>) -> Self {
        self.threads = threads;
        self
    }

    pub fn build(self) -> Result<ScanConfig, ConfigError> {
        if self.threads == Some(0) {
            return Err(ConfigError::InvalidValue {
                parameter: "threads",
                reason: "the worker pool needs at least one thread".to_string(),
            });
        }
        Ok(ScanConfig {
            dispatch: DispatchConfig {
                threads: self.threads,
            },
        })
    }
}
