use amudai_common::{Result, error::Error, verify_arg};
use serde::{Deserialize, Serialize};

/// Settings shared by all function invocations of a [`FunctionContext`](crate::FunctionContext).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FunctionsConfig {
    /// Time zone used when a call omits its timezone argument or passes an
    /// empty one.
    pub default_timezone: String,
    /// Batches with at least this many rows are evaluated on the rayon pool.
    /// `0` disables parallel evaluation.
    pub parallel_threshold: usize,
    /// Smallest row range handed to a single rayon task.
    pub min_rows_per_task: usize,
}

impl FunctionsConfig {
    pub const DEFAULT_PARALLEL_THRESHOLD: usize = 64 * 1024;
    pub const DEFAULT_MIN_ROWS_PER_TASK: usize = 4096;

    /// Parses a JSON document. Missing fields take their default values.
    pub fn from_json(json: &str) -> Result<FunctionsConfig> {
        let config: FunctionsConfig =
            serde_json::from_str(json).map_err(|e| Error::invalid_arg("config", e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| Error::invalid_arg("config", e.to_string()))
    }

    pub fn validate(&self) -> Result<()> {
        verify_arg!(min_rows_per_task, self.min_rows_per_task > 0);
        Ok(())
    }

    pub fn with_default_timezone(mut self, timezone: impl Into<String>) -> FunctionsConfig {
        self.default_timezone = timezone.into();
        self
    }

    pub fn with_parallel_threshold(mut self, parallel_threshold: usize) -> FunctionsConfig {
        self.parallel_threshold = parallel_threshold;
        self
    }

    pub fn with_min_rows_per_task(mut self, min_rows_per_task: usize) -> FunctionsConfig {
        self.min_rows_per_task = min_rows_per_task;
        self
    }

    /// Whether a batch of `num_rows` rows should be split across the rayon pool.
    pub fn is_parallel(&self, num_rows: usize) -> bool {
        self.parallel_threshold != 0 && num_rows >= self.parallel_threshold
    }
}

impl Default for FunctionsConfig {
    fn default() -> Self {
        FunctionsConfig {
            default_timezone: "UTC".to_string(),
            parallel_threshold: Self::DEFAULT_PARALLEL_THRESHOLD,
            min_rows_per_task: Self::DEFAULT_MIN_ROWS_PER_TASK,
        }
    }
}
