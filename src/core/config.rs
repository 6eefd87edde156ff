/*!
 * Simulator Configuration
 *
 * Runtime settings, read from the environment the way the binary is
 * usually launched:
 * - PROCSIM_STORE_PATH: flat-file process store (default: processes.txt)
 * - PROCSIM_STEP_DELAY_MS: pacing delay per unit step (default: 0)
 * - PROCSIM_QUANTUM: round-robin quantum (default: 2)
 * - PROCSIM_FRESH_RUNS: reset process state between policies (default: false)
 * - PROCSIM_RR_RELEASE_EACH_TURN: free pages after every round-robin slice (default: false)
 * - PROCSIM_REPORT: console | json | none (default: console)
 * - PROCSIM_SEED: fixed seed for page draws (default: entropy)
 */

use super::limits::{DEFAULT_QUANTUM, DEFAULT_STORE_PATH};
use super::types::Units;
use crate::monitoring::ReportFormat;
use crate::scheduler::RoundRobinMemory;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

pub const ENV_STORE_PATH: &str = "PROCSIM_STORE_PATH";
pub const ENV_STEP_DELAY_MS: &str = "PROCSIM_STEP_DELAY_MS";
pub const ENV_QUANTUM: &str = "PROCSIM_QUANTUM";
pub const ENV_FRESH_RUNS: &str = "PROCSIM_FRESH_RUNS";
pub const ENV_RR_RELEASE_EACH_TURN: &str = "PROCSIM_RR_RELEASE_EACH_TURN";
pub const ENV_REPORT: &str = "PROCSIM_REPORT";
pub const ENV_SEED: &str = "PROCSIM_SEED";

/// Configuration errors
#[derive(Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
pub enum ConfigError {
    #[error("Invalid value {value:?} for {var}: {reason}")]
    #[diagnostic(
        code(config::invalid_value),
        help("Fix or unset the environment variable and run again.")
    )]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: String,
    },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Simulator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SimConfig {
    pub store_path: PathBuf,
    pub step_delay: Duration,
    pub quantum: Units,
    pub reset_between_policies: bool,
    pub rr_memory: RoundRobinMemory,
    pub report: ReportFormat,
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
            step_delay: Duration::ZERO,
            quantum: DEFAULT_QUANTUM,
            reset_between_policies: false,
            rr_memory: RoundRobinMemory::RetainUntilExit,
            report: ReportFormat::Console,
            seed: None,
        }
    }
}

impl SimConfig {
    /// Build configuration from process environment variables
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup(ENV_STORE_PATH) {
            config.store_path = PathBuf::from(path);
        }
        if let Some(ms) = parse_var::<u64>(&lookup, ENV_STEP_DELAY_MS)? {
            config.step_delay = Duration::from_millis(ms);
        }
        if let Some(quantum) = parse_var::<Units>(&lookup, ENV_QUANTUM)? {
            config.quantum = quantum;
        }
        if let Some(fresh) = parse_flag(&lookup, ENV_FRESH_RUNS)? {
            config.reset_between_policies = fresh;
        }
        if let Some(release) = parse_flag(&lookup, ENV_RR_RELEASE_EACH_TURN)? {
            config.rr_memory = if release {
                RoundRobinMemory::ReleaseEachTurn
            } else {
                RoundRobinMemory::RetainUntilExit
            };
        }
        if let Some(report) = parse_var::<ReportFormat>(&lookup, ENV_REPORT)? {
            config.report = report;
        }
        config.seed = parse_var::<u64>(&lookup, ENV_SEED)?;

        Ok(config)
    }

    pub fn with_store_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.store_path = path.into();
        self
    }

    pub fn with_step_delay(mut self, delay: Duration) -> Self {
        self.step_delay = delay;
        self
    }

    pub fn with_quantum(mut self, quantum: Units) -> Self {
        self.quantum = quantum;
        self
    }

    pub fn with_fresh_runs(mut self, fresh: bool) -> Self {
        self.reset_between_policies = fresh;
        self
    }

    pub fn with_rr_memory(mut self, rr_memory: RoundRobinMemory) -> Self {
        self.rr_memory = rr_memory;
        self
    }

    pub fn with_report(mut self, report: ReportFormat) -> Self {
        self.report = report;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, var: &'static str) -> ConfigResult<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(var) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| ConfigError::InvalidValue {
                var,
                value: raw.clone(),
                reason: e.to_string(),
            }),
    }
}

fn parse_flag(lookup: &impl Fn(&str) -> Option<String>, var: &'static str) -> ConfigResult<Option<bool>> {
    match lookup(var) {
        None => Ok(None),
        Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(Some(true)),
            "0" | "false" | "no" | "off" | "" => Ok(Some(false)),
            _ => Err(ConfigError::InvalidValue {
                var,
                value: raw,
                reason: "expected a boolean (1/0, true/false)".to_string(),
            }),
        },
    }
}
