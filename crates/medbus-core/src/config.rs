//! Mediator configuration that downstream crates can serialize/deserialize.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Weights of the four join cost dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightConfig {
    /// Multiplies `iterations`.
    pub cpu_weight: f64,
    /// Multiplies `persisted_items`.
    pub memory_weight: f64,
    /// Multiplies `blocking_items`.
    pub time_weight: f64,
    /// Multiplies `request_time`.
    pub io_weight: f64,
}

impl Default for WeightConfig {
    fn default() -> Self {
        Self {
            cpu_weight: 1.0,
            memory_weight: 1.0,
            time_weight: 1.0,
            io_weight: 1.0,
        }
    }
}

impl WeightConfig {
    pub fn new(cpu_weight: f64, memory_weight: f64, time_weight: f64, io_weight: f64) -> Self {
        Self {
            cpu_weight,
            memory_weight,
            time_weight,
            io_weight,
        }
    }

    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `MEDBUS_CPU_WEIGHT`
    /// - `MEDBUS_MEMORY_WEIGHT`
    /// - `MEDBUS_TIME_WEIGHT`
    /// - `MEDBUS_IO_WEIGHT`
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Some(v) = env_f64("MEDBUS_CPU_WEIGHT") {
            cfg.cpu_weight = v;
        }

        if let Some(v) = env_f64("MEDBUS_MEMORY_WEIGHT") {
            cfg.memory_weight = v;
        }

        if let Some(v) = env_f64("MEDBUS_TIME_WEIGHT") {
            cfg.time_weight = v;
        }

        if let Some(v) = env_f64("MEDBUS_IO_WEIGHT") {
            cfg.io_weight = v;
        }

        cfg
    }

    /// Weights must be finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        let named = [
            ("cpuWeight", self.cpu_weight),
            ("memoryWeight", self.memory_weight),
            ("timeWeight", self.time_weight),
            ("ioWeight", self.io_weight),
        ];
        for (name, w) in named {
            if !w.is_finite() || w < 0.0 {
                return Err(Error::Config(format!(
                    "{} must be a finite non-negative number, got {}",
                    name, w
                )));
            }
        }
        Ok(())
    }
}

fn env_f64(var: &str) -> Option<f64> {
    std::env::var(var).ok().and_then(|s| s.trim().parse::<f64>().ok())
}

/// Which extremum a number mediator selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberType {
    Min,
    Max,
}

impl FromStr for NumberType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "min" => Ok(NumberType::Min),
            "max" => Ok(NumberType::Max),
            other => Err(Error::Config(format!(
                "No valid \"type\" value was given, must be either 'min' or 'max', but got: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for NumberType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberType::Min => f.write_str("min"),
            NumberType::Max => f.write_str("max"),
        }
    }
}

/// Declarative wiring for a number mediator. `field` names the test-result
/// attribute; the accessor itself is supplied in code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberMediatorConfig {
    pub field: String,
    #[serde(rename = "type")]
    pub mode: NumberType,
    #[serde(default)]
    pub ignore_failures: bool,
}
