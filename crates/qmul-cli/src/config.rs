//! CLI configuration.
//!
//! Settings come from, highest precedence first:
//! 1. Command-line flags
//! 2. Environment variables (`QMUL_CONFIG`, `QMUL_FORMAT`)
//! 3. The YAML config file (`--config`, or `<config dir>/qmul/config.yaml`)
//! 4. Default values

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Output encoding for generated circuits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Summary plus ASCII drawing
    #[default]
    Text,
    /// OpenQASM 3.0
    Qasm3,
    /// OpenQASM 2.0
    Qasm2,
    /// serde JSON of the circuit
    Json,
}

/// Complete CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output: OutputConfig,
    pub logging: LoggingConfig,
    pub qft: QftConfig,
    pub simulate: SimulateConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Format used when `--format` is not given
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when neither `-v` nor `RUST_LOG` is set
    pub level: Option<String>,
}

/// Hard ceiling for `qft.max_qubits`; a 4096-qubit QFT already holds
/// about 8.4 million instructions.
pub const QFT_QUBIT_CEILING: u32 = 4096;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QftConfig {
    /// Largest register `qmul qft` builds
    #[serde(default = "default_qft_max_qubits")]
    pub max_qubits: u32,
}

fn default_qft_max_qubits() -> u32 {
    1024
}

impl Default for QftConfig {
    fn default() -> Self {
        Self {
            max_qubits: default_qft_max_qubits(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulateConfig {
    /// Largest register `qmul simulate` accepts
    #[serde(default = "default_max_qubits")]
    pub max_qubits: u32,

    /// Decimal places when printing amplitudes
    #[serde(default = "default_precision")]
    pub precision: usize,
}

fn default_max_qubits() -> u32 {
    20
}

fn default_precision() -> usize {
    6
}

impl Default for SimulateConfig {
    fn default() -> Self {
        Self {
            max_qubits: default_max_qubits(),
            precision: default_precision(),
        }
    }
}

impl Config {
    /// Load from `explicit` if given, else from the default location if it
    /// exists, else defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => match default_path() {
                Some(path) if path.is_file() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Load configuration from a YAML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::from_yaml(&contents)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn from_yaml(source: &str) -> Result<Self> {
        let config: Config = serde_yaml_ng::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.qft.max_qubits > QFT_QUBIT_CEILING {
            anyhow::bail!(
                "qft.max_qubits = {} exceeds the ceiling of {QFT_QUBIT_CEILING}",
                self.qft.max_qubits
            );
        }
        let limit = qmul_sim::MAX_QUBITS;
        if self.simulate.max_qubits as usize > limit {
            anyhow::bail!(
                "simulate.max_qubits = {} exceeds the simulator limit of {limit}",
                self.simulate.max_qubits
            );
        }
        if self.simulate.precision > 15 {
            anyhow::bail!(
                "simulate.precision = {} is beyond f64 precision (max 15)",
                self.simulate.precision
            );
        }
        Ok(())
    }
}

/// `<config dir>/qmul/config.yaml`, if a config dir is known.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("qmul").join("config.yaml"))
}
