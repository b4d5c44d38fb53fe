//! JSON configuration for factorization runs

use crate::factorize::FactorizationConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Complete run configuration loaded from JSON
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Generated input matrix
    #[serde(default)]
    pub matrix: MatrixConfig,
    /// Factorization options
    #[serde(default)]
    pub factorization: FactorizationConfig,
    /// What gets printed
    #[serde(default)]
    pub output: OutputConfig,
}

/// Random input matrix configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixConfig {
    /// Matrix dimension `n`
    #[serde(default = "default_size")]
    pub size: usize,
    /// Entries are drawn from `[0, max_value]`
    #[serde(default = "default_max_value")]
    pub max_value: f64,
    /// Seed for reproducible matrices; a fresh one is drawn when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_size() -> usize {
    100
}

fn default_max_value() -> f64 {
    2.0
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
            max_value: default_max_value(),
            seed: None,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Print the matrix before factorization
    #[serde(default = "default_true")]
    pub print_input: bool,
    /// Print the factored matrix
    #[serde(default = "default_true")]
    pub print_output: bool,
    /// Decimals per printed entry
    #[serde(default = "default_precision")]
    pub precision: usize,
}

fn default_true() -> bool {
    true
}

fn default_precision() -> usize {
    6
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            print_input: true,
            print_output: true,
            precision: default_precision(),
        }
    }
}

impl RunConfig {
    /// Load configuration from JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let contents =
            fs::read_to_string(path).map_err(|e| format!("Failed to read config file: {}", e))?;

        let config: RunConfig =
            serde_json::from_str(&contents).map_err(|e| format!("Failed to parse JSON: {}", e))?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to JSON file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        fs::write(path, json).map_err(|e| format!("Failed to write config file: {}", e))?;

        Ok(())
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<(), String> {
        if self.matrix.size == 0 {
            return Err("Matrix size must be positive".to_string());
        }
        if !self.matrix.max_value.is_finite() || self.matrix.max_value <= 0.0 {
            return Err(format!(
                "Matrix max_value must be finite and positive, got {}",
                self.matrix.max_value
            ));
        }
        let epsilon = self.factorization.epsilon;
        if !epsilon.is_finite() || epsilon <= 0.0 {
            return Err(format!(
                "Epsilon must be finite and positive, got {}",
                epsilon
            ));
        }
        Ok(())
    }
}
