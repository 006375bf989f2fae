// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Quantum backend trait definition.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;

use crate::error::Result;
use crate::provider::ProviderContext;
use crate::validation;

/// Type of backend (simulator or device).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendType {
    /// Remote simulator
    Simulator,
    /// Trapped-ion quantum device
    Device,
}

impl std::fmt::Display for BackendType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BackendType::Simulator => write!(f, "simulator"),
            BackendType::Device => write!(f, "device"),
        }
    }
}

/// Static description of a backend's capabilities.
///
/// Keyword constraints passed to a backend query are matched against the
/// fields of this struct by name, see [`BackendConfiguration::descriptor`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendConfiguration {
    /// Backend name, identical to [`QuantumBackend::name`]
    pub backend_name: String,
    /// Backend version
    pub backend_version: String,
    /// Endpoint jobs for this backend are sent to
    pub url: String,
    /// Whether the backend is a simulator
    pub simulator: bool,
    /// Whether the backend runs locally
    pub local: bool,
    /// Qubit connectivity, `None` for all-to-all
    pub coupling_map: Option<Vec<[u32; 2]>>,
    /// Human-readable description
    pub description: String,
    /// Native gate names
    pub basis_gates: Vec<String>,
    /// Whether per-shot memory is returned
    pub memory: bool,
    /// Number of qubits
    pub n_qubits: u32,
    /// Whether classically conditioned gates are supported
    pub conditional: bool,
    /// Maximum shots per circuit
    pub max_shots: u32,
    /// Maximum circuits per job
    pub max_experiments: u32,
    /// Whether pulse-level jobs are accepted
    pub open_pulse: bool,
}

impl BackendConfiguration {
    /// Attribute name to value mapping used for constraint matching.
    pub fn descriptor(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }

    /// Whether `gate` is part of the native basis.
    pub fn supports_gate(&self, gate: &str) -> bool {
        self.basis_gates.iter().any(|g| g == gate)
    }
}

/// Options applied when running circuits on a backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunOptions {
    /// Number of shots per circuit
    pub shots: u32,
    /// Give up waiting for a job result after this many seconds (`None`: wait forever)
    pub query_timeout_seconds: Option<f64>,
    /// Seconds between two job status queries
    pub query_period_seconds: f64,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            shots: 100,
            query_timeout_seconds: None,
            query_period_seconds: 5.0,
        }
    }
}

/// The trait that all AQT backends implement.
pub trait QuantumBackend: Send + Sync {
    /// Get the backend name.
    fn name(&self) -> &str;

    /// Get the backend type.
    fn backend_type(&self) -> BackendType;

    /// Get the configuration descriptor.
    fn configuration(&self) -> &BackendConfiguration;

    /// The provider this backend was created by, if it is still alive.
    ///
    /// Backends only hold a weak handle, so this returns `None` once the
    /// provider has been dropped.
    fn provider(&self) -> Option<Arc<ProviderContext>>;

    /// Maximum number of circuits per job.
    fn max_circuits(&self) -> u32 {
        self.configuration().max_experiments
    }

    /// Options used when the caller does not override them.
    fn default_options(&self) -> RunOptions {
        RunOptions::default()
    }

    /// Check run options against this backend's limits.
    fn validate_options(&self, options: &RunOptions) -> Result<()> {
        validation::validate_shots(options.shots, self.configuration().max_shots)?;
        validation::validate_query_period(options.query_period_seconds)?;
        validation::validate_query_timeout(options.query_timeout_seconds)?;
        Ok(())
    }
}

impl std::fmt::Debug for dyn QuantumBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuantumBackend")
            .field("name", &self.name())
            .field("backend_type", &self.backend_type())
            .finish()
    }
}
