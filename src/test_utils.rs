// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Shared test utilities for provider tests.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::{const_mutex, Mutex};
use secrecy::SecretString;

use crate::backend::{ApiResource, BackendConfiguration, BackendType, QuantumBackend, Workspace};
use crate::error::BackendError;
use crate::provider::{PortalClient, ProviderContext};

/// Serializes tests that read or write `AQT_*` environment variables.
pub static ENV_LOCK: Mutex<()> = const_mutex(());

/// A provider context with a dummy token.
pub fn test_context() -> Arc<ProviderContext> {
    Arc::new(ProviderContext::new(
        "aqt_provider",
        SecretString::from("test-token".to_string()),
        "https://portal.example/api/v1",
    ))
}

/// Mock backend with a configurable name, type and size.
pub struct MockBackend {
    pub backend_type: BackendType,
    pub configuration: BackendConfiguration,
}

impl MockBackend {
    pub fn new(name: &str, backend_type: BackendType) -> Self {
        Self {
            backend_type,
            configuration: BackendConfiguration {
                backend_name: name.to_string(),
                backend_version: "1.0.0-mock".to_string(),
                url: format!("mock://{}", name),
                simulator: backend_type == BackendType::Simulator,
                local: true,
                coupling_map: None,
                description: "mock backend".to_string(),
                basis_gates: vec!["rx".to_string(), "rz".to_string()],
                memory: false,
                n_qubits: 2,
                conditional: false,
                max_shots: 200,
                max_experiments: 1,
                open_pulse: false,
            },
        }
    }

    pub fn with_qubits(mut self, n_qubits: u32) -> Self {
        self.configuration.n_qubits = n_qubits;
        self
    }

    pub fn simulator(name: &str) -> Arc<dyn QuantumBackend> {
        Arc::new(Self::new(name, BackendType::Simulator))
    }
}

impl QuantumBackend for MockBackend {
    fn name(&self) -> &str {
        &self.configuration.backend_name
    }

    fn backend_type(&self) -> BackendType {
        self.backend_type
    }

    fn configuration(&self) -> &BackendConfiguration {
        &self.configuration
    }

    fn provider(&self) -> Option<Arc<ProviderContext>> {
        None
    }
}

/// Portal client returning a canned response and counting calls.
pub struct MockPortalClient {
    response: Result<Vec<Workspace>, BackendError>,
    calls: Mutex<u32>,
}

impl MockPortalClient {
    pub fn new(response: Result<Vec<Workspace>, BackendError>) -> Self {
        Self {
            response,
            calls: Mutex::new(0),
        }
    }

    pub fn calls(&self) -> u32 {
        *self.calls.lock()
    }
}

#[async_trait]
impl PortalClient for MockPortalClient {
    async fn workspaces(&self) -> Result<Vec<Workspace>, BackendError> {
        *self.calls.lock() += 1;
        self.response.clone()
    }
}

/// Two workspaces: `aqt` with a simulator, `lab` with a device.
pub fn portal_workspaces() -> Vec<Workspace> {
    vec![
        Workspace {
            id: "aqt".into(),
            resources: vec![ApiResource {
                id: "simulator_no_noise".into(),
                name: "Simulator (no noise)".into(),
                resource_type: "simulator".into(),
            }],
        },
        Workspace {
            id: "lab".into(),
            resources: vec![ApiResource {
                id: "ibex".into(),
                name: "Ibex".into(),
                resource_type: "device".into(),
            }],
        },
    ]
}
