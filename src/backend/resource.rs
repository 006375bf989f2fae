// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Backends for resources listed in an AQT portal workspace.

use serde::{Deserialize, Serialize};
use std::sync::{Arc, Weak};

use super::aqt::GATEWAY_MAX_SHOTS;
use super::{BackendConfiguration, BackendType, QuantumBackend};
use crate::provider::ProviderContext;

const RESOURCE_NUM_QUBITS: u32 = 20;

/// A resource entry of a portal workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResource {
    /// Resource identifier, unique within its workspace
    pub id: String,
    /// Display name
    pub name: String,
    /// Resource kind as reported by the portal (`simulator`, `device`, ...)
    #[serde(rename = "type")]
    pub resource_type: String,
}

impl ApiResource {
    /// Simulator or device.
    pub fn backend_type(&self) -> BackendType {
        match self.resource_type.as_str() {
            "simulator" | "offline_simulator" => BackendType::Simulator,
            _ => BackendType::Device,
        }
    }
}

/// A workspace visible to the access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workspace {
    /// Workspace identifier
    pub id: String,
    /// Resources in this workspace
    #[serde(default)]
    pub resources: Vec<ApiResource>,
}

impl Workspace {
    /// Find a resource by id.
    pub fn resource(&self, id: &str) -> Option<&ApiResource> {
        self.resources.iter().find(|r| r.id == id)
    }
}

/// Backend for a single portal resource.
pub struct AqtResource {
    workspace_id: String,
    resource: ApiResource,
    configuration: BackendConfiguration,
    provider: Weak<ProviderContext>,
}

impl AqtResource {
    /// Create a backend for `resource` in `workspace_id`.
    ///
    /// Jobs are addressed to `<api_url>/submit/<workspace>/<resource>`.
    pub fn new(
        provider: Weak<ProviderContext>,
        api_url: &str,
        workspace_id: impl Into<String>,
        resource: ApiResource,
    ) -> Self {
        let workspace_id = workspace_id.into();
        let configuration = BackendConfiguration {
            backend_name: resource.id.clone(),
            backend_version: "0.0.1".to_string(),
            url: format!("{}/submit/{}/{}", api_url, workspace_id, resource.id),
            simulator: resource.backend_type() == BackendType::Simulator,
            local: false,
            coupling_map: None,
            description: resource.name.clone(),
            basis_gates: vec!["rz".into(), "r".into(), "rxx".into()],
            memory: false,
            n_qubits: RESOURCE_NUM_QUBITS,
            conditional: false,
            max_shots: GATEWAY_MAX_SHOTS,
            max_experiments: 1,
            open_pulse: false,
        };

        Self {
            workspace_id,
            resource,
            configuration,
            provider,
        }
    }

    /// Workspace the resource belongs to.
    pub fn workspace_id(&self) -> &str {
        &self.workspace_id
    }
}

impl std::fmt::Debug for AqtResource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AqtResource")
            .field("workspace_id", &self.workspace_id)
            .field("resource", &self.resource)
            .finish()
    }
}

impl QuantumBackend for AqtResource {
    fn name(&self) -> &str {
        &self.resource.id
    }

    fn backend_type(&self) -> BackendType {
        self.resource.backend_type()
    }

    fn configuration(&self) -> &BackendConfiguration {
        &self.configuration
    }

    fn provider(&self) -> Option<Arc<ProviderContext>> {
        self.provider.upgrade()
    }
}
