// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! The AQT provider.
//!
//! An [`AqtProvider`] represents one credentialed connection to AQT. It owns
//! the fixed backend catalog and the portal client used to discover
//! workspace resources.
//!
//! # Usage
//!
//! ```ignore
//! use aqt_provider::{AqtProvider, BackendQuery};
//!
//! let provider = AqtProvider::new("MY_TOKEN")?;
//!
//! let simulator = provider.backends().get("aqt_qasm_simulator")?;
//! let devices = provider.query(&BackendQuery::new().constraint("simulator", false));
//!
//! let workspaces = provider.workspaces().await?;
//! let resource = provider.get_resource("aqt", "simulator_no_noise").await?;
//! ```

pub mod client;

use secrecy::{ExposeSecret, SecretString};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

use crate::backend::{aqt, AqtResource, BackendQuery, BackendService, QuantumBackend, Workspace};
use crate::config::{Config, ProviderConfig};
use crate::error::{BackendError, Error, Result};

pub use client::{PortalClient, ReqwestPortalClient};

/// Provider state that backends may reach through their back-reference.
pub struct ProviderContext {
    name: String,
    access_token: SecretString,
    api_url: String,
}

impl ProviderContext {
    /// Create a context.
    pub fn new(
        name: impl Into<String>,
        access_token: SecretString,
        api_url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            access_token,
            api_url: api_url.into(),
        }
    }

    /// Provider name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Portal API root.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Access token for authenticated portal and gateway calls.
    pub fn access_token(&self) -> &SecretString {
        &self.access_token
    }

    /// Whether an empty token was supplied.
    pub fn has_empty_token(&self) -> bool {
        self.access_token.expose_secret().is_empty()
    }
}

impl fmt::Debug for ProviderContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderContext")
            .field("name", &self.name)
            .field("access_token", &"[REDACTED]")
            .field("api_url", &self.api_url)
            .finish()
    }
}

/// Provider for backends from Alpine Quantum Technologies (AQT).
pub struct AqtProvider {
    context: Arc<ProviderContext>,
    backends: BackendService,
    client: Arc<dyn PortalClient>,
}

impl AqtProvider {
    /// Create a provider with default settings and the given access token.
    pub fn new(access_token: impl Into<String>) -> Result<Self> {
        let mut config = Config::default();
        config.provider.access_token = Some(access_token.into());
        Self::from_config(&config)
    }

    /// Create a provider with the token and portal URL taken from the
    /// `AQT_TOKEN` and `AQT_PORTAL_URL` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_config(&Config::from_env())
    }

    /// Create a provider from configuration.
    ///
    /// Fails if the configuration is invalid or no access token is configured.
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;

        let token = config.provider.access_token.clone().ok_or_else(|| {
            Error::Config("No access token provided. Use 'AQT_TOKEN' environment variable.".into())
        })?;

        let client = ReqwestPortalClient::new(
            config.provider.api_url(),
            SecretString::from(token.clone()),
            &config.portal,
        )?;

        Self::with_client(&config.provider, token, Arc::new(client))
    }

    /// Create a provider that talks to the portal through `client`.
    pub fn with_client(
        config: &ProviderConfig,
        access_token: impl Into<String>,
        client: Arc<dyn PortalClient>,
    ) -> Result<Self> {
        let context = Arc::new(ProviderContext::new(
            config.name.clone(),
            SecretString::from(access_token.into()),
            config.api_url(),
        ));

        let backends = BackendService::new(aqt::catalog(&Arc::downgrade(&context)))?;

        info!(
            provider = %context.name(),
            api_url = %context.api_url(),
            backends = ?backends.names(),
            "AQT provider initialized"
        );

        Ok(Self {
            context,
            backends,
            client,
        })
    }

    /// Provider name.
    pub fn name(&self) -> &str {
        self.context.name()
    }

    /// Shared provider context.
    pub fn context(&self) -> &Arc<ProviderContext> {
        &self.context
    }

    /// The backend service.
    pub fn backends(&self) -> &BackendService {
        &self.backends
    }

    /// Query the backend catalog.
    pub fn query(&self, query: &BackendQuery) -> Vec<Arc<dyn QuantumBackend>> {
        self.backends.query(query)
    }

    /// Return the single backend matching `query`.
    pub fn get_backend(&self, query: &BackendQuery) -> Result<Arc<dyn QuantumBackend>> {
        let mut matches = self.backends.query(query);
        match matches.len() {
            0 => Err(Error::Backend(BackendError::NotFound(
                "No backend matches criteria.".into(),
            ))),
            1 => Ok(matches.remove(0)),
            _ => Err(Error::Backend(BackendError::Ambiguous(
                "More than one backend matches criteria.".into(),
            ))),
        }
    }

    /// List the workspaces, and their resources, visible to the access token.
    pub async fn workspaces(&self) -> Result<Vec<Workspace>> {
        Ok(self.client.workspaces().await?)
    }

    /// Get a backend for `resource` in `workspace`.
    pub async fn get_resource(&self, workspace: &str, resource: &str) -> Result<Arc<AqtResource>> {
        let workspaces = self.workspaces().await?;

        let api_workspace = workspaces
            .iter()
            .find(|w| w.id == workspace)
            .ok_or_else(|| {
                Error::Backend(BackendError::NotFound(format!(
                    "Workspace '{workspace}' is not accessible."
                )))
            })?;

        let api_resource = api_workspace.resource(resource).cloned().ok_or_else(|| {
            Error::Backend(BackendError::NotFound(format!(
                "Resource '{resource}' does not exist in workspace '{workspace}'."
            )))
        })?;

        debug!(workspace = %workspace, resource = %resource, "Resolved portal resource");

        Ok(Arc::new(AqtResource::new(
            Arc::downgrade(&self.context),
            self.context.api_url(),
            api_workspace.id.clone(),
            api_resource,
        )))
    }
}

impl fmt::Display for AqtProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<AQTProvider(name={})>", self.name())
    }
}

impl fmt::Debug for AqtProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl PartialEq for AqtProvider {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name()
    }
}
