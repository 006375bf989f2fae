// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! AQT Provider
//!
//! This crate exposes the quantum backends of Alpine Quantum Technologies (AQT)
//! through a single provider object: a fixed catalog of gateway backends that
//! can be looked up by name or queried by constraints, plus discovery of the
//! resources in the caller's portal workspaces.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │              AqtProvider                 │
//! ├──────────────────┬──────────────────────┤
//! │  BackendService  │   PortalClient       │
//! │  (name, query)   │   (reqwest)          │
//! ├──────────────────┴──────────────────────┤
//! │  AqtBackend × 4  │   AqtResource        │
//! └──────────────────┴──────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration management
//! - [`provider`]: The provider and its portal client
//! - [`backend`]: Backend trait, catalog, queries
//! - [`validation`]: Run option validation
//! - [`error`]: Error types

pub mod backend;
pub mod config;
pub mod error;
pub mod provider;
pub mod validation;

pub use backend::{BackendQuery, BackendService, BackendType, QuantumBackend};
pub use config::Config;
pub use error::{Error, Result};
pub use provider::AqtProvider;

#[cfg(test)]
pub mod test_utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
