// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! AQT backends and the service that exposes them.
//!
//! - [`aqt::AqtBackend`]: the fixed gateway catalog (two simulators, two devices)
//! - [`resource::AqtResource`]: a resource picked from a portal workspace
//! - [`registry::BackendService`]: name lookup and queries over a catalog
//! - [`filter::BackendQuery`]: name, predicate and keyword constraints

pub mod aqt;
pub mod filter;
pub mod registry;
pub mod resource;
pub mod r#trait;

pub use aqt::{AqtBackend, AqtSystem};
pub use filter::{filter_backends, BackendPredicate, BackendQuery};
pub use r#trait::{BackendConfiguration, BackendType, QuantumBackend, RunOptions};
pub use registry::BackendService;
pub use resource::{ApiResource, AqtResource, Workspace};
