// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Backend queries and the filter they are evaluated with.

use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use super::{BackendConfiguration, QuantumBackend};

/// Predicate applied to each candidate backend.
pub type BackendPredicate = Arc<dyn Fn(&dyn QuantumBackend) -> bool + Send + Sync>;

/// A query over a backend catalog.
///
/// An empty query selects every backend.
///
/// ```ignore
/// let devices = provider.query(
///     &BackendQuery::new()
///         .constraint("simulator", false)
///         .filter(|b| b.configuration().n_qubits >= 10),
/// );
/// ```
#[derive(Clone, Default)]
pub struct BackendQuery {
    name: Option<String>,
    filter: Option<BackendPredicate>,
    constraints: BTreeMap<String, Value>,
}

impl BackendQuery {
    /// Create an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Only keep backends with exactly this name. An empty name is ignored.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.name = if name.is_empty() { None } else { Some(name) };
        self
    }

    /// Only keep backends for which `filter` returns true.
    pub fn filter<F>(mut self, filter: F) -> Self
    where
        F: Fn(&dyn QuantumBackend) -> bool + Send + Sync + 'static,
    {
        self.filter = Some(Arc::new(filter));
        self
    }

    /// Only keep backends whose configuration attribute `key` equals `value`.
    pub fn constraint(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.constraints.insert(key.into(), value.into());
        self
    }

    /// Requested backend name.
    pub fn backend_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Keyword constraints.
    pub fn constraints(&self) -> &BTreeMap<String, Value> {
        &self.constraints
    }

    /// Predicate, if any.
    pub fn predicate(&self) -> Option<&BackendPredicate> {
        self.filter.as_ref()
    }

    /// True when the query selects every backend.
    pub fn is_unconstrained(&self) -> bool {
        self.name.is_none() && self.filter.is_none() && self.constraints.is_empty()
    }
}

impl fmt::Debug for BackendQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackendQuery")
            .field("name", &self.name)
            .field("filter", &self.filter.as_ref().map(|_| "<fn>"))
            .field("constraints", &self.constraints)
            .finish()
    }
}

/// Keep the backends that satisfy every constraint and the predicate.
///
/// The result is a subsequence of `backends`; relative order is preserved.
/// A constraint naming an attribute the configuration does not have never
/// matches.
pub fn filter_backends(
    backends: Vec<Arc<dyn QuantumBackend>>,
    filter: Option<&BackendPredicate>,
    constraints: &BTreeMap<String, Value>,
) -> Vec<Arc<dyn QuantumBackend>> {
    backends
        .into_iter()
        .filter(|backend| matches_constraints(backend.configuration(), constraints))
        .filter(|backend| filter.map_or(true, |f| f(backend.as_ref())))
        .collect()
}

fn matches_constraints(
    configuration: &BackendConfiguration,
    constraints: &BTreeMap<String, Value>,
) -> bool {
    if constraints.is_empty() {
        return true;
    }
    let descriptor = configuration.descriptor();
    constraints
        .iter()
        .all(|(key, value)| descriptor.get(key) == Some(value))
}
