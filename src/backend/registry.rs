// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Backend service exposing a fixed backend catalog.
//!
//! The service keeps the catalog in construction order and indexes it by
//! backend name. Both are immutable after construction, so the service can be
//! shared across threads and queried concurrently without locking.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, info};

use super::filter::{filter_backends, BackendQuery};
use super::{BackendType, QuantumBackend};
use crate::error::{BackendError, Error, Result};

/// Lookup and query service over a fixed list of backends.
///
/// # Example
///
/// ```ignore
/// use aqt_provider::{AqtProvider, BackendQuery};
///
/// let provider = AqtProvider::new("MY_TOKEN")?;
///
/// // Direct access by name
/// let simulator = provider.backends().get("aqt_qasm_simulator")?;
///
/// // Query by constraint
/// let devices = provider.backends().query(&BackendQuery::new().constraint("simulator", false));
/// ```
pub struct BackendService {
    /// Backends in construction order
    backends: Vec<Arc<dyn QuantumBackend>>,

    /// Name index into `backends`
    by_name: HashMap<String, Arc<dyn QuantumBackend>>,
}

impl BackendService {
    /// Create a service over `backends`.
    ///
    /// Fails if two backends share a name.
    pub fn new(backends: Vec<Arc<dyn QuantumBackend>>) -> Result<Self> {
        let mut by_name = HashMap::with_capacity(backends.len());

        for backend in &backends {
            let name = backend.name().to_string();
            if by_name.contains_key(&name) {
                return Err(Error::Backend(BackendError::DuplicateName(name)));
            }
            debug!(backend = %name, backend_type = %backend.backend_type(), "Registering backend");
            by_name.insert(name, Arc::clone(backend));
        }

        info!(count = backends.len(), "Backend service ready");
        Ok(Self { backends, by_name })
    }

    /// Get a backend by name.
    ///
    /// Returns the same instance the service was built with.
    pub fn get(&self, name: &str) -> Result<Arc<dyn QuantumBackend>> {
        self.by_name
            .get(name)
            .cloned()
            .ok_or_else(|| Error::Backend(BackendError::NotFound(name.to_string())))
    }

    /// Run a query against the catalog.
    ///
    /// Never fails: a name that is not in the catalog yields an empty list.
    pub fn query(&self, query: &BackendQuery) -> Vec<Arc<dyn QuantumBackend>> {
        let candidates: Vec<Arc<dyn QuantumBackend>> = match query.backend_name() {
            Some(name) => self
                .backends
                .iter()
                .filter(|b| b.name() == name)
                .cloned()
                .collect(),
            None => self.backends.clone(),
        };

        let matches = filter_backends(candidates, query.predicate(), query.constraints());
        debug!(?query, matches = matches.len(), "Backend query");
        matches
    }

    /// Iterate over the backends in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn QuantumBackend>> {
        self.backends.iter()
    }

    /// Backend names, in catalog order.
    pub fn names(&self) -> Vec<&str> {
        self.backends.iter().map(|b| b.name()).collect()
    }

    /// List all backends with their types.
    pub fn list_with_types(&self) -> Vec<(String, BackendType)> {
        self.backends
            .iter()
            .map(|b| (b.name().to_string(), b.backend_type()))
            .collect()
    }

    /// Check if a backend is in the catalog.
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Get the number of backends.
    pub fn len(&self) -> usize {
        self.backends.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.backends.is_empty()
    }
}

impl std::fmt::Debug for BackendService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendService")
            .field("backends", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::MockBackend;

    fn service() -> BackendService {
        BackendService::new(vec![
            MockBackend::simulator("sim"),
            Arc::new(MockBackend::new("hw", BackendType::Device)),
            MockBackend::simulator("sim_noise"),
        ])
        .unwrap()
    }

    #[test]
    fn test_service_get() {
        let service = service();
        assert!(service.contains("hw"));
        assert_eq!(service.len(), 3);
        assert!(!service.is_empty());

        let retrieved = service.get("hw").unwrap();
        assert_eq!(retrieved.name(), "hw");
    }

    #[test]
    fn test_get_returns_registered_instance() {
        let backend = MockBackend::simulator("sim");
        let service = BackendService::new(vec![Arc::clone(&backend)]).unwrap();
        assert!(Arc::ptr_eq(&service.get("sim").unwrap(), &backend));
    }

    #[test]
    fn test_get_nonexistent() {
        let result = service().get("nope");
        assert!(matches!(
            result,
            Err(Error::Backend(BackendError::NotFound(_)))
        ));
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let result = BackendService::new(vec![
            MockBackend::simulator("twin"),
            Arc::new(MockBackend::new("twin", BackendType::Device)),
        ]);
        match result {
            Err(Error::Backend(BackendError::DuplicateName(name))) => assert_eq!(name, "twin"),
            other => panic!("expected duplicate name error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_empty_query_returns_catalog_in_order() {
        let service = service();
        let all = service.query(&BackendQuery::new());
        let names: Vec<&str> = all.iter().map(|b| b.name()).collect();
        assert_eq!(names, vec!["sim", "hw", "sim_noise"]);
        assert_eq!(names, service.names());
    }

    #[test]
    fn test_query_by_name() {
        let service = service();
        let found = service.query(&BackendQuery::new().name("hw"));
        assert_eq!(found.len(), 1);
        assert!(Arc::ptr_eq(&found[0], &service.get("hw").unwrap()));
    }

    #[test]
    fn test_query_name_is_case_sensitive() {
        assert!(service().query(&BackendQuery::new().name("HW")).is_empty());
    }

    #[test]
    fn test_query_unknown_name_is_empty() {
        assert!(service()
            .query(&BackendQuery::new().name("does_not_exist"))
            .is_empty());
    }

    #[test]
    fn test_query_name_and_constraint() {
        let service = service();
        let query = BackendQuery::new().name("sim").constraint("simulator", false);
        assert!(service.query(&query).is_empty());

        let query = BackendQuery::new().name("sim").constraint("simulator", true);
        assert_eq!(service.query(&query).len(), 1);
    }

    #[test]
    fn test_query_is_idempotent() {
        let service = service();
        let query = BackendQuery::new().constraint("simulator", true);
        let first: Vec<String> = service
            .query(&query)
            .iter()
            .map(|b| b.name().to_string())
            .collect();
        let second: Vec<String> = service
            .query(&query)
            .iter()
            .map(|b| b.name().to_string())
            .collect();
        assert_eq!(first, second);
        assert_eq!(service.len(), 3);
    }

    #[test]
    fn test_list_with_types() {
        let with_types = service().list_with_types();
        assert_eq!(
            with_types,
            vec![
                ("sim".to_string(), BackendType::Simulator),
                ("hw".to_string(), BackendType::Device),
                ("sim_noise".to_string(), BackendType::Simulator),
            ]
        );
    }

    #[test]
    fn test_concurrent_queries() {
        let service = Arc::new(service());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let service = Arc::clone(&service);
                std::thread::spawn(move || service.query(&BackendQuery::new()).len())
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 3);
        }
    }
}
