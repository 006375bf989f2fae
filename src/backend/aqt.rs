// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! The fixed catalog of AQT gateway backends.
//!
//! Two simulators and two trapped-ion devices are reachable through the AQT
//! gateway. Each is described by an [`AqtSystem`] and wrapped in an
//! [`AqtBackend`] that holds a weak handle back to the provider that built it.

use std::sync::{Arc, Weak};

use super::{BackendConfiguration, BackendType, QuantumBackend};
use crate::provider::ProviderContext;

const GATEWAY_URL: &str = "https://gateway.aqt.eu/marmot";

/// Maximum shots per circuit accepted by the gateway.
pub const GATEWAY_MAX_SHOTS: u32 = 200;

/// AQT gateway systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AqtSystem {
    /// Noiseless simulator
    Simulator,
    /// Simulator with noise model 1
    SimulatorNoise1,
    /// Innsbruck trapped-ion device
    Innsbruck,
    /// IMST Ibex trapped-ion device
    Ibex,
}

impl AqtSystem {
    /// All systems, in catalog order.
    pub const ALL: [AqtSystem; 4] = [
        AqtSystem::Simulator,
        AqtSystem::SimulatorNoise1,
        AqtSystem::Innsbruck,
        AqtSystem::Ibex,
    ];

    /// Backend name string.
    pub fn backend_name(&self) -> &'static str {
        match self {
            AqtSystem::Simulator => "aqt_qasm_simulator",
            AqtSystem::SimulatorNoise1 => "aqt_qasm_simulator_noise_1",
            AqtSystem::Innsbruck => "aqt_innsbruck",
            AqtSystem::Ibex => "aqt_imst_ibex",
        }
    }

    /// Number of qubits for this system.
    pub fn num_qubits(&self) -> u32 {
        match self {
            AqtSystem::Simulator | AqtSystem::SimulatorNoise1 => 11,
            AqtSystem::Innsbruck => 4,
            AqtSystem::Ibex => 10,
        }
    }

    /// Simulator or device.
    pub fn backend_type(&self) -> BackendType {
        match self {
            AqtSystem::Simulator | AqtSystem::SimulatorNoise1 => BackendType::Simulator,
            AqtSystem::Innsbruck | AqtSystem::Ibex => BackendType::Device,
        }
    }

    /// Gateway endpoint.
    pub fn url(&self) -> String {
        match self {
            AqtSystem::Simulator => format!("{GATEWAY_URL}/sim/"),
            AqtSystem::SimulatorNoise1 => format!("{GATEWAY_URL}/sim/noise-model-1"),
            AqtSystem::Innsbruck => format!("{GATEWAY_URL}/lint"),
            AqtSystem::Ibex => format!("{GATEWAY_URL}/Ibex"),
        }
    }

    fn description(&self) -> &'static str {
        match self {
            AqtSystem::Simulator => "AQT trapped-ion device simulator",
            AqtSystem::SimulatorNoise1 => "AQT trapped-ion device simulator with noise model 1",
            AqtSystem::Innsbruck | AqtSystem::Ibex => "AQT trapped-ion device",
        }
    }

    fn basis_gates(&self) -> &'static [&'static str] {
        match self {
            AqtSystem::Simulator | AqtSystem::SimulatorNoise1 => &["rx", "ry", "rz", "r", "rxx"],
            AqtSystem::Innsbruck => &["rx", "ry", "rxx"],
            AqtSystem::Ibex => &["rx", "ry", "rxx", "ms"],
        }
    }

    /// Configuration descriptor for this system.
    pub fn configuration(&self) -> BackendConfiguration {
        BackendConfiguration {
            backend_name: self.backend_name().to_string(),
            backend_version: "0.0.1".to_string(),
            url: self.url(),
            simulator: self.backend_type() == BackendType::Simulator,
            local: false,
            coupling_map: None,
            description: self.description().to_string(),
            basis_gates: self.basis_gates().iter().map(|g| g.to_string()).collect(),
            memory: false,
            n_qubits: self.num_qubits(),
            conditional: false,
            max_shots: GATEWAY_MAX_SHOTS,
            max_experiments: 1,
            open_pulse: false,
        }
    }
}

/// A backend reachable through the AQT gateway.
pub struct AqtBackend {
    system: AqtSystem,
    configuration: BackendConfiguration,
    provider: Weak<ProviderContext>,
}

impl AqtBackend {
    /// Create a backend for `system` owned by `provider`.
    pub fn new(system: AqtSystem, provider: Weak<ProviderContext>) -> Self {
        Self {
            system,
            configuration: system.configuration(),
            provider,
        }
    }
}

impl std::fmt::Debug for AqtBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AqtBackend")
            .field("name", &self.configuration.backend_name)
            .field("system", &self.system)
            .finish()
    }
}

impl QuantumBackend for AqtBackend {
    fn name(&self) -> &str {
        &self.configuration.backend_name
    }

    fn backend_type(&self) -> BackendType {
        self.system.backend_type()
    }

    fn configuration(&self) -> &BackendConfiguration {
        &self.configuration
    }

    fn provider(&self) -> Option<Arc<ProviderContext>> {
        self.provider.upgrade()
    }
}

/// Build the fixed backend catalog, in order.
pub fn catalog(provider: &Weak<ProviderContext>) -> Vec<Arc<dyn QuantumBackend>> {
    AqtSystem::ALL
        .iter()
        .map(|&system| Arc::new(AqtBackend::new(system, provider.clone())) as Arc<dyn QuantumBackend>)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::RunOptions;
    use crate::test_utils::test_context;

    #[test]
    fn test_catalog_order_and_names() {
        let names: Vec<String> = catalog(&Weak::new())
            .iter()
            .map(|b| b.name().to_string())
            .collect();
        assert_eq!(
            names,
            vec![
                "aqt_qasm_simulator",
                "aqt_qasm_simulator_noise_1",
                "aqt_innsbruck",
                "aqt_imst_ibex",
            ]
        );
    }

    #[test]
    fn test_system_types() {
        assert_eq!(AqtSystem::Simulator.backend_type(), BackendType::Simulator);
        assert_eq!(AqtSystem::SimulatorNoise1.backend_type(), BackendType::Simulator);
        assert_eq!(AqtSystem::Innsbruck.backend_type(), BackendType::Device);
        assert_eq!(AqtSystem::Ibex.backend_type(), BackendType::Device);
    }

    #[test]
    fn test_configuration_matches_system() {
        for system in AqtSystem::ALL {
            let config = system.configuration();
            assert_eq!(config.backend_name, system.backend_name());
            assert_eq!(config.n_qubits, system.num_qubits());
            assert_eq!(config.simulator, system.backend_type() == BackendType::Simulator);
            assert_eq!(config.max_shots, 200);
            assert_eq!(config.max_experiments, 1);
            assert!(config.url.starts_with("https://gateway.aqt.eu/marmot"));
        }
    }

    #[test]
    fn test_basis_gates() {
        let sim = AqtSystem::Simulator.configuration();
        assert!(sim.supports_gate("rz"));
        assert!(sim.supports_gate("rxx"));
        assert!(!sim.supports_gate("ms"));

        let ibex = AqtSystem::Ibex.configuration();
        assert!(ibex.supports_gate("ms"));
        assert!(!ibex.supports_gate("rz"));
    }

    #[test]
    fn test_backend_reaches_live_provider() {
        let context = test_context();
        let backend = AqtBackend::new(AqtSystem::Innsbruck, Arc::downgrade(&context));

        let provider = backend.provider().expect("provider is alive");
        assert!(Arc::ptr_eq(&provider, &context));
        assert_eq!(provider.name(), "aqt_provider");
    }

    #[test]
    fn test_backend_does_not_keep_provider_alive() {
        let context = test_context();
        let backend = AqtBackend::new(AqtSystem::Simulator, Arc::downgrade(&context));
        drop(context);
        assert!(backend.provider().is_none());
    }

    #[test]
    fn test_default_options_are_valid() {
        let backend = AqtBackend::new(AqtSystem::Simulator, Weak::new());
        let options = backend.default_options();
        assert_eq!(options.shots, 100);
        assert!(backend.validate_options(&options).is_ok());
        assert_eq!(backend.max_circuits(), 1);
    }

    #[test]
    fn test_validate_options_rejects_too_many_shots() {
        let backend = AqtBackend::new(AqtSystem::Ibex, Weak::new());
        let options = RunOptions {
            shots: 201,
            ..Default::default()
        };
        assert!(backend.validate_options(&options).is_err());

        let options = RunOptions {
            shots: 0,
            ..Default::default()
        };
        assert!(backend.validate_options(&options).is_err());
    }

    #[test]
    fn test_validate_options_rejects_bad_query_period() {
        let backend = AqtBackend::new(AqtSystem::Simulator, Weak::new());
        let options = RunOptions {
            query_period_seconds: 0.0,
            ..Default::default()
        };
        assert!(backend.validate_options(&options).is_err());
    }
}
