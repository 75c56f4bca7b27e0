use std::path::PathBuf;

use crate::constants::POWERCAP_BASE_PATH;
use crate::memory;
use crate::rapl;

use super::TelemetryProvider;

/// Powercap-backed provider for hosts with RAPL energy counters
///
/// Clock frequency and core voltage have no powercap equivalent and read
/// as zero. The per-iteration power figure is the raw counter sum across
/// domains; note that this is microjoules since domain reset, not watts
/// (see [`rapl::total_energy_uj_at`]).
#[derive(Debug, Clone)]
pub struct RaplProvider {
	base: PathBuf,
}

impl RaplProvider {
	pub fn new() -> Self {
		Self::with_base(POWERCAP_BASE_PATH)
	}

	/// Provider rooted at an alternate powercap tree
	pub fn with_base(base: impl Into<PathBuf>) -> Self {
		Self { base: base.into() }
	}
}

impl Default for RaplProvider {
	fn default() -> Self {
		Self::new()
	}
}

impl TelemetryProvider for RaplProvider {
	fn resident_memory_kb(&self) -> u64 {
		memory::resident_memory_kb()
	}

	fn energy_domains_uj(&self) -> Vec<f64> {
		rapl::read_energy_domains_uj_at(&self.base)
	}

	fn cpu_frequency_hz(&self) -> u64 {
		0
	}

	fn cpu_core_voltage(&self) -> f64 {
		0.0
	}

	fn estimated_power_watts(&self, _active_cores: f64) -> f64 {
		rapl::total_energy_uj_at(&self.base)
	}

	fn clone_box(&self) -> Box<dyn TelemetryProvider> {
		Box::new(self.clone())
	}
}
