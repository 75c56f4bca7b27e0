use crate::constants::CLOCK_QUERY_COMMAND;
use crate::memory;
use crate::power::PowerModel;
use crate::vcgencmd;

use super::TelemetryProvider;

/// Firmware-query provider for boards without RAPL counters
///
/// Clock and voltage come from the platform's query tool; the power figure
/// is the closed-form model applied to them. When the tool is unreachable
/// the readings collapse to zero and the estimate degrades to the model's
/// idle baseline.
#[derive(Debug, Clone)]
pub struct AnalyticProvider {
	command: String,
	model: PowerModel,
}

impl AnalyticProvider {
	pub fn new() -> Self {
		Self::with_command(CLOCK_QUERY_COMMAND)
	}

	/// Provider using an alternate query tool
	pub fn with_command(command: impl Into<String>) -> Self {
		Self {
			command: command.into(),
			model: PowerModel::raspberry_pi4(),
		}
	}

	/// Replaces the board calibration
	pub fn with_model(mut self, model: PowerModel) -> Self {
		self.model = model;
		self
	}
}

impl Default for AnalyticProvider {
	fn default() -> Self {
		Self::new()
	}
}

impl TelemetryProvider for AnalyticProvider {
	fn resident_memory_kb(&self) -> u64 {
		memory::resident_memory_kb()
	}

	fn energy_domains_uj(&self) -> Vec<f64> {
		Vec::new()
	}

	fn cpu_frequency_hz(&self) -> u64 {
		vcgencmd::try_cpu_frequency_hz_with(&self.command).unwrap_or(0)
	}

	fn cpu_core_voltage(&self) -> f64 {
		vcgencmd::try_cpu_core_voltage_with(&self.command).unwrap_or(0.0)
	}

	fn estimated_power_watts(&self, active_cores: f64) -> f64 {
		let frequency_hz = self.cpu_frequency_hz();
		let voltage = self.cpu_core_voltage();
		self.model.estimate_watts(voltage, frequency_hz, active_cores)
	}

	fn clone_box(&self) -> Box<dyn TelemetryProvider> {
		Box::new(self.clone())
	}
}
