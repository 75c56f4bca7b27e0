pub mod analytic;
pub mod rapl;

use std::fmt::Debug;
use std::fs;
use std::path::Path;

use crate::constants::POWERCAP_BASE_PATH;

pub use analytic::AnalyticProvider;
pub use rapl::RaplProvider;

/// Source of point-in-time telemetry readings
///
/// Every method is a stateless best-effort read: an unavailable interface
/// degrades to a zero/empty result instead of erroring, so a benchmark loop
/// can call these unconditionally. Callers that need to tell "measured
/// zero" from "unavailable" should use the fallible `try_*` functions in
/// the backing modules instead.
pub trait TelemetryProvider: Debug + Send + Sync {
	/// Resident set size of the current process in kilobytes
	fn resident_memory_kb(&self) -> u64;

	/// Cumulative energy counters, one per accounting domain, in microjoules
	fn energy_domains_uj(&self) -> Vec<f64>;

	/// CPU clock in hertz, 0 when unknown
	fn cpu_frequency_hz(&self) -> u64;

	/// CPU core voltage in volts, 0.0 when unknown
	fn cpu_core_voltage(&self) -> f64;

	/// Per-iteration power figure for benchmark counters
	fn estimated_power_watts(&self, active_cores: f64) -> f64;

	/// Clone implementation for trait objects
	fn clone_box(&self) -> Box<dyn TelemetryProvider>;
}

impl Clone for Box<dyn TelemetryProvider> {
	fn clone(&self) -> Self {
		self.clone_box()
	}
}

/// Picks the provider matching the host hardware
///
/// Hosts exposing the RAPL powercap tree get counter-backed readings;
/// everything else falls back to the firmware-query analytic model.
pub fn detect_provider() -> Box<dyn TelemetryProvider> {
	if Path::new(POWERCAP_BASE_PATH).exists() {
		Box::new(RaplProvider::new())
	} else {
		Box::new(AnalyticProvider::new())
	}
}

/// Short CPU vendor description for the probe binary's banner
pub fn host_cpu_description() -> &'static str {
	let cpuinfo = fs::read_to_string("/proc/cpuinfo").unwrap_or_default();
	if cpuinfo.contains("GenuineIntel") {
		"Intel"
	} else if cpuinfo.contains("AuthenticAMD") {
		"AMD"
	} else if cpuinfo.contains("Raspberry Pi") || cpuinfo.contains("BCM") {
		"Broadcom (Raspberry Pi)"
	} else {
		"Unknown"
	}
}
