use crate::provider::TelemetryProvider;

/// Accumulates per-iteration telemetry for a benchmark run
///
/// Call [`sample`](Self::sample) once per timed iteration. The summary is
/// the pair of counters benchmark drivers attach to a run: the mean of the
/// per-iteration power estimates and the last observed resident set size.
#[derive(Debug)]
pub struct TelemetryRecorder {
	provider: Box<dyn TelemetryProvider>,
	active_cores: f64,
	power_sum_watts: f64,
	samples: usize,
	last_rss_kb: u64,
}

impl TelemetryRecorder {
	/// Recorder assuming a single busy core
	pub fn new(provider: Box<dyn TelemetryProvider>) -> Self {
		Self::with_active_cores(provider, 1.0)
	}

	/// Recorder assuming a given number of busy cores for the power model
	pub fn with_active_cores(provider: Box<dyn TelemetryProvider>, active_cores: f64) -> Self {
		Self {
			provider,
			active_cores,
			power_sum_watts: 0.0,
			samples: 0,
			last_rss_kb: 0,
		}
	}

	/// Recorder assuming every host core is busy
	pub fn saturating_host(provider: Box<dyn TelemetryProvider>) -> Self {
		Self::with_active_cores(provider, num_cpus::get() as f64)
	}

	/// Takes one sample
	pub fn sample(&mut self) {
		self.power_sum_watts += self.provider.estimated_power_watts(self.active_cores);
		self.samples += 1;
		self.last_rss_kb = self.provider.resident_memory_kb();
	}

	/// Number of samples taken so far
	pub fn samples(&self) -> usize {
		self.samples
	}

	/// Mean of the per-iteration power estimates; 0.0 before any sample
	pub fn average_power_watts(&self) -> f64 {
		if self.samples == 0 {
			return 0.0;
		}
		self.power_sum_watts / self.samples as f64
	}

	/// Resident set size observed by the most recent sample, in kilobytes
	pub fn last_rss_kb(&self) -> u64 {
		self.last_rss_kb
	}

	/// Counter pairs in the shape benchmark reports attach to a run
	pub fn counters(&self) -> Vec<(&'static str, f64)> {
		vec![
			("RSS_kB", self.last_rss_kb as f64),
			("Power_W", self.average_power_watts()),
		]
	}
}

#[cfg(test)]
mod tests {
	use std::sync::atomic::{AtomicUsize, Ordering};

	use super::*;

	/// Returns 4, 5, 6 W on successive power calls and an RSS that grows
	/// with every sample taken.
	#[derive(Debug, Default)]
	struct ScriptedProvider {
		calls: AtomicUsize,
	}

	impl TelemetryProvider for ScriptedProvider {
		fn resident_memory_kb(&self) -> u64 {
			10_000 + self.calls.load(Ordering::Relaxed) as u64 * 100
		}

		fn energy_domains_uj(&self) -> Vec<f64> {
			vec![1000.0, 2500.0]
		}

		fn cpu_frequency_hz(&self) -> u64 {
			1_500_000_000
		}

		fn cpu_core_voltage(&self) -> f64 {
			0.85
		}

		fn estimated_power_watts(&self, _active_cores: f64) -> f64 {
			let call = self.calls.fetch_add(1, Ordering::Relaxed);
			[4.0, 5.0, 6.0][call % 3]
		}

		fn clone_box(&self) -> Box<dyn TelemetryProvider> {
			Box::new(ScriptedProvider::default())
		}
	}

	#[test]
	fn empty_recorder_reports_zeroes() {
		let recorder = TelemetryRecorder::new(Box::new(ScriptedProvider::default()));
		assert_eq!(recorder.samples(), 0);
		assert_eq!(recorder.average_power_watts(), 0.0);
		assert_eq!(recorder.last_rss_kb(), 0);
	}

	#[test]
	fn averages_power_and_keeps_last_rss() {
		let mut recorder = TelemetryRecorder::new(Box::new(ScriptedProvider::default()));

		for _ in 0..3 {
			recorder.sample();
		}

		assert_eq!(recorder.samples(), 3);
		assert!((recorder.average_power_watts() - 5.0).abs() < 1e-9);
		assert_eq!(recorder.last_rss_kb(), 10_300);
	}

	#[test]
	fn counters_match_driver_report_shape() {
		let mut recorder = TelemetryRecorder::new(Box::new(ScriptedProvider::default()));
		recorder.sample();

		let counters = recorder.counters();
		assert_eq!(counters[0], ("RSS_kB", 10_100.0));
		assert_eq!(counters[1], ("Power_W", 4.0));
	}
}
