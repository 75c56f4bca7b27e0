use std::thread;
use std::time::Duration;

use bench_telemetry::constants::{PROBE_ROUNDS, SAMPLE_INTERVAL_MS};
use bench_telemetry::provider::{detect_provider, host_cpu_description};
use bench_telemetry::recorder::TelemetryRecorder;

fn main() {
	let provider = detect_provider();

	println!("{} CPU detected.", host_cpu_description());
	println!("Provider: {:?}", provider);
	println!("Sampling telemetry every {} ms for {} rounds...", SAMPLE_INTERVAL_MS, PROBE_ROUNDS);
	println!();

	let active_cores = num_cpus::get() as f64;
	let mut recorder = TelemetryRecorder::with_active_cores(provider.clone(), active_cores);

	for round in 1..=PROBE_ROUNDS {
		recorder.sample();

		let domains = provider.energy_domains_uj();
		println!(
			"[{:2}] RSS: {:8} kB | energy domains: {} (sum {:14.0} uJ) | power estimate: {:8.2} W",
			round,
			recorder.last_rss_kb(),
			domains.len(),
			domains.iter().sum::<f64>(),
			provider.estimated_power_watts(active_cores),
		);

		thread::sleep(Duration::from_millis(SAMPLE_INTERVAL_MS));
	}

	println!();
	for (name, value) in recorder.counters() {
		println!("{}: {:.2}", name, value);
	}
}
