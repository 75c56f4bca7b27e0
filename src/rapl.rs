use std::fs;
use std::io;
use std::path::Path;

use crate::constants::{ENERGY_COUNTER_FILE, POWERCAP_BASE_PATH, RAPL_DOMAIN_PREFIX};

/// Reads every RAPL domain counter under the given powercap root
///
/// Domains are re-enumerated on each call. Entries whose name does not
/// carry the vendor prefix, or whose counter file cannot be read, are
/// skipped. Returns an empty vector when the root does not exist. Order
/// follows directory enumeration and is unspecified; only the sum across
/// domains is meaningful.
pub fn read_energy_domains_uj_at(base: &Path) -> Vec<f64> {
	let mut energies = Vec::new();

	let entries = match fs::read_dir(base) {
		Ok(entries) => entries,
		Err(_) => return energies,
	};

	for entry in entries.filter_map(Result::ok) {
		let path = entry.path();
		let name = path.file_name().unwrap_or_default().to_string_lossy();

		if !name.contains(RAPL_DOMAIN_PREFIX) {
			continue;
		}

		if let Ok(uj) = read_counter_uj(&path.join(ENERGY_COUNTER_FILE)) {
			energies.push(uj);
		}
	}

	energies
}

/// RAPL domain counters from the live sysfs tree
pub fn read_energy_domains_uj() -> Vec<f64> {
	read_energy_domains_uj_at(Path::new(POWERCAP_BASE_PATH))
}

/// Sum of all domain counters under the given root, in microjoules
///
/// This is a sum of cumulative counters, not a power figure; turning two
/// sums into a wattage is the caller's job (see [`power_uw_between`]).
pub fn total_energy_uj_at(base: &Path) -> f64 {
	read_energy_domains_uj_at(base).iter().sum()
}

/// Counter sum from the live sysfs tree, in microjoules
pub fn total_energy_uj() -> f64 {
	total_energy_uj_at(Path::new(POWERCAP_BASE_PATH))
}

/// Average power between two counter readings, in microwatts
///
/// Handles a single 32-bit counter wrap between the two readings.
pub const fn power_uw_between(start_uj: u64, end_uj: u64, interval_ms: u64) -> u64 {
	let energy_uj = if end_uj < start_uj {
		// Handle counter wrap-around
		end_uj + 0xFFFF_FFFF - start_uj
	} else {
		end_uj - start_uj
	};

	// µJ/ms = µW
	energy_uj * 1000 / interval_ms
}

fn read_counter_uj(path: &Path) -> io::Result<f64> {
	let contents = fs::read_to_string(path)?;
	contents
		.trim()
		.parse()
		.map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
