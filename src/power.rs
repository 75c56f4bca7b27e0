use crate::constants::{PI4_IDLE_WATTS, PI4_SWITCHING_COEFF};

/// Analytic CPU power model
///
/// `idle_watts` is the board's baseline draw and `switching_coeff` scales
/// the dynamic CMOS switching term `voltage² * frequency * cores`. Both are
/// board-specific calibration data; the formula itself is fixed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerModel {
	pub idle_watts: f64,
	pub switching_coeff: f64,
}

impl PowerModel {
	/// Calibration for the Raspberry Pi 4 board family
	pub const fn raspberry_pi4() -> Self {
		Self {
			idle_watts: PI4_IDLE_WATTS,
			switching_coeff: PI4_SWITCHING_COEFF,
		}
	}

	/// Instantaneous power estimate in watts
	///
	/// Pure arithmetic on caller-supplied inputs; zero or negative values
	/// pass straight through.
	pub fn estimate_watts(&self, voltage: f64, frequency_hz: u64, active_cores: f64) -> f64 {
		self.idle_watts + self.switching_coeff * voltage * voltage * frequency_hz as f64 * active_cores
	}
}

/// Power estimate using the Pi 4 calibration
pub fn estimate_power_watts(voltage: f64, frequency_hz: u64, active_cores: f64) -> f64 {
	PowerModel::raspberry_pi4().estimate_watts(voltage, frequency_hz, active_cores)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn pi4_point_value() {
		// idle 1.2 W plus 3.0e-9 * 1 V² * 1 GHz * 1 core
		let watts = estimate_power_watts(1.0, 1_000_000_000, 1.0);
		assert!((watts - 4.2).abs() < 1e-9);
	}

	#[test]
	fn zero_inputs_fall_back_to_idle_draw() {
		assert_eq!(estimate_power_watts(0.0, 0, 1.0), PI4_IDLE_WATTS);
		assert_eq!(estimate_power_watts(0.85, 1_500_000_000, 0.0), PI4_IDLE_WATTS);
	}

	#[test]
	fn monotone_in_voltage() {
		let model = PowerModel::raspberry_pi4();
		let mut prev = 0.0;

		for step in 1..=10 {
			let watts = model.estimate_watts(0.1 * step as f64, 1_500_000_000, 4.0);
			assert!(watts >= prev);
			prev = watts;
		}
	}

	#[test]
	fn monotone_in_frequency() {
		let model = PowerModel::raspberry_pi4();
		let mut prev = 0.0;

		for freq in [0, 600_000_000, 1_000_000_000, 1_500_000_000, 1_800_000_000] {
			let watts = model.estimate_watts(0.85, freq, 4.0);
			assert!(watts >= prev);
			prev = watts;
		}
	}

	#[test]
	fn custom_calibration_changes_the_baseline() {
		let model = PowerModel {
			idle_watts: 0.4,
			switching_coeff: 1.0e-9,
		};
		assert_eq!(model.estimate_watts(0.0, 0, 1.0), 0.4);
	}
}
