use std::io;
use std::process::Command;

use crate::constants::{CLOCK_QUERY_ARGS, CLOCK_QUERY_COMMAND, VOLTAGE_QUERY_ARGS};

/// ARM core clock in hertz, as reported by the given firmware query tool
pub fn try_cpu_frequency_hz_with(command: &str) -> io::Result<u64> {
	let value = query_value(command, &CLOCK_QUERY_ARGS)?;
	value
		.parse()
		.map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Core voltage in volts; the tool reports a trailing `V` unit suffix
pub fn try_cpu_core_voltage_with(command: &str) -> io::Result<f64> {
	let value = query_value(command, &VOLTAGE_QUERY_ARGS)?;
	value
		.trim_end_matches('V')
		.parse()
		.map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Best-effort clock read; 0 when the tool is missing or unparseable
pub fn cpu_frequency_hz() -> u64 {
	try_cpu_frequency_hz_with(CLOCK_QUERY_COMMAND).unwrap_or(0)
}

/// Best-effort voltage read; 0.0 when the tool is missing or unparseable
pub fn cpu_core_voltage() -> f64 {
	try_cpu_core_voltage_with(CLOCK_QUERY_COMMAND).unwrap_or(0.0)
}

/// Runs the query tool and returns the value half of its `label=value` line
///
/// Blocks until the subprocess exits; there is no timeout.
fn query_value(command: &str, args: &[&str]) -> io::Result<String> {
	let output = Command::new(command).args(args).output()?;
	let stdout = String::from_utf8_lossy(&output.stdout);
	let line = stdout.lines().next().unwrap_or("");

	match line.split_once('=') {
		Some((_, value)) => Ok(value.trim().to_string()),
		None => Err(io::Error::new(
			io::ErrorKind::InvalidData,
			format!("unexpected output from {}: {:?}", command, line),
		)),
	}
}

#[cfg(test)]
mod tests {
	use std::fs;
	use std::os::unix::fs::PermissionsExt;

	use super::*;

	fn fake_tool(dir: &tempfile::TempDir, script: &str) -> String {
		let path = dir.path().join("vcgencmd");
		fs::write(&path, script).unwrap();

		let mut perms = fs::metadata(&path).unwrap().permissions();
		perms.set_mode(0o755);
		fs::set_permissions(&path, perms).unwrap();

		path.to_string_lossy().into_owned()
	}

	#[test]
	fn missing_tool_degrades_to_zero() {
		assert_eq!(try_cpu_frequency_hz_with("/nonexistent/vcgencmd").unwrap_or(0), 0);
		assert_eq!(try_cpu_core_voltage_with("/nonexistent/vcgencmd").unwrap_or(0.0), 0.0);
	}

	#[test]
	fn clock_line_parses_to_hertz() {
		let dir = tempfile::tempdir().unwrap();
		let tool = fake_tool(&dir, "#!/bin/sh\necho 'frequency(48)=1500398464'\n");
		assert_eq!(try_cpu_frequency_hz_with(&tool).unwrap(), 1_500_398_464);
	}

	#[test]
	fn voltage_line_strips_unit_suffix() {
		let dir = tempfile::tempdir().unwrap();
		let tool = fake_tool(&dir, "#!/bin/sh\necho 'volt=0.8563V'\n");
		let volts = try_cpu_core_voltage_with(&tool).unwrap();
		assert!((volts - 0.8563).abs() < 1e-9);
	}

	#[test]
	fn output_without_separator_is_an_error() {
		let dir = tempfile::tempdir().unwrap();
		let tool = fake_tool(&dir, "#!/bin/sh\necho 'no separator here'\n");
		assert!(try_cpu_frequency_hz_with(&tool).is_err());
	}

	#[test]
	fn non_numeric_value_is_an_error() {
		let dir = tempfile::tempdir().unwrap();
		let tool = fake_tool(&dir, "#!/bin/sh\necho 'frequency(48)=lots'\n");
		assert!(try_cpu_frequency_hz_with(&tool).is_err());
	}
}
