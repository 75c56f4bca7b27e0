//! Best-effort telemetry sampling for benchmark drivers.
//!
//! The crate produces point-in-time measurements of process memory and host
//! power/energy for use inside timed benchmark loops: resident set size
//! from the kernel's per-process accounting, cumulative RAPL energy
//! counters from the powercap sysfs tree, and an analytic power estimate
//! built from firmware-reported clock and voltage on boards without energy
//! counters.
//!
//! Every sampling operation is stateless and degrades to a zero or empty
//! result when its backing interface is unavailable; nothing here may
//! interrupt a caller's timing loop with an error.

pub mod constants;
pub mod memory;
pub mod power;
pub mod provider;
pub mod rapl;
pub mod recorder;
pub mod vcgencmd;

pub use power::{PowerModel, estimate_power_watts};
pub use provider::{AnalyticProvider, RaplProvider, TelemetryProvider, detect_provider};
pub use recorder::TelemetryRecorder;
