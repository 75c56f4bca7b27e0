// Intel RAPL powercap interface
pub const POWERCAP_BASE_PATH: &str = "/sys/class/powercap";
pub const RAPL_DOMAIN_PREFIX: &str = "intel-rapl";
pub const ENERGY_COUNTER_FILE: &str = "energy_uj";

// Per-process memory accounting
pub const STATM_PATH: &str = "/proc/self/statm";

// Firmware clock/voltage query tool (Raspberry Pi family)
pub const CLOCK_QUERY_COMMAND: &str = "vcgencmd";
pub const CLOCK_QUERY_ARGS: [&str; 2] = ["measure_clock", "arm"];
pub const VOLTAGE_QUERY_ARGS: [&str; 2] = ["measure_volts", "core"];

// Analytic power model calibration for the Raspberry Pi 4 board family
pub const PI4_IDLE_WATTS: f64 = 1.2;
pub const PI4_SWITCHING_COEFF: f64 = 3.0e-9;

// Fallback when the kernel cannot report the page size
pub const DEFAULT_PAGE_SIZE_BYTES: u64 = 4096;

// Probe binary settings
pub const SAMPLE_INTERVAL_MS: u64 = 100;
pub const PROBE_ROUNDS: usize = 10;
