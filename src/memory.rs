use std::fs;
use std::io;
use std::path::Path;

use crate::constants::{DEFAULT_PAGE_SIZE_BYTES, STATM_PATH};

/// Returns the kernel's page size in bytes
fn page_size_bytes() -> u64 {
	let page = unsafe { libc::sysconf(libc::_SC_PAGESIZE) };
	if page > 0 { page as u64 } else { DEFAULT_PAGE_SIZE_BYTES }
}

/// Reads resident memory from a statm-format file
///
/// The file is expected to start with two whitespace-separated integers:
/// total mapped pages and resident pages. The result is resident pages
/// scaled to kilobytes by the page size.
pub fn try_resident_memory_kb(path: &Path) -> io::Result<u64> {
	let contents = fs::read_to_string(path)?;
	let mut fields = contents.split_whitespace();

	let _total_pages: u64 = fields
		.next()
		.and_then(|f| f.parse().ok())
		.ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, "statm: missing total pages"))?;
	let resident_pages: u64 = fields
		.next()
		.and_then(|f| f.parse().ok())
		.ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, "statm: missing resident pages"))?;

	Ok(resident_pages * (page_size_bytes() / 1024))
}

/// Resident set size of the current process in kilobytes
///
/// Best-effort: returns 0 when the accounting interface is unavailable or
/// malformed, so a benchmark loop can call this unconditionally.
pub fn resident_memory_kb() -> u64 {
	try_resident_memory_kb(Path::new(STATM_PATH)).unwrap_or(0)
}
