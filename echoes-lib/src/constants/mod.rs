/// Program version, shared with the package manifest
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Upper bound on the number of items a single run accepts
pub const MAX_ITEMS: usize = 100;

/// Progress logging is on unless the caller asks for quiet output
pub const DEBUG_MODE: bool = true;

/// Items processed when the caller supplies none
pub const SAMPLE_ITEMS: [&str; 4] = ["apple", "banana", "cherry", "date"];

pub const PROCESSOR_NAME: &str = "test";

/// Printed in place of the processed line when formatting yields nothing
pub const FAILURE_MESSAGE: &str = "Processing failed!";

#[must_use] 
pub fn sample_items() -> Vec<String> {
    SAMPLE_ITEMS.iter().map(|s| (*s).to_string()).collect()
}
