//! Application Configuration
//!
//! Configuration for the data file import pipeline.

/// Import pipeline configuration
#[derive(Debug, Clone)]
pub struct ImportConfig {
    /// Raw payload size cap in bytes
    pub max_payload_bytes: usize,
    /// Parsed row cap per data file
    pub max_rows: usize,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            max_payload_bytes: 50 * 1024 * 1024,
            max_rows: 1_000_000,
        }
    }
}

impl ImportConfig {
    /// Create config with explicit caps
    pub fn with_caps(max_payload_bytes: usize, max_rows: usize) -> Self {
        Self {
            max_payload_bytes,
            max_rows,
        }
    }
}
