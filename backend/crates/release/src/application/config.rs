//! Application Configuration
//!
//! Configuration for the release approval workflow.

/// Release workflow configuration
#[derive(Debug, Clone)]
pub struct ReleaseConfig {
    /// Whether approval requires all data imports to have completed
    pub require_data_ready: bool,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        Self {
            require_data_ready: true,
        }
    }
}
