//! Solver configuration types.

/// Caller-side knobs a backend applies before solving.
///
/// Every field is optional; `None` leaves the backend default untouched.
#[derive(Debug, Clone, Default)]
pub struct SolverConfig {
    /// Time limit in seconds. `None` means no limit; there is no mid-solve
    /// cancellation beyond this.
    pub time_limit: Option<f64>,
    /// Relative MIP gap tolerance. `None` uses the backend default.
    pub mip_gap: Option<f64>,
    /// Number of threads to use. `None` uses the backend default.
    pub threads: Option<u32>,
    /// Feasibility tolerance. `None` uses the backend default.
    pub tolerance: Option<f64>,
    /// Mirror diagnostic output to the console. `None` uses the backend
    /// default (typically off).
    pub log_to_console: Option<bool>,
}

impl SolverConfig {
    /// Create a new configuration with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the time limit in seconds.
    pub fn with_time_limit(mut self, seconds: f64) -> Self {
        self.time_limit = Some(seconds);
        self
    }

    /// Set the relative MIP gap tolerance.
    pub fn with_mip_gap(mut self, gap: f64) -> Self {
        self.mip_gap = Some(gap);
        self
    }

    /// Set the number of threads.
    pub fn with_threads(mut self, count: u32) -> Self {
        self.threads = Some(count);
        self
    }

    /// Set the feasibility tolerance.
    pub fn with_tolerance(mut self, tol: f64) -> Self {
        self.tolerance = Some(tol);
        self
    }

    /// Enable or disable console logging.
    pub fn with_log_to_console(mut self, enabled: bool) -> Self {
        self.log_to_console = Some(enabled);
        self
    }

    /// Check if this configuration is completely empty (all defaults).
    pub fn is_empty(&self) -> bool {
        self.time_limit.is_none()
            && self.mip_gap.is_none()
            && self.threads.is_none()
            && self.tolerance.is_none()
            && self.log_to_console.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_new_is_empty() {
        assert!(SolverConfig::new().is_empty());
    }

    #[test]
    fn config_builder_pattern() {
        let config = SolverConfig::new()
            .with_time_limit(60.0)
            .with_mip_gap(0.01)
            .with_threads(4)
            .with_tolerance(1e-6)
            .with_log_to_console(true);

        assert!(!config.is_empty());
        assert_eq!(config.time_limit, Some(60.0));
        assert_eq!(config.mip_gap, Some(0.01));
        assert_eq!(config.threads, Some(4));
        assert_eq!(config.tolerance, Some(1e-6));
        assert_eq!(config.log_to_console, Some(true));
    }

    #[test]
    fn config_partial_is_not_empty() {
        let config = SolverConfig::new().with_time_limit(30.0);
        assert!(!config.is_empty());
        assert_eq!(config.mip_gap, None);
    }
}
