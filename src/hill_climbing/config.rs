//! Hill climbing configuration.

/// Configuration parameters for hill climbing.
///
/// # Examples
///
/// ```
/// use dckp_solver::hill_climbing::HillClimbingConfig;
///
/// let config = HillClimbingConfig::default().with_max_iterations(50);
/// assert_eq!(config.max_iterations, 50);
/// ```
#[derive(Debug, Clone)]
pub struct HillClimbingConfig {
    /// Maximum number of accepted moves before stopping.
    pub max_iterations: usize,
}

impl Default for HillClimbingConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
        }
    }
}

impl HillClimbingConfig {
    /// Sets the iteration cap.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }
}
