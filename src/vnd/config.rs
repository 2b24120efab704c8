//! VND configuration.

/// Configuration parameters for Variable Neighbourhood Descent.
///
/// # Examples
///
/// ```
/// use dckp_solver::vnd::VndConfig;
///
/// let config = VndConfig::default().with_max_iterations(200);
/// assert_eq!(config.max_iterations, 200);
/// ```
#[derive(Debug, Clone)]
pub struct VndConfig {
    /// Maximum number of neighbourhood explorations (both improving and
    /// escalating steps count).
    pub max_iterations: usize,
}

impl Default for VndConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
        }
    }
}

impl VndConfig {
    /// Sets the iteration cap.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }
}
