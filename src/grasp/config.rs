//! GRASP configuration.

/// Configuration parameters for GRASP multi-start construction.
///
/// # Examples
///
/// ```
/// use dckp_solver::grasp::GraspConfig;
///
/// let config = GraspConfig::default()
///     .with_iterations(200)
///     .with_alpha(0.5)
///     .with_seed(7);
/// assert_eq!(config.iterations, 200);
/// assert_eq!(config.alpha, 0.5);
/// ```
#[derive(Debug, Clone)]
pub struct GraspConfig {
    /// Number of independent constructions in a multi-start run.
    pub iterations: usize,
    /// RCL greediness in `[0, 1]`: `0` keeps only top-scoring
    /// candidates, `1` admits every feasible candidate.
    pub alpha: f64,
    /// Seed for the Mersenne Twister engine.
    pub seed: u32,
}

impl Default for GraspConfig {
    fn default() -> Self {
        Self {
            iterations: 100,
            alpha: 0.3,
            seed: 42,
        }
    }
}

impl GraspConfig {
    /// Sets the number of multi-start iterations.
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    /// Sets the RCL threshold parameter.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Checks parameter ranges.
    pub fn validate(&self) -> Result<(), String> {
        if self.iterations == 0 {
            return Err("iterations must be positive".into());
        }
        if !(0.0..=1.0).contains(&self.alpha) {
            return Err(format!("alpha must be in [0, 1], got {}", self.alpha));
        }
        Ok(())
    }
}
