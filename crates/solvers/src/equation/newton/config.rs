use thiserror::Error;

/// Configuration for the Newton-Raphson solver.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Config {
    epsilon: f64,
    max_iters: usize,
}

/// Errors that can occur when validating a Newton-Raphson solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("epsilon must be finite and positive")]
    Epsilon,

    #[error("max_iters must be at least 1")]
    MaxIters,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            epsilon: 1e-4,
            max_iters: 20,
        }
    }
}

impl Config {
    /// Creates a new config.
    ///
    /// `epsilon` bounds the step `|x_{n+1} - x_n|` at which the iteration is
    /// considered converged.
    ///
    /// # Errors
    ///
    /// Returns an error if `epsilon` is not finite and positive, or if
    /// `max_iters` is zero.
    pub fn new(epsilon: f64, max_iters: usize) -> Result<Self, ConfigError> {
        if !epsilon.is_finite() || epsilon <= 0.0 {
            return Err(ConfigError::Epsilon);
        }
        if max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }

        Ok(Self { epsilon, max_iters })
    }

    /// Returns the step tolerance.
    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Returns the maximum number of iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }
}
