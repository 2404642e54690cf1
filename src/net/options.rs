use crate::operations::creation::DEFAULT_SEW_TOLERANCE;

/// Tunables for building and folding a net.
#[derive(Debug, Clone, PartialEq)]
pub struct NetOptions {
    /// Distance under which face corners are sewn into one vertex.
    pub sew_tolerance: f64,
    /// Euler characteristic a closed fold is expected to have.
    pub expected_euler: i64,
}

impl Default for NetOptions {
    fn default() -> Self {
        Self {
            sew_tolerance: DEFAULT_SEW_TOLERANCE,
            expected_euler: 2,
        }
    }
}

impl NetOptions {
    #[must_use]
    pub fn with_sew_tolerance(mut self, tolerance: f64) -> Self {
        self.sew_tolerance = tolerance;
        self
    }

    /// Sets the expected `V - E + F` (2 for a sphere, 0 for a torus).
    #[must_use]
    pub fn with_expected_euler(mut self, euler: i64) -> Self {
        self.expected_euler = euler;
        self
    }
}
