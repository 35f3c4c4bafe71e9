//! Error types for the hybrid switcher.

use thiserror::Error;

/// Errors surfaced by configuration and step execution.
///
/// Both variants are fatal for the run: the caller must abort rather than
/// continue stepping.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HybridError {
    /// The instance has no constraints, so the mean penalty is undefined.
    #[error("degenerate search instance: constraint count is {constraint_count}")]
    DegenerateInput { constraint_count: usize },

    /// A tunable lies outside its documented domain.
    #[error("parameter `{parameter}` out of range: got {value}, expected {expected}")]
    ConfigurationRange {
        parameter: &'static str,
        value: f64,
        expected: &'static str,
    },
}

impl HybridError {
    pub(crate) fn out_of_range(
        parameter: &'static str,
        value: f64,
        expected: &'static str,
    ) -> Self {
        HybridError::ConfigurationRange {
            parameter,
            value,
            expected,
        }
    }
}
