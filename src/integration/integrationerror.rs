use thiserror::Error;

use crate::function::realfunction::FunctionCode;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("Riemann sum type is null or empty.")]
    EmptySumType,
    #[error("Riemann sum type '{0}' is not recognized.")]
    UnknownSumType(String),
    #[error("The number of steps must be greater than 0, got {0}.")]
    NonPositiveSteps(i64),
    #[error("Function code {0} not recognized.")]
    UnknownFunction(i64)
}

/// Failures at the engine boundary.
///
/// `InvalidConfiguration` is raised while building an `Integrator` and is not
/// retryable without new input. `DomainError` is raised during `calculate`
/// when a sampled point lies outside the function's domain.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IntegrationError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigurationError),
    #[error("{function} is undefined at x = {x}")]
    DomainError {
        function: FunctionCode,
        x: f64
    }
}

impl IntegrationError {
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(self, IntegrationError::InvalidConfiguration(_))
    }

    pub fn is_domain_error(&self) -> bool {
        matches!(self, IntegrationError::DomainError { .. })
    }
}
