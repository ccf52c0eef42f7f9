use log::{
    debug,
    trace
};

use crate::function::realfunction::FunctionCode;
use crate::integration::integrationerror::{
    ConfigurationError,
    IntegrationError
};
use crate::integration::sumtype::SumType;

/// A validated Riemann-sum configuration.
///
/// Fields never change after construction, so one instance can be reused for
/// any number of `calculate` calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Integrator {
    sum_type: SumType,
    num_steps: u64,
    function: FunctionCode
}

impl Integrator {
    /// Builds an integrator from the raw codes typed at the shell:
    /// a sum-type letter (`l`, `r`, `m`, `t`), a step count and a function
    /// code in `1..=6`.
    pub fn new(sum_type: &str, num_steps: i64, function_code: i64) -> Result<Integrator, IntegrationError> {
        let sum_type: SumType = sum_type.parse()?;
        if num_steps <= 0 {
            return Err(ConfigurationError::NonPositiveSteps(num_steps).into());
        }
        let function = FunctionCode::try_from(function_code)?;
        Ok(Integrator { sum_type, num_steps: num_steps as u64, function })
    }

    pub fn from_parts(sum_type: SumType, num_steps: u64, function: FunctionCode) -> Result<Integrator, IntegrationError> {
        if num_steps == 0 {
            return Err(ConfigurationError::NonPositiveSteps(0).into());
        }
        Ok(Integrator { sum_type, num_steps, function })
    }

    pub fn sum_type(&self) -> SumType {
        self.sum_type
    }

    pub fn num_steps(&self) -> u64 {
        self.num_steps
    }

    pub fn function(&self) -> FunctionCode {
        self.function
    }

    /// Approximates the integral of the configured function between the two
    /// bounds. Bounds given in descending order are swapped first.
    pub fn calculate(&self, left: f64, right: f64) -> Result<f64, IntegrationError> {
        let (left, right) = if left > right {
            trace!("swapping bounds [{}, {}]", left, right);
            (right, left)
        } else {
            (left, right)
        };
        let area = self.sum_type.sum(&self.function, left, right, self.num_steps)?;
        debug!(
            "{} of {} over [{}, {}] with {} steps = {}",
            self.sum_type, self.function, left, right, self.num_steps, area
        );
        Ok(area)
    }
}
