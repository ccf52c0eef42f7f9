use std::fmt;

use crate::function::functiontable;
use crate::integration::integrationerror::{
    ConfigurationError,
    IntegrationError
};

/// A one-argument real function sampled by the summation algorithms.
pub trait RealFunction {
    fn value(&self, x: f64) -> Result<f64, IntegrationError>;
}

/// Identifier of one of the six built-in integrands.
///
/// The discriminant is the code the user types at the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionCode {
    Square = 1,
    Sine = 2,
    Arctangent = 3,
    Cube = 4,
    SquareRoot = 5,
    NaturalLog = 6
}

impl FunctionCode {
    pub const ALL: [FunctionCode; 6] = [
        FunctionCode::Square,
        FunctionCode::Sine,
        FunctionCode::Arctangent,
        FunctionCode::Cube,
        FunctionCode::SquareRoot,
        FunctionCode::NaturalLog
    ];

    pub fn code(&self) -> i64 {
        *self as i64
    }

    pub fn formula(&self) -> &'static str {
        functiontable::entry(*self).formula()
    }
}

impl TryFrom<i64> for FunctionCode {
    type Error = ConfigurationError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        functiontable::FUNCTION_TABLE
            .iter()
            .map(|entry| entry.code())
            .find(|function| function.code() == code)
            .ok_or(ConfigurationError::UnknownFunction(code))
    }
}

impl fmt::Display for FunctionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "f(x) = {}", self.formula())
    }
}

impl RealFunction for FunctionCode {
    fn value(&self, x: f64) -> Result<f64, IntegrationError> {
        functiontable::entry(*self)
            .evaluate(x)
            .ok_or(IntegrationError::DomainError { function: *self, x })
    }
}
