use std::fmt;
use std::str::FromStr;

use crate::function::realfunction::RealFunction;
use crate::integration::integrationerror::{
    ConfigurationError,
    IntegrationError
};
use crate::integration::riemannsum::{
    left_hand_sum,
    midpoint_sum,
    right_hand_sum,
    trapezoid_sum
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SumType {
    Left,
    Right,
    Midpoint,
    Trapezoid
}

impl SumType {
    pub const ALL: [SumType; 4] = [
        SumType::Left,
        SumType::Right,
        SumType::Midpoint,
        SumType::Trapezoid
    ];

    /// Single-letter code used by the shell and by preset files.
    pub fn to_char(&self) -> char {
        match self {
            SumType::Left => 'l',
            SumType::Right => 'r',
            SumType::Midpoint => 'm',
            SumType::Trapezoid => 't'
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SumType::Left => "left hand Riemann sum",
            SumType::Right => "right hand Riemann sum",
            SumType::Midpoint => "midpoint Riemann sum",
            SumType::Trapezoid => "trapezoid Riemann sum"
        }
    }

    pub fn parse(sum_type_str: &str) -> Result<SumType, ConfigurationError> {
        match sum_type_str {
            "" => Err(ConfigurationError::EmptySumType),
            "l" => Ok(SumType::Left),
            "r" => Ok(SumType::Right),
            "m" => Ok(SumType::Midpoint),
            "t" => Ok(SumType::Trapezoid),
            _ => Err(ConfigurationError::UnknownSumType(sum_type_str.to_owned()))
        }
    }

    pub fn sum<F>(&self, function: &F, left: f64, right: f64, num_steps: u64) -> Result<f64, IntegrationError>
    where
        F: RealFunction + ?Sized,
    {
        match self {
            SumType::Left => left_hand_sum(function, left, right, num_steps),
            SumType::Right => right_hand_sum(function, left, right, num_steps),
            SumType::Midpoint => midpoint_sum(function, left, right, num_steps),
            SumType::Trapezoid => trapezoid_sum(function, left, right, num_steps)
        }
    }
}

impl FromStr for SumType {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SumType::parse(s)
    }
}

impl fmt::Display for SumType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}
