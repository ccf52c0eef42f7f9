use crate::function::realfunction::RealFunction;
use crate::integration::integrationerror::IntegrationError;

// All four sums assume left <= right and num_steps > 0; the Integrator
// guarantees both before dispatching here.

fn segment_width(left: f64, right: f64, num_steps: u64) -> f64 {
    (right - left) / num_steps as f64
}

/// Σ f(left + (i + offset)·w)·w over i = 0..num_steps.
fn sampled_sum<F>(function: &F, left: f64, right: f64, num_steps: u64, offset: f64) -> Result<f64, IntegrationError>
where
    F: RealFunction + ?Sized,
{
    let segment_size = segment_width(left, right, num_steps);
    let mut area = 0.0;
    for i in 0..num_steps {
        let x = left + (i as f64 + offset) * segment_size;
        area += function.value(x)? * segment_size;
    }
    Ok(area)
}

pub fn left_hand_sum<F>(function: &F, left: f64, right: f64, num_steps: u64) -> Result<f64, IntegrationError>
where
    F: RealFunction + ?Sized,
{
    sampled_sum(function, left, right, num_steps, 0.0)
}

pub fn right_hand_sum<F>(function: &F, left: f64, right: f64, num_steps: u64) -> Result<f64, IntegrationError>
where
    F: RealFunction + ?Sized,
{
    sampled_sum(function, left, right, num_steps, 1.0)
}

pub fn midpoint_sum<F>(function: &F, left: f64, right: f64, num_steps: u64) -> Result<f64, IntegrationError>
where
    F: RealFunction + ?Sized,
{
    sampled_sum(function, left, right, num_steps, 0.5)
}

/// Each endpoint is evaluated once; the right value of segment i is reused
/// as the left value of segment i + 1.
pub fn trapezoid_sum<F>(function: &F, left: f64, right: f64, num_steps: u64) -> Result<f64, IntegrationError>
where
    F: RealFunction + ?Sized,
{
    let segment_size = segment_width(left, right, num_steps);
    let mut lower = function.value(left)?;
    let mut area = 0.0;
    for i in 0..num_steps {
        let upper = function.value(left + (i + 1) as f64 * segment_size)?;
        area += (lower + upper) / 2.0 * segment_size;
        lower = upper;
    }
    Ok(area)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::function::realfunction::FunctionCode;
    use approx::assert_abs_diff_eq;

    struct CountingFunction {
        calls: Cell<u64>
    }

    impl RealFunction for CountingFunction {
        fn value(&self, x: f64) -> Result<f64, IntegrationError> {
            self.calls.set(self.calls.get() + 1);
            Ok(x)
        }
    }

    #[test]
    fn square_on_zero_two_with_four_steps() {
        let f = FunctionCode::Square;
        assert_abs_diff_eq!(left_hand_sum(&f, 0.0, 2.0, 4).unwrap(), 1.75, epsilon = 1e-12);
        assert_abs_diff_eq!(right_hand_sum(&f, 0.0, 2.0, 4).unwrap(), 3.75, epsilon = 1e-12);
        assert_abs_diff_eq!(midpoint_sum(&f, 0.0, 2.0, 4).unwrap(), 2.625, epsilon = 1e-12);
        assert_abs_diff_eq!(trapezoid_sum(&f, 0.0, 2.0, 4).unwrap(), 2.75, epsilon = 1e-12);
    }

    #[test]
    fn rectangle_sums_evaluate_once_per_step() {
        let f = CountingFunction { calls: Cell::new(0) };
        let _ = left_hand_sum(&f, 0.0, 1.0, 10).unwrap();
        assert_eq!(f.calls.get(), 10);
        f.calls.set(0);
        let _ = right_hand_sum(&f, 0.0, 1.0, 10).unwrap();
        assert_eq!(f.calls.get(), 10);
        f.calls.set(0);
        let _ = midpoint_sum(&f, 0.0, 1.0, 10).unwrap();
        assert_eq!(f.calls.get(), 10);
    }

    #[test]
    fn trapezoid_evaluates_each_endpoint_once() {
        let f = CountingFunction { calls: Cell::new(0) };
        let area = trapezoid_sum(&f, 0.0, 1.0, 10).unwrap();
        assert_eq!(f.calls.get(), 11);
        assert_abs_diff_eq!(area, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn zero_width_interval_has_zero_area() {
        let f = FunctionCode::Cube;
        assert_eq!(left_hand_sum(&f, 1.5, 1.5, 8).unwrap(), 0.0);
        assert_eq!(trapezoid_sum(&f, 1.5, 1.5, 8).unwrap(), 0.0);
    }

    #[test]
    fn first_domain_violation_stops_the_sum() {
        let error = left_hand_sum(&FunctionCode::SquareRoot, -2.0, 2.0, 4).unwrap_err();
        assert_eq!(error, IntegrationError::DomainError { function: FunctionCode::SquareRoot, x: -2.0 });
    }
}
