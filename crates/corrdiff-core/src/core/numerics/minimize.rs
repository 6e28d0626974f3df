use super::NumericError;
use argmin::core::{CostFunction, Error, Executor, State};
use argmin::solver::brent::BrentOpt;
use tracing::debug;

pub const DEFAULT_S_LOWER: f64 = 1e-6;
pub const DEFAULT_S_UPPER: f64 = 1.0;
pub const DEFAULT_PRECISION_BITS: u32 = 30;

const MAX_ITERATIONS: u64 = 500;
const MAX_PRECISION_BITS: u32 = f64::MANTISSA_DIGITS - 1;

/// Location and value of a bounded scalar minimum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Minimum {
    pub location: f64,
    pub value: f64,
    pub iterations: u64,
}

struct ScalarObjective<F> {
    f: F,
}

impl<F> CostFunction for ScalarObjective<F>
where
    F: Fn(f64) -> f64,
{
    type Param = f64;
    type Output = f64;

    fn cost(&self, x: &Self::Param) -> Result<Self::Output, Error> {
        let value = (self.f)(*x);
        if !value.is_finite() {
            return Err(NumericError::Minimization(format!(
                "objective is not finite at {}: {}",
                x, value
            ))
            .into());
        }
        Ok(value)
    }
}

/// Relative tolerance corresponding to `bits` bits of mantissa agreement.
#[inline]
pub fn tolerance_from_bits(bits: u32) -> f64 {
    2f64.powi(1 - bits as i32)
}

/// Locates the minimum of `f` on `[lower, upper]` with Brent's method.
///
/// Combines golden-section search with parabolic interpolation and never evaluates
/// `f` outside the bracket. Converges until the abscissa agrees to `precision_bits`
/// bits, or stops after a fixed iteration budget returning the best point seen.
///
/// # Errors
///
/// - [`NumericError::InvalidInput`] for an empty or non-finite bracket, or a precision
///   outside `1..=52` bits.
/// - [`NumericError::Minimization`] if `f` returns a non-finite value or the solver fails.
pub fn find_minimum<F>(
    f: F,
    lower: f64,
    upper: f64,
    precision_bits: u32,
) -> Result<Minimum, NumericError>
where
    F: Fn(f64) -> f64,
{
    if !lower.is_finite() || !upper.is_finite() || lower >= upper {
        return Err(NumericError::InvalidInput(format!(
            "invalid search interval [{}, {}]",
            lower, upper
        )));
    }
    if precision_bits == 0 || precision_bits > MAX_PRECISION_BITS {
        return Err(NumericError::InvalidInput(format!(
            "precision of {} bits is outside 1..={}",
            precision_bits, MAX_PRECISION_BITS
        )));
    }

    let relative = tolerance_from_bits(precision_bits);
    let absolute = relative * lower.abs().max(f64::EPSILON);
    let solver = BrentOpt::new(lower, upper).set_tolerance(relative, absolute);

    let result = Executor::new(ScalarObjective { f }, solver)
        .configure(|state| state.max_iters(MAX_ITERATIONS))
        .run()
        .map_err(|e| match e.downcast::<NumericError>() {
            Ok(numeric) => numeric,
            Err(other) => NumericError::Minimization(other.to_string()),
        })?;

    let state = result.state();
    let location = *state
        .get_best_param()
        .ok_or_else(|| NumericError::Minimization("solver returned no parameter".into()))?;
    let minimum = Minimum {
        location,
        value: state.get_best_cost(),
        iterations: state.get_iter(),
    };
    debug!(
        "Brent search on [{:e}, {:e}] finished after {} iterations at x = {:e} (f = {:e})",
        lower, upper, minimum.iterations, minimum.location, minimum.value
    );
    Ok(minimum)
}

/// Location of the characteristic-function minimum on `[s_lower, s_upper]`.
///
/// Shorthand for [`find_minimum`] when only the abscissa is needed.
pub fn find_s_min<F>(
    denominator: F,
    s_lower: f64,
    s_upper: f64,
    precision_bits: u32,
) -> Result<f64, NumericError>
where
    F: Fn(f64) -> f64,
{
    find_minimum(denominator, s_lower, s_upper, precision_bits).map(|m| m.location)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_minimum_of_shifted_quadratic() {
        let minimum =
            find_minimum(|s| (s - 0.3).powi(2), DEFAULT_S_LOWER, DEFAULT_S_UPPER, 30).unwrap();
        assert!((minimum.location - 0.3).abs() < 1e-6);
        assert!(minimum.value.abs() < 1e-12);
        assert!(minimum.iterations > 0);
    }

    #[test]
    fn find_s_min_returns_only_location() {
        let s_min = find_s_min(|s| (s - 0.3).powi(2), DEFAULT_S_LOWER, DEFAULT_S_UPPER, 30).unwrap();
        assert!((s_min - 0.3).abs() < 1e-6);
    }

    #[test]
    fn finds_interior_minimum_of_non_polynomial_function() {
        // x + 1/x has its minimum at x = 1.
        let minimum = find_minimum(|x| x + 1.0 / x, 0.1, 5.0, 30).unwrap();
        assert!((minimum.location - 1.0).abs() < 1e-5);
        assert!((minimum.value - 2.0).abs() < 1e-9);
    }

    #[test]
    fn monotone_function_converges_to_bracket_edge() {
        let minimum = find_minimum(|x| x, 0.0, 1.0, 30).unwrap();
        assert!(minimum.location < 1e-4);
    }

    #[test]
    fn tolerance_from_bits_matches_power_of_two() {
        assert_eq!(tolerance_from_bits(1), 1.0);
        assert_eq!(tolerance_from_bits(30), 2f64.powi(-29));
    }

    #[test]
    fn rejects_empty_interval() {
        let result = find_minimum(|x| x * x, 1.0, 1.0, 30);
        assert!(matches!(result, Err(NumericError::InvalidInput(_))));
    }

    #[test]
    fn rejects_out_of_range_precision() {
        assert!(matches!(
            find_minimum(|x| x * x, 0.0, 1.0, 0),
            Err(NumericError::InvalidInput(_))
        ));
        assert!(matches!(
            find_minimum(|x| x * x, 0.0, 1.0, 60),
            Err(NumericError::InvalidInput(_))
        ));
    }

    #[test]
    fn non_finite_objective_is_reported() {
        let result = find_minimum(|_| f64::NAN, 0.0, 1.0, 30);
        assert!(matches!(result, Err(NumericError::Minimization(_))));
    }
}
