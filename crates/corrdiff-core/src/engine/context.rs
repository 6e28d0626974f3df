use crate::core::numerics::NumericError;
use crate::core::numerics::laplace::laplace_series;
use tracing::trace;

/// Immutable inputs of the frequency-domain equations for one analysis run.
///
/// With `L(s)` the Laplace transform of the VACF, the characteristic function is
/// `f(s) = L(s) * (s * var + var_vel / s) - var * var_vel` and the frequency-dependent
/// diffusion coefficient is `D(s) = -L(s) * var * var_vel / f(s)`.
#[derive(Debug, Clone, Copy)]
pub struct FrequencyContext<'a> {
    vacf: &'a [f64],
    var: f64,
    var_vel: f64,
    timestep: f64,
}

impl<'a> FrequencyContext<'a> {
    pub fn new(vacf: &'a [f64], var: f64, var_vel: f64, timestep: f64) -> Self {
        Self {
            vacf,
            var,
            var_vel,
            timestep,
        }
    }

    pub fn laplace_vacf(&self, s: f64) -> f64 {
        laplace_series(self.vacf, self.timestep, s)
    }

    fn denominator_with(&self, s: f64, laplace_vacf: f64) -> f64 {
        laplace_vacf * (s * self.var + self.var_vel / s) - self.var * self.var_vel
    }

    /// Characteristic function `f(s)`.
    pub fn denominator(&self, s: f64) -> f64 {
        let laplace_vacf = self.laplace_vacf(s);
        let f = self.denominator_with(s, laplace_vacf);
        trace!(s, f, laplace_vacf, "characteristic function evaluated");
        f
    }

    /// Frequency-dependent diffusion coefficient `D(s)` in Å²/fs.
    ///
    /// # Errors
    ///
    /// Returns [`NumericError::DegenerateInput`] where `f(s)` vanishes.
    pub fn diffusion_at(&self, s: f64) -> Result<f64, NumericError> {
        let laplace_vacf = self.laplace_vacf(s);
        let f = self.denominator_with(s, laplace_vacf);
        if f == 0.0 {
            return Err(NumericError::DegenerateInput(format!(
                "characteristic function vanishes at s = {}",
                s
            )));
        }
        let d = -laplace_vacf * self.var * self.var_vel / f;
        trace!(s, d, laplace_vacf, f, "D(s) evaluated");
        Ok(d)
    }
}
