use crate::core::numerics::NumericError;
use crate::core::numerics::minimize::find_minimum;
use crate::engine::config::SearchConfig;
use crate::engine::context::FrequencyContext;
use crate::engine::state::MinimumSearch;
use tracing::info;

/// Locates the minimum of the characteristic function inside the search bracket.
///
/// The minimum is used as a proxy for the point where `f(s)` approaches zero; it is
/// not a root-finder.
pub fn run(
    context: &FrequencyContext<'_>,
    search: &SearchConfig,
) -> Result<MinimumSearch, NumericError> {
    let minimum = find_minimum(
        |s| context.denominator(s),
        search.s_lower,
        search.s_upper,
        search.precision_bits,
    )?;

    info!(
        "Characteristic function minimum at s = {:e} 1/fs (f = {:e}).",
        minimum.location, minimum.value
    );
    Ok(MinimumSearch {
        s_min: minimum.location,
        value: minimum.value,
        iterations: minimum.iterations,
    })
}
