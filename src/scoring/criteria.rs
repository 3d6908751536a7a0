use crate::model::dynamics::{N_ACTIONS, ProbabilityRow};
use crate::scoring::likelihood::log_likelihood;

/// Akaike information criterion: `2k - 2 ln L`. Lower is better.
///
/// Pass `Some(ll)` when the log-likelihood is already known to avoid
/// recomputing it.
pub fn akaike_information_criterion(
    observations: &[[f64; N_ACTIONS]],
    probabilities: &[ProbabilityRow],
    n_parameters: u32,
    ll: Option<f64>,
) -> f64 {
    let ll = ll.unwrap_or_else(|| log_likelihood(observations, probabilities));
    -2.0 * ll + 2.0 * n_parameters as f64
}

/// Bayesian information criterion: `ln(n)k - 2 ln L` with `n` the number of
/// observation rows. Lower is better.
pub fn bayesian_information_criterion(
    observations: &[[f64; N_ACTIONS]],
    probabilities: &[ProbabilityRow],
    n_parameters: u32,
    ll: Option<f64>,
) -> f64 {
    let ll = ll.unwrap_or_else(|| log_likelihood(observations, probabilities));
    -2.0 * ll + n_parameters as f64 * (observations.len() as f64).ln()
}
