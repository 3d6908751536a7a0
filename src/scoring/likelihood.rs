use crate::model::dynamics::{N_ACTIONS, ProbabilityRow};

/// Identity-matrix encoding of binary outcome indices: `0 -> [1,0]`,
/// `1 -> [0,1]`. Callers must have validated that every choice is `< N_ACTIONS`.
pub fn one_hot(choices: &[u8]) -> Vec<[f64; N_ACTIONS]> {
    let mut out = Vec::with_capacity(choices.len());
    for &choice in choices {
        let mut row = [0.0; N_ACTIONS];
        row[choice as usize] = 1.0;
        out.push(row);
    }
    out
}

/// Sum over all entries of `indicator * ln(probability)`, i.e. the sum over
/// trials of `ln(P(observed outcome))`.
///
/// `ln(0)` is not guarded: a zero probability for an observed outcome yields
/// `-inf`, and for an unobserved outcome `0 * -inf = NaN`, both propagating
/// into the result.
pub fn log_likelihood(observations: &[[f64; N_ACTIONS]], probabilities: &[ProbabilityRow]) -> f64 {
    let mut ll = 0.0;
    for (obs, probs) in observations.iter().zip(probabilities) {
        for (indicator, p) in obs.iter().zip(probs) {
            ll += indicator * p.ln();
        }
    }
    ll
}
