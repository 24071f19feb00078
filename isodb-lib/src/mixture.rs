use crate::constants::WEIGHT_PERCENT_WINDOW;
use crate::error::{IsotopeDbError, Result};

/// Computes the average atomic mass from isotopic masses and a mass-based
/// composition.
///
/// `weights` may be weight percents (summing to ~100) or arbitrary mass
/// weights such as fractions summing to 1; the two conventions are
/// auto-detected by whether the total falls within
/// [`WEIGHT_PERCENT_WINDOW`] of 100. Order must match `masses_u`.
///
/// With mass fractions w_i (Σw_i = 1), moles of isotope i are
/// proportional to w_i/m_i, so the mole fraction is
/// x_i = (w_i/m_i) / Σ(w_j/m_j) and the mean mass is
/// Σ x_i·m_i = 1/Σ(w_i/m_i). In percent form W_i = 100·w_i the same
/// value is (ΣW_i) / Σ(W_i/m_i).
pub fn atomic_weight_from_weight_percent(masses_u: &[f64], weights: &[f64]) -> Result<f64> {
    atomic_weight_from_weight_percent_with_window(masses_u, weights, WEIGHT_PERCENT_WINDOW)
}

/// [`atomic_weight_from_weight_percent`] with a caller-chosen half-width
/// for the percent-detection window around 100.
pub fn atomic_weight_from_weight_percent_with_window(
    masses_u: &[f64],
    weights: &[f64],
    percent_window: f64,
) -> Result<f64> {
    if masses_u.len() != weights.len() {
        return Err(IsotopeDbError::LengthMismatch {
            masses: masses_u.len(),
            weights: weights.len(),
        });
    }
    if let Some(&m) = masses_u.iter().find(|&&m| !m.is_finite() || m <= 0.0) {
        return Err(IsotopeDbError::NonPositiveMass(m));
    }
    if let Some(&w) = weights.iter().find(|&&w| !w.is_finite() || w < 0.0) {
        return Err(IsotopeDbError::NegativeWeight(w));
    }

    let total: f64 = weights.iter().sum();
    if total == 0.0 {
        return Err(IsotopeDbError::ZeroWeightSum);
    }

    if (total - 100.0).abs() < percent_window {
        // Percent form: AW = ΣW_i / Σ(W_i/m_i)
        let denom: f64 = weights.iter().zip(masses_u).map(|(w, m)| w / m).sum();
        // Unreachable after the checks above, unless cancellation zeroes
        // the harmonic sum
        if denom == 0.0 {
            return Err(IsotopeDbError::ZeroDenominator);
        }
        Ok(total / denom)
    } else {
        // Arbitrary mass weights: normalize to fractions first
        let denom: f64 = weights
            .iter()
            .zip(masses_u)
            .map(|(w, m)| (w / total) / m)
            .sum();
        if denom == 0.0 {
            return Err(IsotopeDbError::ZeroDenominator);
        }
        Ok(1.0 / denom)
    }
}
