use crate::constants::ABUNDANCE_SUM_TOLERANCE;
use crate::db::IsotopeDb;
use crate::error::{IsotopeDbError, Result};

impl IsotopeDb {
    /// Returns the natural atomic weight of an element in u.
    ///
    /// This is the atom-fraction weighted mean of the isotopic masses,
    /// Σ (abundance_i / 100) · mass_i. The listed abundances must sum to
    /// ~100 within [`ABUNDANCE_SUM_TOLERANCE`]; a larger deviation means
    /// the table is incomplete or inconsistent for that element and is
    /// reported as an error rather than renormalized away.
    pub fn atomic_weight(&self, element: &str) -> Result<f64> {
        self.atomic_weight_with_tolerance(element, ABUNDANCE_SUM_TOLERANCE)
    }

    /// [`atomic_weight`](Self::atomic_weight) with a caller-chosen
    /// abundance-sum tolerance in percentage points.
    pub fn atomic_weight_with_tolerance(&self, element: &str, tolerance: f64) -> Result<f64> {
        let isotopes = self.isotopes(element)?;
        let total: f64 = isotopes.iter().map(|iso| iso.abundance_percent).sum();
        if (total - 100.0).abs() > tolerance {
            return Err(IsotopeDbError::AbundanceSum {
                symbol: isotopes[0].symbol.clone(),
                total,
            });
        }
        Ok(isotopes
            .iter()
            .map(|iso| iso.abundance_percent / 100.0 * iso.mass_u)
            .sum())
    }
}
