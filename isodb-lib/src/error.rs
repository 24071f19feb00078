use std::fmt;

#[derive(Debug)]
pub enum IsotopeDbError {
    UnknownElement(String),
    AbundanceSum { symbol: String, total: f64 },
    LengthMismatch { masses: usize, weights: usize },
    NonPositiveMass(f64),
    NegativeWeight(f64),
    ZeroWeightSum,
    ZeroDenominator,
    DataError(String),
    Io(std::io::Error),
}

pub type Result<T> = std::result::Result<T, IsotopeDbError>;

impl fmt::Display for IsotopeDbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownElement(e) => write!(
                f,
                "no stable isotope data for element '{e}'; supply an isotope table with natural abundances"
            ),
            Self::AbundanceSum { symbol, total } => write!(
                f,
                "abundances for {symbol} sum to {total:.3}%, not ~100%; check the isotope table for that element"
            ),
            Self::LengthMismatch { masses, weights } => write!(
                f,
                "masses and weights must have the same length ({masses} vs {weights})"
            ),
            Self::NonPositiveMass(m) => write!(f, "all masses must be positive, got {m}"),
            Self::NegativeWeight(w) => write!(f, "all weight entries must be nonnegative, got {w}"),
            Self::ZeroWeightSum => write!(f, "sum of weight percents/fractions is zero"),
            Self::ZeroDenominator => write!(f, "denominator became zero; check inputs"),
            Self::DataError(msg) => write!(f, "data error: {msg}"),
            Self::Io(err) => write!(f, "io error: {err}"),
        }
    }
}

impl std::error::Error for IsotopeDbError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for IsotopeDbError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}
