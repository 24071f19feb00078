use approx::assert_relative_eq;
use isodb::{
    IsotopeDbError, atomic_weight_from_weight_percent,
    atomic_weight_from_weight_percent_with_window,
};

const PU_MASSES: [f64; 5] = [238.0496, 239.0522, 240.0538, 241.0568, 242.0587];

#[test]
fn test_percent_inputs_match_direct_formula() {
    let weights = [15.0, 35.0, 15.0, 20.0, 15.0];
    let aw = atomic_weight_from_weight_percent(&PU_MASSES, &weights).unwrap();

    let denom: f64 = weights.iter().zip(&PU_MASSES).map(|(w, m)| w / m).sum();
    assert_relative_eq!(aw, 100.0 / denom, epsilon = 1e-12);
    assert_relative_eq!(aw, 239.8967224, epsilon = 1e-6);
}

#[test]
fn test_percent_and_fraction_inputs_agree() {
    let percents = [15.0, 35.0, 15.0, 20.0, 15.0];
    let fractions = [0.15, 0.35, 0.15, 0.20, 0.15];
    let from_percents = atomic_weight_from_weight_percent(&PU_MASSES, &percents).unwrap();
    let from_fractions = atomic_weight_from_weight_percent(&PU_MASSES, &fractions).unwrap();
    assert_relative_eq!(from_percents, from_fractions, epsilon = 1e-12);
}

#[test]
fn test_arbitrary_mass_weights() {
    // Unnormalized weights: 3 g of one isotope, 7 g of the other
    let masses = [34.968852682, 36.965902602];
    let aw = atomic_weight_from_weight_percent(&masses, &[3.0, 7.0]).unwrap();
    let from_fractions = atomic_weight_from_weight_percent(&masses, &[0.3, 0.7]).unwrap();
    assert_relative_eq!(aw, from_fractions, epsilon = 1e-12);
}

#[test]
fn test_single_isotope() {
    let aw = atomic_weight_from_weight_percent(&[55.93493633], &[100.0]).unwrap();
    assert_relative_eq!(aw, 55.93493633, epsilon = 1e-12);
}

#[test]
fn test_length_mismatch() {
    assert!(matches!(
        atomic_weight_from_weight_percent(&[1.0, 2.0, 3.0], &[50.0, 50.0]),
        Err(IsotopeDbError::LengthMismatch {
            masses: 3,
            weights: 2
        })
    ));
}

#[test]
fn test_nonpositive_mass() {
    assert!(matches!(
        atomic_weight_from_weight_percent(&[12.0, 0.0], &[50.0, 50.0]),
        Err(IsotopeDbError::NonPositiveMass(_))
    ));
    assert!(matches!(
        atomic_weight_from_weight_percent(&[-1.0, 13.0], &[50.0, 50.0]),
        Err(IsotopeDbError::NonPositiveMass(_))
    ));
    assert!(matches!(
        atomic_weight_from_weight_percent(&[f64::NAN, 13.0], &[50.0, 50.0]),
        Err(IsotopeDbError::NonPositiveMass(_))
    ));
}

#[test]
fn test_negative_weight() {
    assert!(matches!(
        atomic_weight_from_weight_percent(&[12.0, 13.0], &[101.0, -1.0]),
        Err(IsotopeDbError::NegativeWeight(_))
    ));
}

#[test]
fn test_all_zero_weights() {
    assert!(matches!(
        atomic_weight_from_weight_percent(&[12.0, 13.0], &[0.0, 0.0]),
        Err(IsotopeDbError::ZeroWeightSum)
    ));
}

#[test]
fn test_custom_percent_window() {
    // A total of 97 is outside the default window but inside a wider one;
    // both interpretations must agree on the value
    let masses = [10.0, 20.0];
    let weights = [48.5, 48.5];
    let narrow = atomic_weight_from_weight_percent(&masses, &weights).unwrap();
    let wide = atomic_weight_from_weight_percent_with_window(&masses, &weights, 5.0).unwrap();
    assert_relative_eq!(narrow, wide, epsilon = 1e-12);
}

#[test]
fn test_idempotent() {
    let weights = [15.0, 35.0, 15.0, 20.0, 15.0];
    let first = atomic_weight_from_weight_percent(&PU_MASSES, &weights).unwrap();
    let second = atomic_weight_from_weight_percent(&PU_MASSES, &weights).unwrap();
    assert_eq!(first.to_bits(), second.to_bits());
}
