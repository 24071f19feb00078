/// Embedded fallback isotope table (tin only), so the calculators are
/// usable before a full `isotopes.csv` has been generated.
///
/// Each entry: (element, symbol, mass number, mass in u, abundance in atom %)
pub(crate) const SEED: &[(&str, &str, u16, f64, f64)] = &[
    ("Tin", "Sn", 112, 111.90482387, 0.97),
    ("Tin", "Sn", 114, 113.9027827, 0.66),
    ("Tin", "Sn", 115, 114.903344699, 0.34),
    ("Tin", "Sn", 116, 115.90174280, 14.54),
    ("Tin", "Sn", 117, 116.90295398, 7.68),
    ("Tin", "Sn", 118, 117.90160657, 24.22),
    ("Tin", "Sn", 119, 118.90331117, 8.59),
    ("Tin", "Sn", 120, 119.90220163, 32.58),
    ("Tin", "Sn", 122, 121.9034438, 4.63),
    ("Tin", "Sn", 124, 123.9052766, 5.79),
];
