use isodb_data::IsotopeRecord;

use crate::elements::element_by_z;

/// One isotope block being accumulated from the linearized NIST table.
#[derive(Default)]
struct Pending {
    z: Option<u16>,
    symbol: Option<String>,
    mass_number: Option<u16>,
    mass: Option<String>,
    composition: Option<String>,
}

impl Pending {
    /// Emits a record if the block is complete and has a listed
    /// composition (isotopes without one are not part of the natural
    /// composition and are skipped).
    fn flush(&self) -> Option<IsotopeRecord> {
        let z = self.z?;
        let symbol = self.symbol.as_deref()?;
        let mass_number = self.mass_number?;
        let mass_u = parse_value(self.mass.as_deref()?)?;
        let raw_comp = self.composition.as_deref()?;
        if raw_comp.is_empty() {
            return None;
        }
        let abundance_percent = parse_value(raw_comp)? * 100.0;

        // NIST labels the hydrogen isotopes D and T; fold them back into H
        let symbol = match symbol {
            "D" | "T" => "H",
            s => s,
        };
        let element = element_by_z(z).map(|(name, _)| name).unwrap_or(symbol);

        Some(IsotopeRecord {
            element: element.to_string(),
            symbol: symbol.to_string(),
            mass_number,
            mass_u,
            abundance_percent,
            stable: true,
        })
    }
}

/// Parses NIST's "Atomic Weights and Isotopic Compositions" linearized
/// ASCII output into isotope records.
///
/// The format is a sequence of `Key = Value` lines; a new `Atomic Number`
/// or `Mass Number` line starts the next block.
pub fn parse_nist(text: &str) -> Vec<IsotopeRecord> {
    let mut rows = Vec::new();
    let mut pending = Pending::default();

    for line in text.lines() {
        let line = line.trim();
        if let Some(value) = field(line, "Atomic Number") {
            if let Some(row) = pending.flush() {
                rows.push(row);
            }
            pending = Pending {
                z: value.parse().ok(),
                ..Pending::default()
            };
        } else if let Some(value) = field(line, "Atomic Symbol") {
            pending.symbol = Some(value.to_string());
        } else if let Some(value) = field(line, "Mass Number") {
            if let Some(row) = pending.flush() {
                rows.push(row);
            }
            pending.mass_number = value.parse().ok();
            pending.mass = None;
            pending.composition = None;
        } else if let Some(value) = field(line, "Relative Atomic Mass") {
            pending.mass = Some(value.to_string());
        } else if let Some(value) = field(line, "Isotopic Composition") {
            pending.composition = Some(value.to_string());
        }
    }
    if let Some(row) = pending.flush() {
        rows.push(row);
    }
    rows
}

fn field<'a>(line: &'a str, key: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(key)?.trim_start();
    Some(rest.strip_prefix('=')?.trim())
}

/// Parses a NIST numeric value, dropping the `(uncertainty)` suffix and
/// `#` (estimated) markers, e.g. `1.00782503223(9)` or `53.9396090(14)#`.
fn parse_value(raw: &str) -> Option<f64> {
    let cut = raw.find(['(', ')', '#']).unwrap_or(raw.len());
    raw[..cut].trim().parse().ok()
}
