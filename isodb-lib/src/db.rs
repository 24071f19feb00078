use std::collections::HashMap;
use std::fs;
use std::path::Path;

use isodb_data::IsotopeRecord;

use crate::error::{IsotopeDbError, Result};
use crate::loader;
use crate::seed::SEED;

/// In-memory isotope table: canonical element symbol mapped to that
/// element's stable isotopes, sorted by ascending mass number.
///
/// Built once from a CSV file or the built-in seed and read-only
/// afterward, so it can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct IsotopeDb {
    by_symbol: HashMap<String, Vec<IsotopeRecord>>,
    name_to_symbol: HashMap<String, String>,
}

impl IsotopeDb {
    /// Builds the built-in seed table (tin only).
    pub fn seed() -> Self {
        let records = SEED
            .iter()
            .map(
                |&(element, symbol, mass_number, mass_u, abundance_percent)| IsotopeRecord {
                    element: element.to_string(),
                    symbol: symbol.to_string(),
                    mass_number,
                    mass_u,
                    abundance_percent,
                    stable: true,
                },
            )
            .collect();
        Self::from_records(records)
    }

    /// Builds a table from raw records.
    ///
    /// Records with `stable == false` are dropped; the rest are grouped by
    /// symbol and sorted by mass number.
    pub fn from_records(records: Vec<IsotopeRecord>) -> Self {
        let mut by_symbol: HashMap<String, Vec<IsotopeRecord>> = HashMap::new();
        let mut name_to_symbol = HashMap::new();
        for rec in records {
            if !rec.stable {
                continue;
            }
            name_to_symbol.insert(rec.element.to_lowercase(), rec.symbol.clone());
            by_symbol.entry(rec.symbol.clone()).or_default().push(rec);
        }
        for isotopes in by_symbol.values_mut() {
            isotopes.sort_by_key(|iso| iso.mass_number);
        }
        IsotopeDb {
            by_symbol,
            name_to_symbol,
        }
    }

    /// Parses a table from CSV text (see [`loader`](crate::loader) for the format).
    pub fn from_csv_str(csv: &str) -> Result<Self> {
        Ok(Self::from_records(loader::parse_csv(csv)?))
    }

    /// Reads and parses a CSV file.
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self> {
        let csv = fs::read_to_string(path)?;
        Self::from_csv_str(&csv)
    }

    /// The default-table rule: load `path` if it exists and yields any
    /// elements, otherwise fall back to the built-in seed. A present but
    /// malformed file is still an error.
    pub fn load_or_seed(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::seed());
        }
        let db = Self::from_csv_path(path)?;
        if db.is_empty() {
            return Ok(Self::seed());
        }
        Ok(db)
    }

    /// Resolves an element identifier to its canonical symbol.
    ///
    /// Symbols are matched case-insensitively ("sn", "SN" and "Sn" are the
    /// same element); identifiers longer than two characters are treated as
    /// full element names ("tin").
    pub fn resolve_symbol(&self, element: &str) -> Result<&str> {
        let id = element.trim();
        if !id.is_empty() && id.chars().count() <= 2 {
            let sym = canonical_symbol(id);
            if let Some((key, _)) = self.by_symbol.get_key_value(sym.as_str()) {
                return Ok(key.as_str());
            }
        }
        if let Some(sym) = self.name_to_symbol.get(&id.to_lowercase()) {
            return Ok(sym.as_str());
        }
        Err(IsotopeDbError::UnknownElement(id.to_string()))
    }

    /// Returns an element's isotopes, sorted by ascending mass number.
    pub fn isotopes(&self, element: &str) -> Result<&[IsotopeRecord]> {
        let sym = self.resolve_symbol(element)?;
        self.by_symbol
            .get(sym)
            .map(Vec::as_slice)
            .ok_or_else(|| IsotopeDbError::UnknownElement(element.trim().to_string()))
    }

    /// All canonical symbols in the table, sorted.
    pub fn symbols(&self) -> Vec<&str> {
        let mut syms: Vec<&str> = self.by_symbol.keys().map(String::as_str).collect();
        syms.sort_unstable();
        syms
    }

    /// Number of elements in the table.
    pub fn len(&self) -> usize {
        self.by_symbol.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_symbol.is_empty()
    }
}

/// Canonical 1–2 letter symbol form: first letter upper-cased, second
/// lower-cased.
fn canonical_symbol(id: &str) -> String {
    let mut chars = id.chars();
    let mut sym = String::with_capacity(2);
    if let Some(first) = chars.next() {
        sym.push(first.to_ascii_uppercase());
    }
    if let Some(second) = chars.next() {
        sym.push(second.to_ascii_lowercase());
    }
    sym
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_symbol() {
        assert_eq!(canonical_symbol("h"), "H");
        assert_eq!(canonical_symbol("SN"), "Sn");
        assert_eq!(canonical_symbol("sn"), "Sn");
        assert_eq!(canonical_symbol("Sn"), "Sn");
    }

    #[test]
    fn test_resolve_trims_whitespace() {
        let db = IsotopeDb::seed();
        assert_eq!(db.resolve_symbol("  sn ").unwrap(), "Sn");
    }

    #[test]
    fn test_resolve_by_name() {
        let db = IsotopeDb::seed();
        assert_eq!(db.resolve_symbol("tin").unwrap(), "Sn");
        assert_eq!(db.resolve_symbol("Tin").unwrap(), "Sn");
    }

    #[test]
    fn test_unknown_symbol() {
        let db = IsotopeDb::seed();
        assert!(matches!(
            db.resolve_symbol("Xx"),
            Err(IsotopeDbError::UnknownElement(_))
        ));
    }
}
