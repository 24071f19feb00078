#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

/// A flat isotope table, the interchange shape written and read as CSV.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct IsotopeDatabase {
    pub isotopes: Vec<IsotopeRecord>,
}

/// One isotope of one element.
///
/// `abundance_percent` is the natural abundance in atom percent (number
/// fraction × 100). `stable` marks isotopes that belong in the natural
/// composition used for atomic-weight calculations; for a few elements
/// this includes long-lived primordial radioisotopes such as 40K.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IsotopeRecord {
    pub element: String,
    pub symbol: String,
    pub mass_number: u16,
    pub mass_u: f64,
    pub abundance_percent: f64,
    pub stable: bool,
}
