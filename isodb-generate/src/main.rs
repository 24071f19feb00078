mod elements;
mod parser;

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::Path;

const NIST_URL: &str = "https://physics.nist.gov/cgi-bin/Compositions/stand_alone.pl?all=all&ascii=ascii2&ele=&isotype=all";

fn main() {
    let data_path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("nist")
        .join("atomic_weights_ascii.txt");

    if !data_path.exists() {
        eprintln!("Error: NIST source table not found at {:?}", data_path);
        eprintln!("Download the linearized ASCII output of the NIST");
        eprintln!("'Atomic Weights and Isotopic Compositions' table from:");
        eprintln!("  {NIST_URL}");
        eprintln!("and save it to that path.");
        std::process::exit(1);
    }

    println!("Parsing NIST table from {:?}...", data_path);
    let text = std::fs::read_to_string(&data_path).expect("failed to read NIST table");
    let records = parser::parse_nist(&text);
    println!("  Isotopes with listed composition: {}", records.len());

    let mut csv = String::from("element,symbol,A,mass_u,abundance_percent,stable\n");
    for rec in &records {
        writeln!(
            csv,
            "{},{},{},{},{},true",
            rec.element, rec.symbol, rec.mass_number, rec.mass_u, rec.abundance_percent
        )
        .unwrap();
    }

    let out_path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .join("isotopes.csv");
    std::fs::write(&out_path, &csv).expect("failed to write isotopes.csv");
    println!("Wrote {} isotopes to {:?}", records.len(), out_path);

    // Verify round-trip through the library loader
    println!("Verifying round-trip parse...");
    let db = isodb::IsotopeDb::from_csv_path(&out_path).expect("round-trip parse failed");
    println!("  {} elements loaded", db.len());

    // Per-element abundance sums should all be ~100
    let mut sums: BTreeMap<String, f64> = BTreeMap::new();
    for rec in &records {
        *sums.entry(rec.symbol.clone()).or_default() += rec.abundance_percent;
    }
    for sym in ["H", "O", "Sn", "Pb", "W", "Xe", "K", "Cl"] {
        if let Some(total) = sums.get(sym) {
            println!("  {sym}: total abundance ~ {total:.3}% (should be ~100%)");
        }
    }
}
