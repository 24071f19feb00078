use isodb_data::IsotopeRecord;

use crate::error::{IsotopeDbError, Result};

/// Parses isotope CSV text into records.
///
/// The first non-blank line is a header naming the columns
/// `element,symbol,A,mass_u,abundance_percent,stable` in any order; the
/// `stable` column is optional and defaults to true. Rows whose stable
/// flag is not truthy (`true`/`1`/`yes`/`y`, case-insensitive) are
/// excluded. Any field that fails conversion is a row-level error, never a
/// silent default.
pub fn parse_csv(input: &str) -> Result<Vec<IsotopeRecord>> {
    let mut lines = input.lines().enumerate();
    let header = loop {
        match lines.next() {
            Some((_, line)) if line.trim().is_empty() => continue,
            Some((_, line)) => break line,
            None => return Err(IsotopeDbError::DataError("missing header line".to_string())),
        }
    };

    let columns: Vec<&str> = header.split(',').map(str::trim).collect();
    let idx_element = find_column(&columns, "element")?;
    let idx_symbol = find_column(&columns, "symbol")?;
    let idx_a = find_column(&columns, "A")?;
    let idx_mass = find_column(&columns, "mass_u")?;
    let idx_abundance = find_column(&columns, "abundance_percent")?;
    let idx_stable = columns.iter().position(|c| *c == "stable");

    let mut records = Vec::new();
    for (lineno, line) in lines {
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() < columns.len() {
            return Err(IsotopeDbError::DataError(format!(
                "line {}: expected {} fields, got {}",
                lineno + 1,
                columns.len(),
                fields.len()
            )));
        }

        let stable = idx_stable.map_or(true, |i| parse_flag(fields[i]));
        if !stable {
            continue;
        }

        let mass_number = parse_field::<u16>(fields[idx_a], "A", lineno)?;
        let mass_u = parse_field::<f64>(fields[idx_mass], "mass_u", lineno)?;
        let abundance_percent =
            parse_field::<f64>(fields[idx_abundance], "abundance_percent", lineno)?;
        if mass_u <= 0.0 {
            return Err(IsotopeDbError::DataError(format!(
                "line {}: mass_u must be positive, got {mass_u}",
                lineno + 1
            )));
        }
        if abundance_percent < 0.0 {
            return Err(IsotopeDbError::DataError(format!(
                "line {}: abundance_percent must be nonnegative, got {abundance_percent}",
                lineno + 1
            )));
        }

        records.push(IsotopeRecord {
            element: fields[idx_element].to_string(),
            symbol: fields[idx_symbol].to_string(),
            mass_number,
            mass_u,
            abundance_percent,
            stable: true,
        });
    }
    Ok(records)
}

fn find_column(columns: &[&str], name: &str) -> Result<usize> {
    columns
        .iter()
        .position(|c| *c == name)
        .ok_or_else(|| IsotopeDbError::DataError(format!("missing '{name}' column in header")))
}

fn parse_field<T: std::str::FromStr>(value: &str, column: &str, lineno: usize) -> Result<T> {
    value.parse().map_err(|_| {
        IsotopeDbError::DataError(format!(
            "line {}: bad {column} value '{value}'",
            lineno + 1
        ))
    })
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "true" | "1" | "yes" | "y"
    )
}
