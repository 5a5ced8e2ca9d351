use crate::factors::table::{FactorRow, FactorTable};
use crate::prelude::{EstimateError, EstimateResult};
use log::info;
use std::path::Path;

/// Loads the per-country factor table from a CSV source.
///
/// A missing or malformed source is fatal: no fallback factors exist, so
/// callers cannot proceed without a table. One-time startup load, no retry.
pub fn load_factor_table<P: AsRef<Path>>(path: P) -> EstimateResult<FactorTable> {
    let path_ref = path.as_ref();
    let mut reader = csv::Reader::from_path(path_ref).map_err(|err| {
        EstimateError::TableLoad(format!("opening {}: {}", path_ref.display(), err))
    })?;

    let mut rows = Vec::new();
    for record in reader.deserialize::<FactorRow>() {
        let row = record.map_err(|err| {
            EstimateError::TableLoad(format!("parsing {}: {}", path_ref.display(), err))
        })?;
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(EstimateError::TableLoad(format!(
            "{} contains no factor rows",
            path_ref.display()
        )));
    }

    info!(
        "loaded {} factor rows from {}",
        rows.len(),
        path_ref.display()
    );
    Ok(FactorTable::from_rows(rows))
}
