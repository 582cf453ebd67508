use std::fs::File;
use std::path::Path;

use csv::ReaderBuilder;
use log::debug;

use super::builder::build_table;
use super::model::CoefficientTable;
use super::raw::{RawTable, DELIMITER};
use crate::error::{Result, TableError};

/// File name of the average emissivity table.
pub const AVERAGE_EMISSIVITY_FILE: &str = "average_emissivity.csv";

/// File name of the column water vapour coefficient table.
pub const CWV_COEFFICIENTS_FILE: &str = "cwv_coefficients.csv";

/// Average emissivities per land-cover class for Landsat 8 TIRS bands 10 and 11.
pub const AVERAGE_EMISSIVITY_TABLE: &str = "\
Emissivity Class|TIRS10|TIRS11
Cropland|0.971|0.968
Forest|0.995|0.996
Grasslands|0.97|0.971
Shrublands|0.969|0.97
Wetlands|0.992|0.998
Waterbodies|0.992|0.998
Tundra|0.98|0.984
Impervious|0.973|0.981
Barren Land|0.969|0.978
Snow and ice|0.992|0.998";

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the table named on the command line. A path is required.
pub fn load_from_arg(path: Option<&Path>) -> Result<CoefficientTable> {
    let path = path.ok_or(TableError::MissingInput)?;
    load_file(path)
}

/// Read and convert a pipe-delimited coefficient file. Row errors name the
/// line in the file.
pub fn load_file(path: &Path) -> Result<CoefficientTable> {
    let raw = RawTable::from_lines(read_records(path)?)?;
    build_table(&raw)
}

/// Load `average_emissivity.csv` from `dir`.
pub fn average_emissivities(dir: &Path) -> Result<CoefficientTable> {
    load_file(&dir.join(AVERAGE_EMISSIVITY_FILE))
}

/// Load `cwv_coefficients.csv` from `dir`.
pub fn column_water_vapour(dir: &Path) -> Result<CoefficientTable> {
    load_file(&dir.join(CWV_COEFFICIENTS_FILE))
}

// ---------------------------------------------------------------------------
// File reader
// ---------------------------------------------------------------------------

/// Read a `|`-delimited file and return its records re-joined as one
/// newline-separated string, without leading or trailing blank lines.
///
/// Quoting is resolved while reading, then the cells are joined back with
/// `|`. A quoted `"a|b"` therefore loses its quotes and splits into two cells
/// when the text is converted.
pub fn read_table(path: &Path) -> Result<String> {
    let lines: Vec<String> = read_records(path)?.into_iter().map(|(_, l)| l).collect();
    let text = lines.join("\n");
    Ok(text.trim_matches('\n').to_string())
}

/// Records re-joined with `|`, each paired with the file line it starts on.
fn read_records(path: &Path) -> Result<Vec<(usize, String)>> {
    let file = File::open(path).map_err(|source| TableError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = ReaderBuilder::new()
        .delimiter(DELIMITER as u8)
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut records = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let record = result.map_err(|source| TableError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        let line = record.position().map_or(i + 1, |pos| pos.line() as usize);
        records.push((line, record.iter().collect::<Vec<_>>().join("|")));
    }
    debug!("{}: {} records", path.display(), records.len());

    Ok(records)
}
