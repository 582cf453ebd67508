use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use coefficient_tables::data::{
    csv_to_table, CoefficientTable, AVERAGE_EMISSIVITY_FILE, AVERAGE_EMISSIVITY_TABLE,
};

/// Write the bundled average emissivity table so the main binary has a file
/// to read. Output path defaults to `average_emissivity.csv`.
fn main() -> Result<()> {
    env_logger::init();

    let output_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(AVERAGE_EMISSIVITY_FILE));

    let table = write_sample(&output_path)?;

    println!(
        "Wrote {} land-cover classes ({} shape) to {}",
        table.len(),
        table.shape(),
        output_path.display()
    );
    Ok(())
}

/// Write the bundled table to `path`, returning the table it holds.
fn write_sample(path: &Path) -> Result<CoefficientTable> {
    // Sanity check before writing
    let table = csv_to_table(AVERAGE_EMISSIVITY_TABLE).context("parsing bundled table")?;

    std::fs::write(path, format!("{AVERAGE_EMISSIVITY_TABLE}\n"))
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use coefficient_tables::data::load_file;
    use tempfile::tempdir;

    #[test]
    fn test_written_sample_loads_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(AVERAGE_EMISSIVITY_FILE);

        let written = write_sample(&path).unwrap();
        let loaded = load_file(&path).unwrap();
        assert_eq!(written, loaded);
        assert!(loaded.contains_key("Snow_and_ice"));
    }

    #[test]
    fn test_unwritable_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("out.csv");
        let err = write_sample(&path).unwrap_err();
        assert!(err.to_string().contains("out.csv"));
    }
}
