use log::{debug, info};

use super::coerce::coerce;
use super::model::{CoefficientTable, EmissivityRecord, Record, Shape, WaterVaporRecord};
use super::raw::{RawRow, RawTable};
use super::sanitize::sanitize_key;
use super::shape::detect_shape;
use crate::error::{Result, TableError};

/// Convert pipe-delimited text into a [`CoefficientTable`].
///
/// The header decides the record shape; each data row becomes one record
/// keyed by its sanitized first cell. When two rows share a key the earlier
/// row is kept.
pub fn csv_to_table(text: &str) -> Result<CoefficientTable> {
    let raw = RawTable::parse(text)?;
    build_table(&raw)
}

/// Build the table from already split rows.
pub fn build_table(raw: &RawTable) -> Result<CoefficientTable> {
    let shape = detect_shape(raw.field_columns())?;
    let mut table = CoefficientTable::new(shape);

    for row in &raw.rows {
        let (key, record) = transform_row(row, shape)?;
        if !table.insert_first(key.clone(), record) {
            debug!("line {}: duplicate key '{key}' ignored", row.line);
        }
    }

    info!(
        "built {} table: {} records from {} rows ({} duplicates)",
        shape,
        table.len(),
        raw.rows.len(),
        table.duplicates()
    );
    Ok(table)
}

fn transform_row(row: &RawRow, shape: Shape) -> Result<(String, Record)> {
    let cells = &row.cells;
    let key = sanitize_key(&cells[0]);

    if cells.len() < shape.width() {
        return Err(TableError::ShortRow {
            line: row.line,
            key,
            expected: shape.width(),
            found: cells.len(),
        });
    }

    let record = match shape {
        Shape::Emissivity => Record::Emissivity(EmissivityRecord {
            tirs10: coerce(&cells[1]),
            tirs11: coerce(&cells[2]),
        }),
        Shape::WaterVapor => Record::WaterVapor(WaterVaporRecord {
            subrange: cells[1].clone(),
            b0: coerce(&cells[2]),
            b1: coerce(&cells[3]),
            b2: coerce(&cells[4]),
            b3: coerce(&cells[5]),
            b4: coerce(&cells[6]),
            b5: coerce(&cells[7]),
            b6: coerce(&cells[8]),
            b7: coerce(&cells[9]),
            rmse: coerce(&cells[10]),
        }),
    };
    Ok((key, record))
}
