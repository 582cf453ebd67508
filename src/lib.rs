//! Loader for Landsat 8 split-window coefficient tables.
//!
//! Reads the small pipe-delimited tables used for land surface temperature
//! retrieval (average emissivity per land-cover class, and column water
//! vapour coefficients per subrange) into a map of typed records keyed by the
//! sanitized first column.
//!
//! # Example
//!
//! ```
//! use coefficient_tables::data::{csv_to_table, CellValue};
//!
//! let table = csv_to_table("Emissivity Class|TIRS10|TIRS11\nBarren Land|0.969|0.978").unwrap();
//! let barren = table.emissivity("Barren_Land").unwrap();
//! assert_eq!(barren.tirs10, CellValue::Float(0.969));
//! ```

pub mod cli;
pub mod data;
pub mod error;

pub use data::{csv_to_table, load_file, CoefficientTable, Record, Shape};
pub use error::{Result, TableError};
