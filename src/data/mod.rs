//! Data layer: reading, shaping and converting coefficient tables.
//!
//! Architecture:
//! ```text
//!  file (| delimited) ──► loader::read_table ──► text
//!                                                 │
//!   in-memory text ───────────────────────────────┤
//!                                                 ▼
//!                                        ┌──────────────┐
//!                                        │ raw::RawTable │  header + rows
//!                                        └──────────────┘
//!                                                 │
//!                                                 ▼
//!                                  ┌────────────────────────┐
//!                                  │ shape::detect_shape     │  Emissivity | WaterVapor
//!                                  └────────────────────────┘
//!                                                 │
//!                                                 ▼
//!                                  ┌────────────────────────┐
//!                                  │ builder::build_table    │  sanitize_key + coerce
//!                                  └────────────────────────┘
//!                                                 │
//!                                                 ▼
//!                                      model::CoefficientTable
//! ```

pub mod builder;
pub mod coerce;
pub mod loader;
pub mod model;
pub mod raw;
pub mod sanitize;
pub mod shape;

pub use builder::{build_table, csv_to_table};
pub use coerce::coerce;
pub use loader::{
    average_emissivities, column_water_vapour, load_file, load_from_arg, read_table,
    AVERAGE_EMISSIVITY_FILE, AVERAGE_EMISSIVITY_TABLE, CWV_COEFFICIENTS_FILE,
};
pub use model::{CellValue, CoefficientTable, EmissivityRecord, Record, Shape, WaterVaporRecord};
pub use raw::RawTable;
pub use sanitize::sanitize_key;
pub use shape::detect_shape;
