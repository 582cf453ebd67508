use std::collections::BTreeMap;
use std::fmt;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

// ---------------------------------------------------------------------------
// CellValue – a single coerced cell
// ---------------------------------------------------------------------------

/// A table cell after numeric coercion: a float, a complex number, or the
/// untouched source text.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Float(f64),
    Complex { re: f64, im: f64 },
    Text(String),
}

impl CellValue {
    /// The value as an `f64`, if it was parsed as a real number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_numeric(&self) -> bool {
        !matches!(self, CellValue::Text(_))
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Complex { re, im } => {
                let sign = if im.is_sign_negative() { '-' } else { '+' };
                write!(f, "({re}{sign}{}j)", im.abs())
            }
            CellValue::Text(s) => write!(f, "'{s}'"),
        }
    }
}

impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CellValue::Float(v) => serializer.serialize_f64(*v),
            CellValue::Complex { re, im } => {
                let mut s = serializer.serialize_struct("Complex", 2)?;
                s.serialize_field("re", re)?;
                s.serialize_field("im", im)?;
                s.end()
            }
            CellValue::Text(s) => serializer.serialize_str(s),
        }
    }
}

// ---------------------------------------------------------------------------
// Shape – which record layout a table uses
// ---------------------------------------------------------------------------

/// Record layout selected from the header vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Land-cover class → TIRS10, TIRS11 emissivities.
    Emissivity,
    /// CWV range → subrange, b0..b7, rmse.
    WaterVapor,
}

impl Shape {
    /// Number of cells a data row must carry, key column included.
    pub fn width(self) -> usize {
        match self {
            Shape::Emissivity => 3,
            Shape::WaterVapor => 11,
        }
    }

    pub fn field_names(self) -> &'static [&'static str] {
        match self {
            Shape::Emissivity => &["TIRS10", "TIRS11"],
            Shape::WaterVapor => &[
                "subrange", "b0", "b1", "b2", "b3", "b4", "b5", "b6", "b7", "rmse",
            ],
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Emissivity => write!(f, "emissivity"),
            Shape::WaterVapor => write!(f, "column water vapour"),
        }
    }
}

// ---------------------------------------------------------------------------
// Records – one row of a table
// ---------------------------------------------------------------------------

/// Average emissivity of a land-cover class for both TIRS bands.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmissivityRecord {
    #[serde(rename = "TIRS10")]
    pub tirs10: CellValue,
    #[serde(rename = "TIRS11")]
    pub tirs11: CellValue,
}

/// Split-window coefficients for one column water vapour range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WaterVaporRecord {
    /// Kept verbatim, e.g. `0.10-3.0`.
    pub subrange: String,
    pub b0: CellValue,
    pub b1: CellValue,
    pub b2: CellValue,
    pub b3: CellValue,
    pub b4: CellValue,
    pub b5: CellValue,
    pub b6: CellValue,
    pub b7: CellValue,
    pub rmse: CellValue,
}

impl WaterVaporRecord {
    /// The eight coefficients in order `b0..b7`.
    pub fn coefficients(&self) -> [&CellValue; 8] {
        [
            &self.b0, &self.b1, &self.b2, &self.b3, &self.b4, &self.b5, &self.b6, &self.b7,
        ]
    }
}

/// A converted row, in one of the two known shapes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Record {
    Emissivity(EmissivityRecord),
    WaterVapor(WaterVaporRecord),
}

impl Record {
    pub fn shape(&self) -> Shape {
        match self {
            Record::Emissivity(_) => Shape::Emissivity,
            Record::WaterVapor(_) => Shape::WaterVapor,
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Record::Emissivity(r) => {
                write!(f, "Emissivity(TIRS10={}, TIRS11={})", r.tirs10, r.tirs11)
            }
            Record::WaterVapor(r) => {
                write!(f, "WaterVapor(subrange='{}'", r.subrange)?;
                for (i, b) in r.coefficients().iter().enumerate() {
                    write!(f, ", b{i}={b}")?;
                }
                write!(f, ", rmse={})", r.rmse)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// CoefficientTable – the converted mapping
// ---------------------------------------------------------------------------

/// Sanitized row key → record. All records share the table's [`Shape`].
#[derive(Debug, Clone, PartialEq)]
pub struct CoefficientTable {
    shape: Shape,
    records: BTreeMap<String, Record>,
    duplicates: usize,
}

impl CoefficientTable {
    pub(crate) fn new(shape: Shape) -> Self {
        CoefficientTable {
            shape,
            records: BTreeMap::new(),
            duplicates: 0,
        }
    }

    /// Insert unless the key is already taken. Returns whether it was stored.
    pub(crate) fn insert_first(&mut self, key: String, record: Record) -> bool {
        if self.records.contains_key(&key) {
            self.duplicates += 1;
            return false;
        }
        self.records.insert(key, record);
        true
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rows dropped because an earlier row already used their key.
    pub fn duplicates(&self) -> usize {
        self.duplicates
    }

    pub fn get(&self, key: &str) -> Option<&Record> {
        self.records.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.records.contains_key(key)
    }

    pub fn emissivity(&self, key: &str) -> Option<&EmissivityRecord> {
        match self.records.get(key) {
            Some(Record::Emissivity(r)) => Some(r),
            _ => None,
        }
    }

    pub fn water_vapor(&self, key: &str) -> Option<&WaterVaporRecord> {
        match self.records.get(key) {
            Some(Record::WaterVapor(r)) => Some(r),
            _ => None,
        }
    }

    /// Keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Record)> {
        self.records.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl Serialize for CoefficientTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.records.serialize(serializer)
    }
}
