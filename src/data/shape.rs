use log::debug;

use super::model::Shape;
use crate::error::{Result, TableError};

/// Column names that mark an average emissivity table.
pub const EMISSIVITY_COLUMNS: [&str; 2] = ["TIRS10", "TIRS11"];

/// Column names that mark a column water vapour coefficient table.
pub const WATER_VAPOR_COLUMNS: [&str; 8] = ["b0", "b1", "b2", "b3", "b4", "b5", "b6", "b7"];

/// Pick the record layout from the non-key header columns.
///
/// Any one vocabulary name is enough to match. Exactly one vocabulary must
/// match; none or both is an error.
pub fn detect_shape(columns: &[String]) -> Result<Shape> {
    let has_any = |vocab: &[&str]| columns.iter().any(|c| vocab.contains(&c.as_str()));

    let shape = match (has_any(&EMISSIVITY_COLUMNS), has_any(&WATER_VAPOR_COLUMNS)) {
        (true, false) => Shape::Emissivity,
        (false, true) => Shape::WaterVapor,
        (true, true) => {
            return Err(TableError::AmbiguousShape {
                columns: columns.to_vec(),
            })
        }
        (false, false) => {
            return Err(TableError::ShapeNotRecognized {
                columns: columns.to_vec(),
            })
        }
    };
    debug!("header {columns:?} selects {shape} shape");
    Ok(shape)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cols(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_emissivity() {
        assert_eq!(detect_shape(&cols(&["TIRS10", "TIRS11"])).unwrap(), Shape::Emissivity);
        assert_eq!(detect_shape(&cols(&["TIRS11", "other"])).unwrap(), Shape::Emissivity);
    }

    #[test]
    fn test_water_vapor() {
        let header = cols(&["Subrange", "b0", "b1", "b2", "b3", "b4", "b5", "b6", "b7", "RMSE"]);
        assert_eq!(detect_shape(&header).unwrap(), Shape::WaterVapor);
        assert_eq!(detect_shape(&cols(&["x", "b7"])).unwrap(), Shape::WaterVapor);
    }

    #[test]
    fn test_unknown_header() {
        let err = detect_shape(&cols(&["Red", "Green"])).unwrap_err();
        assert!(matches!(
            err,
            TableError::ShapeNotRecognized { ref columns } if columns.len() == 2
        ));
        assert!(matches!(
            detect_shape(&[]),
            Err(TableError::ShapeNotRecognized { .. })
        ));
        // matching is case sensitive
        assert!(detect_shape(&cols(&["tirs10", "B0"])).is_err());
    }

    #[test]
    fn test_both_vocabularies() {
        assert!(matches!(
            detect_shape(&cols(&["TIRS10", "b0"])),
            Err(TableError::AmbiguousShape { .. })
        ));
    }
}
