use crate::error::{Result, TableError};

/// Cell separator used by every coefficient table.
pub const DELIMITER: char = '|';

/// A data row split into cells, with its 1-based line number in the source.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    pub line: usize,
    pub cells: Vec<String>,
}

/// Header plus data rows, in source order. Blank lines are skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct RawTable {
    pub header: Vec<String>,
    pub rows: Vec<RawRow>,
}

impl RawTable {
    /// Split `text` into lines and cells. The first non-blank line is the header.
    pub fn parse(text: &str) -> Result<Self> {
        Self::from_lines(text.lines().enumerate().map(|(i, l)| (i + 1, l)))
    }

    /// Build from `(line number, line)` pairs, e.g. records read from a file
    /// whose numbering must survive skipped lines.
    pub fn from_lines<I, S>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, S)>,
        S: AsRef<str>,
    {
        let mut rows = lines
            .into_iter()
            .filter(|(_, l)| !l.as_ref().trim().is_empty())
            .map(|(line, l)| RawRow {
                line,
                cells: split_cells(l.as_ref()),
            });

        let header = rows.next().ok_or(TableError::MissingHeader)?.cells;
        let rows = rows.collect();

        Ok(RawTable { header, rows })
    }

    /// Header columns after the key column.
    pub fn field_columns(&self) -> &[String] {
        self.header.get(1..).unwrap_or(&[])
    }
}

fn split_cells(line: &str) -> Vec<String> {
    line.split(DELIMITER).map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_is_consumed() {
        let raw = RawTable::parse("Emissivity Class|TIRS10|TIRS11\nCropland|0.971|0.968").unwrap();
        assert_eq!(raw.header, vec!["Emissivity Class", "TIRS10", "TIRS11"]);
        assert_eq!(raw.field_columns(), ["TIRS10", "TIRS11"]);
        assert_eq!(raw.rows.len(), 1);
        assert_eq!(raw.rows[0].line, 2);
        assert_eq!(raw.rows[0].cells, vec!["Cropland", "0.971", "0.968"]);
    }

    #[test]
    fn test_blank_lines_skipped() {
        let text = "\nClass|TIRS10|TIRS11\r\nForest|0.995|0.996\r\n\n  \nTundra|0.98|0.984\n\n";
        let raw = RawTable::parse(text).unwrap();
        assert_eq!(raw.header[0], "Class");
        let lines: Vec<usize> = raw.rows.iter().map(|r| r.line).collect();
        assert_eq!(lines, vec![3, 6]);
        assert_eq!(raw.rows[0].cells[2], "0.996");
    }

    #[test]
    fn test_empty_text_has_no_header() {
        assert!(matches!(RawTable::parse(""), Err(TableError::MissingHeader)));
        assert!(matches!(RawTable::parse("\n \n"), Err(TableError::MissingHeader)));
    }

    #[test]
    fn test_from_lines_keeps_numbering() {
        let raw = RawTable::from_lines([
            (3, "Class|TIRS10|TIRS11".to_string()),
            (5, "Forest|0.9|0.8".to_string()),
            (8, " ".to_string()),
            (9, "Tundra|0.98|0.984".to_string()),
        ])
        .unwrap();
        let lines: Vec<usize> = raw.rows.iter().map(|r| r.line).collect();
        assert_eq!(lines, vec![5, 9]);
    }

    #[test]
    fn test_header_only() {
        let raw = RawTable::parse("Class").unwrap();
        assert!(raw.field_columns().is_empty());
        assert!(raw.rows.is_empty());
    }
}
