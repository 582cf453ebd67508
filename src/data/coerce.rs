use super::model::CellValue;

/// Sniff a cell: real number first, then complex (`a±bj`), else the text as-is.
///
/// Never fails. Surrounding whitespace is ignored for the numeric attempts but
/// kept in the returned text.
pub fn coerce(cell: &str) -> CellValue {
    if let Ok(v) = cell.trim().parse::<f64>() {
        return CellValue::Float(v);
    }
    if let Some((re, im)) = parse_complex(cell) {
        return CellValue::Complex { re, im };
    }
    CellValue::Text(cell.to_string())
}

/// Parse `[(] real [±imag j] [)]`, `imagj` or a bare `j`.
fn parse_complex(cell: &str) -> Option<(f64, f64)> {
    let mut s = cell.trim();
    if let Some(inner) = s.strip_prefix('(') {
        s = inner.strip_suffix(')')?.trim();
    }
    if s.is_empty() {
        return None;
    }

    let Some(body) = s.strip_suffix(['j', 'J']) else {
        // "(1.5)" is a complex with no imaginary part
        return s.parse::<f64>().ok().map(|re| (re, 0.0));
    };

    match split_at_sign(body) {
        Some(idx) => {
            let re = body[..idx].parse::<f64>().ok()?;
            let im = parse_imag(&body[idx..])?;
            Some((re, im))
        }
        None => Some((0.0, parse_imag(body)?)),
    }
}

/// Index of the sign separating the real and imaginary parts, skipping a
/// leading sign and exponent signs.
fn split_at_sign(body: &str) -> Option<usize> {
    let bytes = body.as_bytes();
    (1..bytes.len())
        .rev()
        .find(|&i| matches!(bytes[i], b'+' | b'-') && !matches!(bytes[i - 1], b'e' | b'E'))
}

fn parse_imag(s: &str) -> Option<f64> {
    match s {
        "" | "+" => Some(1.0),
        "-" => Some(-1.0),
        _ => s.parse::<f64>().ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complex(re: f64, im: f64) -> CellValue {
        CellValue::Complex { re, im }
    }

    #[test]
    fn test_floats() {
        assert_eq!(coerce("0.971"), CellValue::Float(0.971));
        assert_eq!(coerce("-2.78009"), CellValue::Float(-2.78009));
        assert_eq!(coerce(" 1e-3 "), CellValue::Float(0.001));
        assert_eq!(coerce("5."), CellValue::Float(5.0));
        assert!(matches!(coerce("inf"), CellValue::Float(v) if v.is_infinite()));
        assert!(matches!(coerce("NaN"), CellValue::Float(v) if v.is_nan()));
    }

    #[test]
    fn test_complex() {
        assert_eq!(coerce("2j"), complex(0.0, 2.0));
        assert_eq!(coerce("j"), complex(0.0, 1.0));
        assert_eq!(coerce("-J"), complex(0.0, -1.0));
        assert_eq!(coerce("1+2j"), complex(1.0, 2.0));
        assert_eq!(coerce("1e3-4.5J"), complex(1000.0, -4.5));
        assert_eq!(coerce("1e+2j"), complex(0.0, 100.0));
        assert_eq!(coerce("(3-j)"), complex(3.0, -1.0));
        assert_eq!(coerce("( 1.5 )"), complex(1.5, 0.0));
    }

    #[test]
    fn test_text_is_kept_verbatim() {
        assert_eq!(coerce("abc"), CellValue::Text("abc".into()));
        assert_eq!(coerce(""), CellValue::Text(String::new()));
        assert_eq!(coerce("0.10-3.0"), CellValue::Text("0.10-3.0".into()));
        assert_eq!(coerce(" x "), CellValue::Text(" x ".into()));
        assert_eq!(coerce("1 + 2j"), CellValue::Text("1 + 2j".into()));
        assert_eq!(coerce("1+j+"), CellValue::Text("1+j+".into()));
        assert_eq!(coerce("()"), CellValue::Text("()".into()));
        assert_eq!(coerce("(1"), CellValue::Text("(1".into()));
    }
}
