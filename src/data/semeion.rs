use std::io::{Error, ErrorKind};
use std::path::Path;

use crate::data::data_item::DataItem;

/// Side length of a Semeion glyph.
pub const SIDE: usize = 16;
/// Pixels per glyph.
pub const PIXELS: usize = SIDE * SIDE;
/// Digit classes.
pub const CLASSES: usize = 10;

/// Reads a Semeion handwritten-digit file (`semeion.data`).
pub fn load<P: AsRef<Path>>(path: P) -> std::io::Result<Vec<DataItem>> {
    let text = std::fs::read_to_string(path)?;
    parse(&text)
}

/// Parses Semeion records: one glyph per line, 256 pixel values followed by a
/// 10-way one-hot digit, all whitespace separated. Blank lines are skipped;
/// trailing columns beyond the 266th are ignored.
pub fn parse(text: &str) -> std::io::Result<Vec<DataItem>> {
    let mut items = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let values = line
            .split_whitespace()
            .map(|field| field.parse::<f64>())
            .collect::<Result<Vec<f64>, _>>()
            .map_err(|e| invalid(line_no, &e.to_string()))?;

        if values.len() < PIXELS + CLASSES {
            return Err(invalid(
                line_no,
                &format!("expected {} values, found {}", PIXELS + CLASSES, values.len()),
            ));
        }

        items.push(DataItem::new(
            values[..PIXELS].to_vec(),
            values[PIXELS..PIXELS + CLASSES].to_vec(),
        ));
    }
    Ok(items)
}

fn invalid(line_no: usize, msg: &str) -> Error {
    Error::new(ErrorKind::InvalidData, format!("semeion line {}: {}", line_no + 1, msg))
}

#[cfg(test)]
mod tests {
    use super::{load, parse, CLASSES, PIXELS};
    use std::io::ErrorKind;

    fn record(digit: usize) -> String {
        let mut fields: Vec<String> = (0..PIXELS).map(|i| format!("{}.0000", i % 2)).collect();
        fields.extend((0..CLASSES).map(|c| if c == digit { "1".into() } else { "0".into() }));
        fields.join(" ")
    }

    #[test]
    fn parses_pixels_and_one_hot() {
        let text = format!("{} \n\n{}\n", record(3), record(9));
        let items = parse(&text).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].input.len(), PIXELS);
        assert_eq!(items[0].input[1], 1.0);
        assert_eq!(items[0].label(), 3);
        assert_eq!(items[1].label(), 9);
    }

    #[test]
    fn short_line_reports_line_number() {
        let text = format!("{}\n1 0 1\n", record(0));
        let err = parse(&text).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
        assert!(err.to_string().starts_with("semeion line 2:"), "{err}");
    }

    #[test]
    fn load_reads_file_from_disk() {
        let path = std::env::temp_dir().join(format!("gate-nn-semeion-{}.data", std::process::id()));
        std::fs::write(&path, format!("{}\n{}\n", record(4), record(7))).unwrap();
        let items = load(&path);
        std::fs::remove_file(&path).unwrap();

        let items = items.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].label(), 4);
        assert_eq!(items[1].label(), 7);
    }

    #[test]
    fn load_reports_missing_file() {
        let path = std::env::temp_dir().join(format!("gate-nn-missing-{}.data", std::process::id()));
        let err = load(&path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn non_numeric_field_is_rejected() {
        let text = record(1).replacen("0.0000", "x", 1);
        let err = parse(&text).unwrap_err();
        assert!(err.to_string().starts_with("semeion line 1:"));
    }
}
