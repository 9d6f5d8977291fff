//! Comma-separated reference tables.
//!
//! Two schemas, both with a header row naming the columns:
//!
//! ```text
//! Illuminant,X,Y,Z
//! D65,0.95047,1.00000,1.08883
//!
//! Name,Reference White,Red Primary x,Red Primary y,Green Primary x,Green Primary y,Blue Primary x,Blue Primary y
//! sRGB,D65,0.6400,0.3300,0.3000,0.6000,0.1500,0.0600
//! ```
//!
//! Columns are located by header name, so column order and extra columns do
//! not matter. Blank lines and lines starting with `#` are skipped, and
//! fields may be wrapped in double quotes.

use std::io::BufRead;

use colorimetry_core::{Illuminant, RgbSpaceId};
use colorimetry_math::Vec3;

use crate::error::{DataError, DataResult};

/// One row of the illuminant table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IlluminantRecord {
    /// Which illuminant.
    pub illuminant: Illuminant,
    /// White point tristimulus values.
    pub xyz: Vec3,
}

/// One row of the RGB working-space table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RgbSpaceRecord {
    /// Which working space.
    pub space: RgbSpaceId,
    /// Reference white illuminant.
    pub white: Illuminant,
    /// Red primary (x, y) chromaticity
    pub red: (f64, f64),
    /// Green primary (x, y) chromaticity
    pub green: (f64, f64),
    /// Blue primary (x, y) chromaticity
    pub blue: (f64, f64),
}

impl RgbSpaceRecord {
    /// Primaries in R, G, B order.
    #[inline]
    pub fn primaries(&self) -> [(f64, f64); 3] {
        [self.red, self.green, self.blue]
    }
}

/// Parses the illuminant table.
pub fn parse_illuminants<R: BufRead>(reader: R) -> DataResult<Vec<IlluminantRecord>> {
    let table = Table::read(reader)?;
    let name = table.column("Illuminant")?;
    let x = table.column("X")?;
    let y = table.column("Y")?;
    let z = table.column("Z")?;

    table
        .rows
        .iter()
        .map(|row| -> DataResult<IlluminantRecord> {
            Ok(IlluminantRecord {
                illuminant: row.parse_name(name)?,
                xyz: Vec3::new(row.number(x)?, row.number(y)?, row.number(z)?),
            })
        })
        .collect()
}

/// Parses the RGB working-space table.
pub fn parse_rgb_spaces<R: BufRead>(reader: R) -> DataResult<Vec<RgbSpaceRecord>> {
    let table = Table::read(reader)?;
    let name = table.column("Name")?;
    let white = table.column("Reference White")?;
    let cols = [
        table.column("Red Primary x")?,
        table.column("Red Primary y")?,
        table.column("Green Primary x")?,
        table.column("Green Primary y")?,
        table.column("Blue Primary x")?,
        table.column("Blue Primary y")?,
    ];

    table
        .rows
        .iter()
        .map(|row| -> DataResult<RgbSpaceRecord> {
            let mut v = [0.0_f64; 6];
            for (slot, &col) in v.iter_mut().zip(cols.iter()) {
                *slot = row.number(col)?;
            }
            Ok(RgbSpaceRecord {
                space: row.parse_name(name)?,
                white: row.parse_name(white)?,
                red: (v[0], v[1]),
                green: (v[2], v[3]),
                blue: (v[4], v[5]),
            })
        })
        .collect()
}

// ============================================================================
// Line-level parsing
// ============================================================================

struct Row {
    line: usize,
    fields: Vec<String>,
}

impl Row {
    fn field(&self, col: usize) -> DataResult<&str> {
        self.fields
            .get(col)
            .map(String::as_str)
            .ok_or_else(|| DataError::parse(self.line, format!("missing field {}", col + 1)))
    }

    fn number(&self, col: usize) -> DataResult<f64> {
        let raw = self.field(col)?;
        let v: f64 = raw
            .parse()
            .map_err(|_| DataError::parse(self.line, format!("invalid number: {:?}", raw)))?;
        if !v.is_finite() {
            return Err(DataError::parse(self.line, format!("non-finite number: {:?}", raw)));
        }
        Ok(v)
    }

    fn parse_name<T: std::str::FromStr>(&self, col: usize) -> DataResult<T>
    where
        T::Err: std::fmt::Display,
    {
        let raw = self.field(col)?;
        raw.parse().map_err(|e: T::Err| DataError::parse(self.line, e.to_string()))
    }
}

struct Table {
    header: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    fn read<R: BufRead>(reader: R) -> DataResult<Self> {
        let mut header: Option<Vec<String>> = None;
        let mut rows = Vec::new();

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();

            // Skip empty lines and comments
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let fields: Vec<String> = line.split(',').map(unquote).collect();
            if header.is_none() {
                header = Some(fields);
            } else {
                rows.push(Row { line: idx + 1, fields });
            }
        }

        let header = header.ok_or_else(|| DataError::parse(1, "empty table"))?;
        Ok(Self { header, rows })
    }

    fn column(&self, name: &'static str) -> DataResult<usize> {
        self.header
            .iter()
            .position(|h| h == name)
            .ok_or(DataError::MissingColumn { column: name })
    }
}

fn unquote(field: &str) -> String {
    let field = field.trim();
    field
        .strip_prefix('"')
        .and_then(|f| f.strip_suffix('"'))
        .unwrap_or(field)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_illuminants() {
        let text = "Illuminant,X,Y,Z\nD65,0.95047,1.0,1.08883\n\n# comment\nE,1,1,1\n";
        let rows = parse_illuminants(Cursor::new(text)).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].illuminant, Illuminant::D65);
        assert_eq!(rows[0].xyz, Vec3::new(0.95047, 1.0, 1.08883));
        assert_eq!(rows[1].illuminant, Illuminant::E);
    }

    #[test]
    fn test_columns_by_name() {
        let text = "Z,Y,Illuminant,X,Note\n0.82521,1.0,\"D50\",0.96422,ICC\n";
        let rows = parse_illuminants(Cursor::new(text)).unwrap();
        assert_eq!(rows[0].illuminant, Illuminant::D50);
        assert_eq!(rows[0].xyz, Vec3::new(0.96422, 1.0, 0.82521));
    }

    #[test]
    fn test_missing_column() {
        let text = "Illuminant,X,Y\nD65,0.95,1.0\n";
        let err = parse_illuminants(Cursor::new(text)).unwrap_err();
        assert!(matches!(err, DataError::MissingColumn { column: "Z" }));
    }

    #[test]
    fn test_bad_number_reports_line() {
        let text = "Illuminant,X,Y,Z\nD65,0.95,1.0,1.08\nA,abc,1.0,0.35\n";
        match parse_illuminants(Cursor::new(text)).unwrap_err() {
            DataError::Parse { line, reason } => {
                assert_eq!(line, 3);
                assert!(reason.contains("abc"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unknown_illuminant_name() {
        let text = "Illuminant,X,Y,Z\nD93,0.95,1.0,1.08\n";
        let err = parse_illuminants(Cursor::new(text)).unwrap_err();
        assert!(matches!(err, DataError::Parse { line: 2, .. }));
    }

    #[test]
    fn test_parse_rgb_spaces() {
        let text = "Name,Reference White,Red Primary x,Red Primary y,Green Primary x,\
                    Green Primary y,Blue Primary x,Blue Primary y\n\
                    PAL/SECAM RGB,D65,0.64,0.33,0.29,0.60,0.15,0.06\n";
        let rows = parse_rgb_spaces(Cursor::new(text)).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].space, RgbSpaceId::PalSecamRgb);
        assert_eq!(rows[0].white, Illuminant::D65);
        assert_eq!(rows[0].primaries()[1], (0.29, 0.60));
    }

    #[test]
    fn test_empty_table() {
        assert!(parse_rgb_spaces(Cursor::new("\n# nothing\n")).is_err());
    }

    #[test]
    fn test_builtin_tables_parse() {
        let ill = parse_illuminants(Cursor::new(crate::BUILTIN_ILLUMINANTS)).unwrap();
        let rgb = parse_rgb_spaces(Cursor::new(crate::BUILTIN_RGB_SPACES)).unwrap();
        assert_eq!(ill.len(), Illuminant::ALL.len());
        assert_eq!(rgb.len(), RgbSpaceId::ALL.len());
    }
}
