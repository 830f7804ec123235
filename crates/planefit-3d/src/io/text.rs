//! Plain-text tables of floating point numbers.
//!
//! Points are stored one per row as whitespace separated `x y z` values,
//! without a header. Blank lines and `#` comments are skipped. Planes are
//! stored as four lines holding `A`, `B`, `C` and `D`.
//!
//! Values are written in the `%.18e` notation, e.g.
//! `3.333333333333333148e-01`, which round-trips every `f64` exactly.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::{
    plane::{PlaneError, PlaneModel},
    pointcloud::PointCloud,
};

/// Error types for the text module.
#[derive(Debug, thiserror::Error)]
pub enum TextIoError {
    /// Error reading or writing file
    #[error("error reading or writing file")]
    Io(#[from] std::io::Error),

    /// A token is not a floating point number.
    #[error("line {line}: cannot parse '{token}' as a number")]
    Parse {
        /// The 1-based line number.
        line: usize,
        /// The offending token.
        token: String,
    },

    /// A row has the wrong number of columns.
    #[error("line {line}: expected {expected} columns, got {actual}")]
    ColumnCount {
        /// The 1-based line number.
        line: usize,
        /// The expected number of columns.
        expected: usize,
        /// The number of columns found.
        actual: usize,
    },

    /// A value is NaN or infinite.
    #[error("line {line}: value is not finite")]
    NonFinite {
        /// The 1-based line number.
        line: usize,
    },

    /// A plane file does not hold exactly four coefficients.
    #[error("expected 4 plane coefficients, got {actual}")]
    PlaneCoefficients {
        /// The number of coefficients found.
        actual: usize,
    },

    /// The coefficients do not describe a plane.
    #[error("invalid plane: {0}")]
    Plane(#[from] PlaneError),
}

/// Read a point table file and return a point cloud.
///
/// # Arguments
///
/// * `path` - The path to the text file.
///
/// # Returns
///
/// A point cloud with one point per data row.
pub fn read_points_txt(path: impl AsRef<Path>) -> Result<PointCloud, TextIoError> {
    // open the file and create a buffered reader
    let file = File::open(path)?;
    parse_points(BufReader::new(file))
}

/// Parse a point table from a buffered reader.
///
/// Every data row must hold exactly three finite numbers.
pub fn parse_points<R: BufRead>(reader: R) -> Result<PointCloud, TextIoError> {
    let mut points = Vec::new();
    for (line, tokens) in data_rows(reader) {
        let tokens = tokens?;
        if tokens.len() != 3 {
            return Err(TextIoError::ColumnCount {
                line,
                expected: 3,
                actual: tokens.len(),
            });
        }
        let mut point = [0.0; 3];
        for (dst, token) in point.iter_mut().zip(&tokens) {
            *dst = parse_value(line, token)?;
        }
        points.push(point);
    }
    Ok(PointCloud::new(points))
}

/// Write a point table, one `x y z` row per point.
pub fn write_points_txt(path: impl AsRef<Path>, points: &[[f64; 3]]) -> Result<(), TextIoError> {
    let mut writer = BufWriter::new(File::create(path)?);
    for p in points {
        writeln!(
            writer,
            "{} {} {}",
            format_scientific(p[0]),
            format_scientific(p[1]),
            format_scientific(p[2])
        )?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the plane coefficients `A`, `B`, `C`, `D`, one per line.
pub fn write_plane_txt(path: impl AsRef<Path>, plane: &PlaneModel) -> Result<(), TextIoError> {
    let mut writer = BufWriter::new(File::create(path)?);
    for value in plane.coefficients() {
        writeln!(writer, "{}", format_scientific(value))?;
    }
    writer.flush()?;
    Ok(())
}

/// Read the plane coefficients written by [`write_plane_txt`].
///
/// The four values may be laid out in any number of rows.
pub fn read_plane_txt(path: impl AsRef<Path>) -> Result<PlaneModel, TextIoError> {
    let file = File::open(path)?;
    let mut values = Vec::with_capacity(4);
    for (line, tokens) in data_rows(BufReader::new(file)) {
        for token in tokens? {
            values.push(parse_value(line, &token)?);
        }
    }
    match values.as_slice() {
        &[a, b, c, d] => Ok(PlaneModel::new(a, b, c, d)?),
        _ => Err(TextIoError::PlaneCoefficients {
            actual: values.len(),
        }),
    }
}

/// Format a value like C's `%.18e`, with a signed exponent of at least two digits.
pub fn format_scientific(value: f64) -> String {
    let s = format!("{value:.18e}");
    match s.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        // inf and NaN carry no exponent
        None => s,
    }
}

/// Iterate over the non-empty rows as `(1-based line number, tokens)`.
fn data_rows<R: BufRead>(
    reader: R,
) -> impl Iterator<Item = (usize, Result<Vec<String>, TextIoError>)> {
    reader
        .lines()
        .enumerate()
        .filter_map(|(i, line)| {
            let line = match line {
                Ok(line) => line,
                Err(e) => return Some((i + 1, Err(TextIoError::from(e)))),
            };
            let content = line.split('#').next().unwrap_or_default();
            let tokens = content
                .split_whitespace()
                .map(str::to_owned)
                .collect::<Vec<_>>();
            if tokens.is_empty() {
                None
            } else {
                Some((i + 1, Ok(tokens)))
            }
        })
}

fn parse_value(line: usize, token: &str) -> Result<f64, TextIoError> {
    let value = token.parse::<f64>().map_err(|_| TextIoError::Parse {
        line,
        token: token.to_string(),
    })?;
    if !value.is_finite() {
        return Err(TextIoError::NonFinite { line });
    }
    Ok(value)
}
