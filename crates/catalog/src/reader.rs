use std::fs;
use std::path::{Path, PathBuf};

use crate::record::{Catalog, CatalogKind, CelestialPoint};

/// Row-level failures while tokenizing catalog text.
///
/// Line numbers are 1-based and count the header line.
#[derive(Debug)]
pub enum CatalogParseError {
    MissingHeader,
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },
    BadNumber {
        line: usize,
        field: &'static str,
        token: String,
    },
}

impl std::fmt::Display for CatalogParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogParseError::MissingHeader => write!(f, "catalog has no header line"),
            CatalogParseError::FieldCount {
                line,
                expected,
                found,
            } => {
                write!(f, "line {line}: expected {expected} fields, found {found}")
            }
            CatalogParseError::BadNumber { line, field, token } => {
                write!(f, "line {line}: {field} is not a number: {token:?}")
            }
        }
    }
}

impl std::error::Error for CatalogParseError {}

#[derive(Debug)]
pub enum CatalogReadError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: CatalogParseError,
    },
}

impl std::fmt::Display for CatalogReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogReadError::Io { path, source } => {
                write!(f, "failed to read catalog {}: {source}", path.display())
            }
            CatalogReadError::Parse { path, source } => {
                write!(f, "failed to parse catalog {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for CatalogReadError {}

/// Parse header-prefixed catalog text into records.
///
/// Rows are whitespace-separated numeric fields (the reference data is
/// tab-separated); blank lines are skipped. Arity and numeric validity are
/// enforced here so downstream transforms can assume well-formed input.
pub fn parse_catalog(text: &str, kind: CatalogKind) -> Result<Catalog, CatalogParseError> {
    let mut lines = text.lines().enumerate();
    // The header line is required but its content is not interpreted.
    if lines.next().is_none() {
        return Err(CatalogParseError::MissingHeader);
    }

    let expected = kind.fields_per_row();
    let mut catalog = Catalog::new(kind);

    for (index, line) in lines {
        let line_no = index + 1;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }
        if fields.len() != expected {
            return Err(CatalogParseError::FieldCount {
                line: line_no,
                expected,
                found: fields.len(),
            });
        }

        let ra = parse_field(fields[0], line_no, "right ascension")?;
        let dec = parse_field(fields[1], line_no, "declination")?;
        let point = if kind.has_redshift() {
            let redshift = parse_field(fields[2], line_no, "redshift")?;
            CelestialPoint::with_redshift(ra, dec, redshift)
        } else {
            CelestialPoint::angles(ra, dec)
        };
        catalog.points.push(point);
    }

    Ok(catalog)
}

fn parse_field(token: &str, line: usize, field: &'static str) -> Result<f64, CatalogParseError> {
    token
        .parse::<f64>()
        .map_err(|_| CatalogParseError::BadNumber {
            line,
            field,
            token: token.to_string(),
        })
}

/// Read and parse a catalog file.
pub fn read_catalog(
    path: impl AsRef<Path>,
    kind: CatalogKind,
) -> Result<Catalog, CatalogReadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| CatalogReadError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_catalog(&text, kind).map_err(|e| CatalogReadError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}
