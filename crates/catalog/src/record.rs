use serde::{Deserialize, Serialize};

/// Which unit family a catalog's rows use.
///
/// The unit is declared per batch, never inferred from which file the rows
/// came from.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogKind {
    /// Two-field rows, angles in arcminutes; points land on the fixed
    /// reference sphere.
    AngleOnly,
    /// Three-field rows, angles in decimal degrees plus a redshift.
    RedshiftDegrees,
    /// Three-field rows, angles packed as `HHMMSS.s` / `DDMMSS` plus a
    /// redshift.
    RedshiftSexagesimal,
}

impl CatalogKind {
    pub fn has_redshift(self) -> bool {
        !matches!(self, CatalogKind::AngleOnly)
    }

    pub fn fields_per_row(self) -> usize {
        if self.has_redshift() { 3 } else { 2 }
    }
}

/// One catalog entry, immutable once parsed.
///
/// The angle fields stay in the catalog's native unit; conversion happens at
/// projection time, keyed by the catalog's kind.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CelestialPoint {
    pub ra: f64,
    pub dec: f64,
    /// Present only for redshift-bearing catalogs. Zero is a valid value
    /// (missing-data rows default to it) and maps to distance zero.
    pub redshift: Option<f64>,
}

impl CelestialPoint {
    pub fn angles(ra: f64, dec: f64) -> Self {
        Self {
            ra,
            dec,
            redshift: None,
        }
    }

    pub fn with_redshift(ra: f64, dec: f64, redshift: f64) -> Self {
        Self {
            ra,
            dec,
            redshift: Some(redshift),
        }
    }
}

/// An in-memory batch of parsed points plus the unit tag they were read
/// under. Owned for the process lifetime; never mutated after load.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pub kind: CatalogKind,
    pub points: Vec<CelestialPoint>,
}

impl Catalog {
    pub fn new(kind: CatalogKind) -> Self {
        Self {
            kind,
            points: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{Catalog, CatalogKind, CelestialPoint};

    #[test]
    fn kind_declares_row_arity() {
        assert_eq!(CatalogKind::AngleOnly.fields_per_row(), 2);
        assert_eq!(CatalogKind::RedshiftDegrees.fields_per_row(), 3);
        assert_eq!(CatalogKind::RedshiftSexagesimal.fields_per_row(), 3);
        assert!(!CatalogKind::AngleOnly.has_redshift());
        assert!(CatalogKind::RedshiftSexagesimal.has_redshift());
    }

    #[test]
    fn points_keep_native_units() {
        let p = CelestialPoint::angles(120.0, -45.0);
        assert_eq!(p.redshift, None);
        let q = CelestialPoint::with_redshift(120.0, -45.0, 0.0);
        assert_eq!(q.redshift, Some(0.0));

        let mut cat = Catalog::new(CatalogKind::AngleOnly);
        assert!(cat.is_empty());
        cat.points.push(p);
        assert_eq!(cat.len(), 1);
    }
}
