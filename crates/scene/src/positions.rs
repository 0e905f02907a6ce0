use catalog::{Catalog, CatalogKind, CelestialPoint};
use foundation::math::{Equatorial, Vec3, equatorial_to_world, hubble_distance_mpc};

/// World position of one catalog record.
///
/// Angle-only records sit on the reference sphere of `sphere_radius`;
/// redshift records replace that radius with the Hubble-law distance, so a
/// zero redshift collapses the point to the origin.
pub fn project_point(point: CelestialPoint, kind: CatalogKind, sphere_radius: f64) -> Vec3 {
    match kind {
        CatalogKind::AngleOnly => {
            let eq = Equatorial::from_arcmin(point.ra, point.dec);
            equatorial_to_world(eq, sphere_radius)
        }
        CatalogKind::RedshiftDegrees => {
            let eq = Equatorial::from_degrees(point.ra, point.dec);
            equatorial_to_world(eq, hubble_distance_mpc(point.redshift.unwrap_or(0.0)))
        }
        CatalogKind::RedshiftSexagesimal => {
            let eq = Equatorial::from_sexagesimal(point.ra, point.dec);
            equatorial_to_world(eq, hubble_distance_mpc(point.redshift.unwrap_or(0.0)))
        }
    }
}

/// Project a whole catalog at load time.
///
/// Output index `i` corresponds to `catalog.points[i]`. Catalogs are static
/// per run, so this is computed once and never re-run during the frame loop.
pub fn project_catalog(catalog: &Catalog, sphere_radius: f64) -> Vec<Vec3> {
    catalog
        .points
        .iter()
        .map(|&p| project_point(p, catalog.kind, sphere_radius))
        .collect()
}

#[cfg(test)]
mod tests {
    use catalog::{Catalog, CatalogKind, CelestialPoint};
    use foundation::math::hubble_distance_mpc;

    use super::{project_catalog, project_point};

    fn assert_close(a: f64, b: f64, eps: f64) {
        let diff = (a - b).abs();
        assert!(diff <= eps, "expected {a} ~= {b} (diff {diff})");
    }

    #[test]
    fn arcmin_points_stay_on_the_reference_sphere() {
        let mut cat = Catalog::new(CatalogKind::AngleOnly);
        cat.points.push(CelestialPoint::angles(0.0, 0.0));
        cat.points.push(CelestialPoint::angles(10_147.8, -3_133.62));
        cat.points.push(CelestialPoint::angles(60.0, 0.0));

        let positions = project_catalog(&cat, 50.0);
        assert_eq!(positions.len(), cat.len());
        assert_eq!(positions[0].x, 50.0);
        for pos in &positions {
            assert_close(pos.length(), 50.0, 1e-9);
        }
        // 60 arcmin = 1 degree of right ascension.
        assert_close(positions[2].x, 49.9924, 1e-3);
        assert_close(positions[2].z, 0.8726, 1e-3);
    }

    #[test]
    fn redshift_radius_follows_the_hubble_law() {
        let p = CelestialPoint::with_redshift(0.0, 0.0, 0.023);
        let pos = project_point(p, CatalogKind::RedshiftDegrees, 50.0);
        assert_close(pos.length(), hubble_distance_mpc(0.023), 1e-9);

        let doubled = project_point(
            CelestialPoint::with_redshift(0.0, 0.0, 0.046),
            CatalogKind::RedshiftDegrees,
            50.0,
        );
        assert_close(doubled.length(), 2.0 * pos.length(), 1e-6);
    }

    #[test]
    fn zero_redshift_collapses_to_origin() {
        let p = CelestialPoint::with_redshift(120.0, 45.0, 0.0);
        let pos = project_point(p, CatalogKind::RedshiftDegrees, 50.0);
        assert_eq!(pos.length(), 0.0);
    }

    #[test]
    fn sexagesimal_points_keep_declination_sign() {
        let below = project_point(
            CelestialPoint::with_redshift(0.0, -453_000.0, 0.01),
            CatalogKind::RedshiftSexagesimal,
            50.0,
        );
        let above = project_point(
            CelestialPoint::with_redshift(0.0, 453_000.0, 0.01),
            CatalogKind::RedshiftSexagesimal,
            50.0,
        );
        assert!(below.y < 0.0);
        assert_close(below.y, -above.y, 1e-9);
    }
}
