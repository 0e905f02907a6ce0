use super::Vec3;

/// Speed of light (km/s).
pub const SPEED_OF_LIGHT_KM_S: f64 = 299_792.458;
/// Hubble constant (km/s per Mpc).
pub const HUBBLE_KM_S_PER_MPC: f64 = 70.0;

/// Equatorial sky coordinates in radians.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Equatorial {
    pub ra_rad: f64,
    pub dec_rad: f64,
}

impl Equatorial {
    pub fn new(ra_rad: f64, dec_rad: f64) -> Self {
        Self { ra_rad, dec_rad }
    }

    /// Angles given in arcminutes (1/60 of a degree).
    pub fn from_arcmin(ra_arcmin: f64, dec_arcmin: f64) -> Self {
        Self::from_degrees(ra_arcmin / 60.0, dec_arcmin / 60.0)
    }

    pub fn from_degrees(ra_deg: f64, dec_deg: f64) -> Self {
        Self::new(ra_deg.to_radians(), dec_deg.to_radians())
    }

    /// Angles given as packed sexagesimal numerics: right ascension as
    /// `HHMMSS.s` (15 degrees per hour), declination as `DDMMSS`.
    ///
    /// A negative declination applies to the whole angle; the minute and
    /// second fields are always positive offsets from the degree field.
    pub fn from_sexagesimal(ra_hhmmss: f64, dec_ddmmss: f64) -> Self {
        let (h, m, s) = split_sexagesimal(ra_hhmmss.abs());
        let ra_deg = 15.0 * (h + m / 60.0 + s / 3600.0);

        let sign = if dec_ddmmss < 0.0 { -1.0 } else { 1.0 };
        let (d, m, s) = split_sexagesimal(dec_ddmmss.abs());
        let dec_deg = sign * (d + m / 60.0 + s / 3600.0);

        Self::from_degrees(ra_deg, dec_deg)
    }
}

/// Break a packed `XXMMSS.s` value into its whole/minute/second fields.
fn split_sexagesimal(packed: f64) -> (f64, f64, f64) {
    let whole = (packed / 10_000.0).trunc();
    let minutes = ((packed - whole * 10_000.0) / 100.0).trunc();
    let seconds = packed - whole * 10_000.0 - minutes * 100.0;
    (whole, minutes, seconds)
}

/// Project equatorial angles onto a sphere of the given radius.
///
/// Declination feeds `Y = R sin(dec)` directly (declination measured from the
/// equatorial plane, not a colatitude). This matches the reference
/// visualization and is not the standard physics spherical convention.
pub fn equatorial_to_world(eq: Equatorial, radius: f64) -> Vec3 {
    let cos_dec = eq.dec_rad.cos();
    Vec3::new(
        radius * eq.ra_rad.cos() * cos_dec,
        radius * eq.dec_rad.sin(),
        radius * eq.ra_rad.sin() * cos_dec,
    )
}

/// Linear Hubble-law distance estimate (Mpc) from a redshift.
///
/// Zero redshift is valid input and yields distance zero.
pub fn hubble_distance_mpc(redshift: f64) -> f64 {
    SPEED_OF_LIGHT_KM_S * redshift / HUBBLE_KM_S_PER_MPC
}
