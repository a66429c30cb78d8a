use crate::orbit::Subpoint;

/// WGS-84 semi-major axis (m)
pub const WGS84_A: f64 = 6_378_137.0;
/// WGS-84 first eccentricity squared
pub const WGS84_E2: f64 = 6.694_379_990_14e-3;

/// Rotate a TEME position into the Earth-fixed frame by the Greenwich sidereal angle
pub fn teme_to_ecef_position(pos_teme: [f64; 3], gmst: f64) -> [f64; 3] {
    let cos_gmst = gmst.cos();
    let sin_gmst = gmst.sin();
    [
        pos_teme[0] * cos_gmst + pos_teme[1] * sin_gmst,
        -pos_teme[0] * sin_gmst + pos_teme[1] * cos_gmst,
        pos_teme[2],
    ]
}

/// Earth-fixed cartesian (m) to WGS-84 geodetic coordinates.
///
/// Closed form after Olson, D. K. (1996), "Converting Earth-Centered, Earth-Fixed
/// Coordinates to Geodetic Coordinates", IEEE Trans. Aerospace and Electronic Systems 32(1).
/// Points within 100 km of the geocenter have no meaningful subpoint and map to the origin.
pub fn ecef_to_geodetic(p: [f64; 3]) -> Subpoint {
    let a1 = WGS84_A * WGS84_E2;
    let a2 = a1 * a1;
    let a3 = a1 * WGS84_E2 / 2.0;
    let a4 = 2.5 * a2;
    let a5 = a1 + a3;
    let a6 = 1.0 - WGS84_E2;

    let [x, y, z] = p;
    let zp = z.abs();
    let w2 = x * x + y * y;
    let w = w2.sqrt();
    let z2 = z * z;
    let r2 = w2 + z2;
    let r = r2.sqrt();

    if r < 100_000.0 {
        return Subpoint {
            latitude_deg: 0.0,
            longitude_deg: 0.0,
            altitude_m: 0.0,
        };
    }

    let lon = y.atan2(x);
    let s2 = z2 / r2;
    let c2 = w2 / r2;
    let mut u = a2 / r;
    let mut v = a3 - a4 / r;

    let (mut lat, s, c, ss) = if c2 > 0.3 {
        // closer to the equator: solve through the sine
        let s = (zp / r) * (1.0 + c2 * (a1 + u + s2 * v) / r);
        let ss = s * s;
        (s.asin(), s, (1.0 - ss).sqrt(), ss)
    } else {
        let c = (w / r) * (1.0 - s2 * (a5 - u - c2 * v) / r);
        let ss = 1.0 - c * c;
        (c.acos(), ss.sqrt(), c, ss)
    };

    let g = 1.0 - WGS84_E2 * ss;
    let rg = WGS84_A / g.sqrt();
    let rf = a6 * rg;
    u = w - rg * c;
    v = zp - rf * s;
    let f = c * u + s * v;
    let m = c * v - s * u;
    let dlat = m / (rf / g + f);

    lat += dlat;
    let alt = f + m * dlat / 2.0;
    if z < 0.0 {
        lat = -lat;
    }

    Subpoint {
        latitude_deg: lat.to_degrees(),
        longitude_deg: lon.to_degrees(),
        altitude_m: alt,
    }
}
