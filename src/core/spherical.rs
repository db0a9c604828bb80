/// Radius of the hotspot sphere in exported VR scenes, in meters.
pub const HOTSPOT_RADIUS: f64 = 5.0;

/// Sky rotation that lines the equirectangular texture up with the hotspot
/// convention below, so the horizontal center of the image faces the camera.
pub const SKY_ROTATION_DEG: &str = "0 -90 0";

/// Map percent image coordinates to spherical degrees.
///
/// `phi` covers the full horizontal wrap [0, 360]; `theta` covers
/// [-90, 90] with the image top at -90 (zenith) and the bottom at 90.
pub fn spherical_from_percent(x: f64, y: f64) -> (f64, f64) {
    let phi = (x / 100.0) * 360.0;
    let theta = (y / 100.0) * 180.0 - 90.0;
    (phi, theta)
}

/// Convert spherical degrees to a Y-up Cartesian position.
///
/// Convention: elevation is `-theta` (image top maps to the zenith),
/// azimuth is `phi` with 0 behind the camera and 180 straight ahead
/// (A-Frame cameras face -Z). The result always has length `radius`.
pub fn cartesian_from_spherical(phi_deg: f64, theta_deg: f64, radius: f64) -> [f64; 3] {
    let azimuth = phi_deg.to_radians();
    let elevation = (-theta_deg).to_radians();
    let x = radius * elevation.cos() * azimuth.sin();
    let y = radius * elevation.sin();
    let z = radius * elevation.cos() * azimuth.cos();
    [x, y, z]
}
