//! Metadata feature encoders.
//!
//! Pure functions turning a raw acquisition record into a fixed-length
//! numeric feature vector: `coords(32) ++ altitude(1) ++ camera(2) ++
//! temporal(10)` = 45 features per sample.

use crate::types::{ManifestError, ManifestResult, PatchMetadata};

/// Total feature-vector length produced by [`encode_patch`].
pub const FEATURE_LEN: usize = 45;

const COORD_ENC_SIZE: usize = 32;
const COORD_SCALE: f64 = 1e8;

const MIN_ALTITUDE: f64 = 0.0;
const MAX_ALTITUDE: f64 = 3164.909_912_109_4;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Sinusoidal positional encoding of a tile centroid.
///
/// Interleaves sin/cos Fourier features of `x` over the first half of the
/// vector and of `y` over the second half, with frequencies decaying
/// geometrically from 1. Inputs are scaled down by 1e8 so national-grid
/// coordinates land in a usable range. Output length is always 32.
pub fn encode_coordinates(x: f64, y: f64) -> Vec<f32> {
    let d = COORD_ENC_SIZE / 2;
    let x = x / COORD_SCALE;
    let y = y / COORD_SCALE;
    let mut enc = vec![0.0f32; COORD_ENC_SIZE];
    for i in 0..d / 2 {
        let freq = 1.0 / COORD_SCALE.powf(2.0 * i as f64 / d as f64);
        enc[2 * i] = (x * freq).sin() as f32;
        enc[2 * i + 1] = (x * freq).cos() as f32;
        enc[d + 2 * i] = (y * freq).sin() as f32;
        enc[d + 2 * i + 1] = (y * freq).cos() as f32;
    }
    enc
}

/// Min-max normalization of tile altitude against the training-range
/// extrema. Not clamped: altitudes outside the range map outside [0, 1].
pub fn normalize_altitude(alti: f64) -> Vec<f32> {
    vec![((alti - MIN_ALTITUDE) / (MAX_ALTITUDE - MIN_ALTITUDE)) as f32]
}

/// One-hot camera family: `[1, 0]` for UltraCam Eagle variants, `[0, 1]`
/// for everything else.
pub fn encode_camera(cam: &str) -> Vec<f32> {
    if cam.contains("UCE") {
        vec![1.0, 0.0]
    } else {
        vec![0.0, 1.0]
    }
}

/// Cyclical date/time encoding: one-hot year over 2018-2021, then (sin, cos)
/// pairs for month, day-of-month, and second-of-day, each remapped from
/// [-1, 1] to [0, 1]. Output length is always 10.
///
/// Years outside 2018-2021 are rejected rather than silently mis-encoded.
pub fn encode_datetime(date: &str, time: &str) -> ManifestResult<Vec<f32>> {
    let bad_date = || ManifestError::BadDate {
        value: date.to_string(),
    };
    let bad_time = || ManifestError::BadTime {
        value: time.to_string(),
    };

    let mut fields = date.split('-');
    let (year, month, day) = match (fields.next(), fields.next(), fields.next(), fields.next()) {
        (Some(y), Some(m), Some(d), None) => (y, m, d),
        _ => return Err(bad_date()),
    };
    let year: i32 = year.parse().map_err(|_| bad_date())?;
    let month: u32 = month.parse().map_err(|_| bad_date())?;
    let day: u32 = day.parse().map_err(|_| bad_date())?;

    let enc_year: [f32; 4] = match year {
        2018 => [1.0, 0.0, 0.0, 0.0],
        2019 => [0.0, 1.0, 0.0, 0.0],
        2020 => [0.0, 0.0, 1.0, 0.0],
        2021 => [0.0, 0.0, 0.0, 1.0],
        _ => return Err(ManifestError::UnsupportedYear { year }),
    };

    let (hours, minutes) = time.split_once('h').ok_or_else(bad_time)?;
    let hours: u32 = hours.parse().map_err(|_| bad_time())?;
    let minutes: u32 = minutes.parse().map_err(|_| bad_time())?;
    let sec_day = (hours * 3600 + minutes * 60) as f64;

    let tau = std::f64::consts::TAU;
    let month_angle = tau * (month as f64 - 1.0) / 12.0;
    let day_angle = tau * day as f64 / 31.0;
    let time_angle = tau * sec_day / SECONDS_PER_DAY;

    let mut enc = Vec::with_capacity(10);
    enc.extend_from_slice(&enc_year);
    for angle in [month_angle, day_angle, time_angle] {
        enc.push(to_unit(angle.sin()));
        enc.push(to_unit(angle.cos()));
    }
    Ok(enc)
}

// Remap [-1, 1] to [0, 1].
fn to_unit(v: f64) -> f32 {
    ((v + 1.0) / 2.0) as f32
}

/// Full feature vector for one acquisition record, in the fixed
/// coords/altitude/camera/temporal order.
pub fn encode_patch(meta: &PatchMetadata) -> ManifestResult<Vec<f32>> {
    let mut features = encode_coordinates(meta.patch_centroid_x, meta.patch_centroid_y);
    features.extend(normalize_altitude(meta.patch_centroid_z));
    features.extend(encode_camera(&meta.camera));
    features.extend(encode_datetime(&meta.date, &meta.time)?);
    debug_assert_eq!(features.len(), FEATURE_LEN);
    Ok(features)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinates_deterministic_fixed_length() {
        let a = encode_coordinates(648_151.5, 6_864_248.3);
        let b = encode_coordinates(648_151.5, 6_864_248.3);
        assert_eq!(a.len(), 32);
        assert_eq!(a, b);

        // Length holds regardless of magnitude.
        assert_eq!(encode_coordinates(0.0, 0.0).len(), 32);
        assert_eq!(encode_coordinates(1e12, -1e12).len(), 32);
    }

    #[test]
    fn coordinates_zero_origin_layout() {
        // At the origin every sin slot is 0 and every cos slot is 1.
        let enc = encode_coordinates(0.0, 0.0);
        for (i, v) in enc.iter().enumerate() {
            if i % 2 == 0 {
                assert_eq!(*v, 0.0, "sin slot {i}");
            } else {
                assert_eq!(*v, 1.0, "cos slot {i}");
            }
        }
    }

    #[test]
    fn altitude_endpoints() {
        assert_eq!(normalize_altitude(0.0), vec![0.0]);
        assert_eq!(normalize_altitude(3164.9099121094), vec![1.0]);
        // Unclamped outside the training range.
        assert!(normalize_altitude(-10.0)[0] < 0.0);
        assert!(normalize_altitude(4000.0)[0] > 1.0);
    }

    #[test]
    fn camera_one_hot() {
        assert_eq!(encode_camera("UCE-M3"), vec![1.0, 0.0]);
        assert_eq!(encode_camera("other"), vec![0.0, 1.0]);
    }

    #[test]
    fn datetime_year_one_hot() {
        for year in 2018..=2021 {
            let enc = encode_datetime(&format!("{year}-06-15"), "10h30").unwrap();
            assert_eq!(enc.len(), 10);
            let one_hot_sum: f32 = enc[..4].iter().sum();
            assert_eq!(one_hot_sum, 1.0);
        }
    }

    #[test]
    fn datetime_cyclical_range() {
        let enc = encode_datetime("2020-01-31", "23h59").unwrap();
        for v in &enc[4..] {
            assert!((0.0..=1.0).contains(v), "cyclical term {v} out of [0,1]");
        }
    }

    #[test]
    fn datetime_rejects_unsupported_year() {
        let err = encode_datetime("2017-06-15", "10h30").unwrap_err();
        assert!(matches!(err, ManifestError::UnsupportedYear { year: 2017 }));
        let err = encode_datetime("2022-06-15", "10h30").unwrap_err();
        assert!(matches!(err, ManifestError::UnsupportedYear { year: 2022 }));
    }

    #[test]
    fn datetime_rejects_malformed_inputs() {
        assert!(matches!(
            encode_datetime("2020/06/15", "10h30").unwrap_err(),
            ManifestError::BadDate { .. }
        ));
        assert!(matches!(
            encode_datetime("2020-06", "10h30").unwrap_err(),
            ManifestError::BadDate { .. }
        ));
        assert!(matches!(
            encode_datetime("2020-06-15", "10:30").unwrap_err(),
            ManifestError::BadTime { .. }
        ));
    }

    #[test]
    fn patch_vector_length() {
        let meta = PatchMetadata {
            patch_centroid_x: 648_151.5,
            patch_centroid_y: 6_864_248.3,
            patch_centroid_z: 120.4,
            camera: "UCE-M3".into(),
            date: "2019-04-02".into(),
            time: "09h15".into(),
        };
        let features = encode_patch(&meta).unwrap();
        assert_eq!(features.len(), FEATURE_LEN);
        // Camera slots sit right after coords + altitude.
        assert_eq!(&features[33..35], &[1.0, 0.0]);
    }
}
