use crate::domain::model::GeoPoint;

/// Latitude shift per point index, in degrees. Large enough to pull
/// coincident segments of overlapping services apart on screen, small
/// enough not to read as a different position.
pub const LAT_OFFSET_STEP: f64 = 0.003;

/// Cosmetic separation of overlapping path segments: point `i` moves
/// `i * LAT_OFFSET_STEP` degrees north, longitude untouched.
///
/// Rendering only. The output must never feed matching, persistence,
/// or any distance computation.
pub fn offset_geometry(points: &[GeoPoint]) -> Vec<GeoPoint> {
    points
        .iter()
        .enumerate()
        .map(|(i, p)| GeoPoint {
            lat: p.lat + i as f64 * LAT_OFFSET_STEP,
            lng: p.lng,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shifts_latitude_by_index_and_leaves_longitude_alone() {
        let points = vec![
            GeoPoint { lat: 35.1, lng: 129.0 },
            GeoPoint { lat: 31.2, lng: 121.5 },
            GeoPoint { lat: 31.2, lng: 121.5 },
        ];
        let shifted = offset_geometry(&points);

        assert_eq!(shifted.len(), points.len());
        for (i, (orig, out)) in points.iter().zip(&shifted).enumerate() {
            assert_eq!(out.lat, orig.lat + i as f64 * LAT_OFFSET_STEP);
            assert_eq!(out.lng, orig.lng);
        }
    }

    #[test]
    fn duplicate_points_end_up_separated() {
        let points = vec![GeoPoint { lat: 10.0, lng: 20.0 }; 2];
        let shifted = offset_geometry(&points);
        assert_ne!(shifted[0], shifted[1]);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(offset_geometry(&[]).is_empty());
    }

    #[test]
    fn is_a_pure_function_of_index_and_point() {
        let points = vec![
            GeoPoint { lat: 1.0, lng: 2.0 },
            GeoPoint { lat: 3.0, lng: 4.0 },
        ];
        assert_eq!(offset_geometry(&points), offset_geometry(&points));
    }
}
