pub const EARTH_RADIUS_KM: f64 = 6371.0;

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    pub fn distance_km(&self, other: &LatLon) -> f64 {
        haversine_distance_km(self.lat, self.lon, other.lat, other.lon)
    }
}

/// Great-circle distance in kilometers between two points given in degrees.
pub fn haversine_distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1 = lat1.to_radians();
    let lon1 = lon1.to_radians();
    let lat2 = lat2.to_radians();
    let lon2 = lon2.to_radians();

    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;

    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    // Rounding can leave a just outside [0, 1] near antipodes, which makes the roots NaN
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

// Inserts a comma every three digits of the integer part
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    grouped
}

pub fn format_thousands(value: u64) -> String {
    group_thousands(&value.to_string())
}

/// Formats a float with a fixed number of decimals and thousands separators.
pub fn format_thousands_f64(value: f64, decimals: usize) -> String {
    let text = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match text.find('.') {
        Some(index) => text.split_at(index),
        None => (text.as_str(), ""),
    };

    let sign = if value.is_sign_negative() && text.chars().any(|c| c != '0' && c != '.') {
        "-"
    } else {
        ""
    };

    format!("{}{}{}", sign, group_thousands(int_part), frac_part)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ICN: LatLon = LatLon {
        lat: 37.469101,
        lon: 126.450996,
    };
    const LAX: LatLon = LatLon {
        lat: 33.94250107,
        lon: -118.4079971,
    };

    #[test]
    fn same_point_is_zero() {
        for &(lat, lon) in &[(0.0, 0.0), (37.46, 126.44), (-89.9, -179.9), (90.0, 180.0)] {
            assert_eq!(haversine_distance_km(lat, lon, lat, lon), 0.0);
        }
    }

    #[test]
    fn distance_is_symmetric() {
        assert_eq!(ICN.distance_km(&LAX), LAX.distance_km(&ICN));
        assert_eq!(
            haversine_distance_km(51.47, -0.45, -33.94, 151.17),
            haversine_distance_km(-33.94, 151.17, 51.47, -0.45)
        );
    }

    #[test]
    fn antipodal_is_half_circumference() {
        let distance = haversine_distance_km(0.0, 0.0, 0.0, 180.0);
        assert!((distance - 20015.0).abs() < 1.0, "got {}", distance);
    }

    #[test]
    fn near_antipodal_points_stay_finite() {
        for &lon in &[-179.5, -90.0, 0.0, 45.25, 126.44] {
            for step in 0..=9000 {
                let lat = step as f64 / 100.0;
                for &other_lon in &[lon + 180.0, lon - 180.0] {
                    let distance = haversine_distance_km(lat, lon, -lat, other_lon);
                    assert!(
                        distance.is_finite() && (distance - 20015.0).abs() < 1.0,
                        "({}, {}) -> ({}, {}) gave {}",
                        lat,
                        lon,
                        -lat,
                        other_lon,
                        distance
                    );
                }
            }
        }
    }

    #[test]
    fn icn_to_lax() {
        let distance = ICN.distance_km(&LAX);
        assert!((distance - 9600.0).abs() < 50.0, "got {}", distance);
    }

    #[test]
    fn one_degree_of_latitude() {
        let distance = haversine_distance_km(0.0, 0.0, 1.0, 0.0);
        assert!((distance - 111.19).abs() < 0.01, "got {}", distance);
    }

    #[test]
    fn thousands_separators() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(2100), "2,100");
        assert_eq!(format_thousands(109200), "109,200");
        assert_eq!(format_thousands(1048320000), "1,048,320,000");
    }

    #[test]
    fn float_thousands_separators() {
        assert_eq!(format_thousands_f64(9600.456, 2), "9,600.46");
        assert_eq!(format_thousands_f64(0.0, 2), "0.00");
        assert_eq!(format_thousands_f64(123.0, 2), "123.00");
        assert_eq!(format_thousands_f64(1048320000.4, 0), "1,048,320,000");
        assert_eq!(format_thousands_f64(-1234.5, 1), "-1,234.5");
    }
}
