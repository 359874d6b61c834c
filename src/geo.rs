// Geographic primitives and screen projection for the map canvas

use egui::{Pos2, Rect};
use serde::{Deserialize, Serialize};

const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A point on the globe in decimal degrees.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Great-circle distance in meters (haversine)
    pub fn distance_m(&self, other: &Coordinate) -> f64 {
        let dlat = (other.latitude - self.latitude).to_radians();
        let dlon = (other.longitude - self.longitude).to_radians();
        let a = (dlat / 2.0).sin().powi(2)
            + self.latitude.to_radians().cos()
                * other.latitude.to_radians().cos()
                * (dlon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_M * c
    }
}

/// Extent of a region in degrees
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct CoordinateSpan {
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl CoordinateSpan {
    pub const fn new(latitude_delta: f64, longitude_delta: f64) -> Self {
        Self {
            latitude_delta,
            longitude_delta,
        }
    }
}

/// The visible part of the map. The region always fills the whole canvas
/// rect it is drawn into, so conversions need that rect.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct MapRegion {
    pub center: Coordinate,
    pub span: CoordinateSpan,
}

impl MapRegion {
    pub fn new(center: Coordinate, span: CoordinateSpan) -> Self {
        Self { center, span }
    }

    /// Convert a point on the canvas into the coordinate under it
    pub fn screen_to_coordinate(&self, point: Pos2, canvas: Rect) -> Coordinate {
        let rel_x = ((point.x - canvas.center().x) / canvas.width()) as f64;
        let rel_y = ((point.y - canvas.center().y) / canvas.height()) as f64;
        Coordinate::new(
            self.center.latitude - rel_y * self.span.latitude_delta,
            self.center.longitude + rel_x * self.span.longitude_delta,
        )
    }

    /// Convert a coordinate into a canvas position. Coordinates outside the
    /// region map outside the rect.
    pub fn coordinate_to_screen(&self, coordinate: &Coordinate, canvas: Rect) -> Pos2 {
        let rel_x = (coordinate.longitude - self.center.longitude) / self.span.longitude_delta;
        let rel_y = (self.center.latitude - coordinate.latitude) / self.span.latitude_delta;
        Pos2::new(
            canvas.center().x + (rel_x as f32) * canvas.width(),
            canvas.center().y + (rel_y as f32) * canvas.height(),
        )
    }

    pub fn contains(&self, coordinate: &Coordinate) -> bool {
        (coordinate.latitude - self.center.latitude).abs() <= self.span.latitude_delta / 2.0
            && (coordinate.longitude - self.center.longitude).abs()
                <= self.span.longitude_delta / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Vec2, pos2};

    fn canvas() -> Rect {
        Rect::from_min_size(pos2(10.0, 20.0), Vec2::new(400.0, 300.0))
    }

    fn region() -> MapRegion {
        MapRegion::new(
            Coordinate::new(54.7041, 20.5077),
            CoordinateSpan::new(0.05, 0.05),
        )
    }

    #[test]
    fn test_canvas_center_is_region_center() {
        let coordinate = region().screen_to_coordinate(canvas().center(), canvas());
        assert!((coordinate.latitude - 54.7041).abs() < 1e-9);
        assert!((coordinate.longitude - 20.5077).abs() < 1e-9);
    }

    #[test]
    fn test_up_is_north_and_right_is_east() {
        let c = canvas();
        let top_left = region().screen_to_coordinate(c.min, c);
        assert!(top_left.latitude > 54.7041);
        assert!(top_left.longitude < 20.5077);
        assert!((top_left.latitude - (54.7041 + 0.025)).abs() < 1e-6);
        assert!((top_left.longitude - (20.5077 - 0.025)).abs() < 1e-6);
    }

    #[test]
    fn test_projection_is_inverse() {
        let c = canvas();
        let point = pos2(123.0, 234.0);
        let coordinate = region().screen_to_coordinate(point, c);
        let back = region().coordinate_to_screen(&coordinate, c);
        assert!((back.x - point.x).abs() < 0.01);
        assert!((back.y - point.y).abs() < 0.01);
    }

    #[test]
    fn test_contains() {
        assert!(region().contains(&Coordinate::new(54.71, 20.51)));
        assert!(!region().contains(&Coordinate::new(54.8, 20.51)));
    }

    #[test]
    fn test_distance() {
        let a = Coordinate::new(54.7041, 20.5077);
        assert_eq!(a.distance_m(&a), 0.0);
        // one degree of latitude is roughly 111 km
        let b = Coordinate::new(55.7041, 20.5077);
        let d = a.distance_m(&b);
        assert!((d - 111_195.0).abs() < 100.0, "distance was {d}");
    }
}
