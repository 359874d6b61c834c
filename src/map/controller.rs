// Map interaction controller: region, marker, route overlay and the
// tap-to-directions flow

use std::collections::HashSet;

use egui::{Color32, Pos2, Rect};
use log::{debug, info, warn};

use super::{MapMarker, Route, RouteRequest, RouteResponse, TransportType};
use crate::catalog::Place;
use crate::geo::{Coordinate, CoordinateSpan, MapRegion};

/// Zoom used whenever a place is selected
pub const PLACE_SPAN: CoordinateSpan = CoordinateSpan::new(0.05, 0.05);
/// Region shown before any place is selected
pub const DEFAULT_REGION: MapRegion = MapRegion {
    center: Coordinate::new(55.7558, 37.6173),
    span: CoordinateSpan::new(0.09, 0.09),
};

pub const ROUTE_STROKE_COLOR: Color32 = Color32::BLUE;
pub const ROUTE_STROKE_WIDTH: f32 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteStatus {
    Idle,
    RequestInFlight { pending: usize },
}

/// Owns everything drawn on the map. The canvas only reports raw clicks;
/// route responses are fed back through `apply_route_response` in the
/// order they arrive, so the last response applied owns the overlay.
#[derive(Debug)]
pub struct MapController {
    region: MapRegion,
    selected_place: Option<Place>,
    marker: Option<MapMarker>,
    overlay: Option<Route>,
    touch_location: Option<Coordinate>,
    in_flight: HashSet<u64>,
    next_request_id: u64,
    route_notice: Option<String>,
}

impl Default for MapController {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION,
            selected_place: None,
            marker: None,
            overlay: None,
            touch_location: None,
            in_flight: HashSet::new(),
            next_request_id: 1,
            route_notice: None,
        }
    }
}

impl MapController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_place(place: Place) -> Self {
        let mut controller = Self::default();
        controller.set_selected_place(place);
        controller
    }

    pub fn region(&self) -> &MapRegion {
        &self.region
    }

    pub fn selected_place(&self) -> Option<&Place> {
        self.selected_place.as_ref()
    }

    pub fn markers(&self) -> impl Iterator<Item = &MapMarker> {
        self.marker.iter()
    }

    pub fn overlay(&self) -> Option<&Route> {
        self.overlay.as_ref()
    }

    pub fn touch_location(&self) -> Option<Coordinate> {
        self.touch_location
    }

    pub fn route_notice(&self) -> Option<&str> {
        self.route_notice.as_deref()
    }

    pub fn status(&self) -> RouteStatus {
        if self.in_flight.is_empty() {
            RouteStatus::Idle
        } else {
            RouteStatus::RequestInFlight {
                pending: self.in_flight.len(),
            }
        }
    }

    /// Center on `place`, drop the current route and pin the place. If the
    /// user already tapped somewhere, a new request from that spot is returned.
    pub fn set_selected_place(&mut self, place: Place) -> Option<RouteRequest> {
        debug!("Selecting place {}", place.name);
        self.region = MapRegion::new(place.coordinate, PLACE_SPAN);
        self.overlay = None;
        self.route_notice = None;
        self.marker = Some(MapMarker {
            coordinate: place.coordinate,
            title: place.name.clone(),
        });
        self.selected_place = Some(place);

        let origin = self.touch_location?;
        self.request_route(origin)
    }

    /// Handle a click on the canvas at `point`
    pub fn on_map_tapped(&mut self, point: Pos2, canvas: Rect) -> Option<RouteRequest> {
        let origin = self.region.screen_to_coordinate(point, canvas);
        self.on_coordinate_tapped(origin)
    }

    pub fn on_coordinate_tapped(&mut self, origin: Coordinate) -> Option<RouteRequest> {
        self.touch_location = Some(origin);
        self.request_route(origin)
    }

    fn request_route(&mut self, origin: Coordinate) -> Option<RouteRequest> {
        let Some(place) = &self.selected_place else {
            debug!("Ignoring route request, no place selected");
            return None;
        };

        let request = RouteRequest {
            id: self.next_request_id,
            origin,
            destination: place.coordinate,
            transport: TransportType::Automobile,
        };
        self.next_request_id += 1;
        self.in_flight.insert(request.id);
        Some(request)
    }

    pub fn apply_route_response(&mut self, response: RouteResponse) {
        self.in_flight.remove(&response.request_id);
        match response.result {
            Ok(route) => {
                info!(
                    "Route {} from {:.4}, {:.4} ready: {} points, {:.0} m",
                    response.request_id,
                    response.origin.latitude,
                    response.origin.longitude,
                    route.polyline.len(),
                    route.distance_m
                );
                self.route_notice = None;
                self.overlay = Some(route);
            }
            Err(e) => {
                let notice = format!(
                    "No route from {:.4}, {:.4}: {}",
                    response.origin.latitude, response.origin.longitude, e
                );
                warn!("Route {} failed. {}", response.request_id, notice);
                self.route_notice = Some(notice);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MuseumMapError;
    use crate::catalog::museum_catalog;
    use egui::{Vec2, pos2};
    use proptest::prelude::*;

    fn route_to(origin: Coordinate, destination: Coordinate) -> Route {
        Route {
            polyline: vec![origin, destination],
            distance_m: origin.distance_m(&destination),
            expected_travel_time_s: 60.0,
        }
    }

    fn success(request: &RouteRequest) -> RouteResponse {
        RouteResponse {
            request_id: request.id,
            origin: request.origin,
            result: Ok(route_to(request.origin, request.destination)),
        }
    }

    fn failure(request: &RouteRequest) -> RouteResponse {
        RouteResponse {
            request_id: request.id,
            origin: request.origin,
            result: Err(MuseumMapError::RouteNotFound {
                reason: "no roads".to_string(),
            }),
        }
    }

    #[test]
    fn test_select_place_centers_and_pins() {
        for place in museum_catalog().places() {
            let mut controller = MapController::new();
            assert!(controller.set_selected_place(place.clone()).is_none());

            assert_eq!(controller.region().center, place.coordinate);
            assert_eq!(controller.region().span, PLACE_SPAN);
            let markers: Vec<_> = controller.markers().collect();
            assert_eq!(markers.len(), 1);
            assert_eq!(markers[0].title, place.name);
            assert_eq!(markers[0].coordinate, place.coordinate);
        }
    }

    #[test]
    fn test_select_place_clears_overlay() {
        let catalog = museum_catalog();
        let mut controller = MapController::with_place(catalog.places()[0].clone());
        let request = controller
            .on_coordinate_tapped(Coordinate::new(54.70, 20.50))
            .unwrap();
        controller.apply_route_response(success(&request));
        assert!(controller.overlay().is_some());

        controller.set_selected_place(catalog.places()[1].clone());
        assert!(controller.overlay().is_none());
        assert_eq!(controller.markers().count(), 1);
    }

    #[test]
    fn test_select_place_rerequests_from_touch_location() {
        let catalog = museum_catalog();
        let mut controller = MapController::with_place(catalog.places()[0].clone());
        let touch = Coordinate::new(54.70, 20.50);
        controller.on_coordinate_tapped(touch).unwrap();

        let request = controller
            .set_selected_place(catalog.places()[2].clone())
            .unwrap();
        assert_eq!(request.origin, touch);
        assert_eq!(request.destination, catalog.places()[2].coordinate);
    }

    #[test]
    fn test_tap_without_place_is_ignored() {
        let mut controller = MapController::new();
        let canvas = Rect::from_min_size(pos2(0.0, 0.0), Vec2::new(200.0, 200.0));
        assert!(controller.on_map_tapped(pos2(50.0, 50.0), canvas).is_none());
        assert!(controller.touch_location().is_some());
        assert_eq!(controller.status(), RouteStatus::Idle);
    }

    #[test]
    fn test_tap_builds_driving_request() {
        let place = museum_catalog().places()[0].clone();
        let mut controller = MapController::with_place(place.clone());
        let canvas = Rect::from_min_size(pos2(0.0, 0.0), Vec2::new(200.0, 200.0));

        let request = controller.on_map_tapped(pos2(0.0, 0.0), canvas).unwrap();
        assert_eq!(request.transport, TransportType::Automobile);
        assert_eq!(request.destination, place.coordinate);
        assert!((request.origin.latitude - (place.coordinate.latitude + 0.025)).abs() < 1e-6);
        assert!((request.origin.longitude - (place.coordinate.longitude - 0.025)).abs() < 1e-6);
        assert_eq!(controller.touch_location(), Some(request.origin));
        assert_eq!(controller.status(), RouteStatus::RequestInFlight { pending: 1 });
    }

    #[test]
    fn test_last_response_wins() {
        let mut controller = MapController::with_place(museum_catalog().places()[0].clone());
        let first = controller
            .on_coordinate_tapped(Coordinate::new(54.70, 20.50))
            .unwrap();
        let second = controller
            .on_coordinate_tapped(Coordinate::new(54.71, 20.49))
            .unwrap();
        assert_eq!(controller.status(), RouteStatus::RequestInFlight { pending: 2 });

        // responses arrive out of order
        controller.apply_route_response(success(&second));
        controller.apply_route_response(success(&first));

        let overlay = controller.overlay().unwrap();
        assert_eq!(overlay.polyline[0], first.origin);
        assert_eq!(controller.status(), RouteStatus::Idle);
    }

    #[test]
    fn test_failure_keeps_overlay_and_sets_notice() {
        let mut controller = MapController::with_place(museum_catalog().places()[0].clone());
        let first = controller
            .on_coordinate_tapped(Coordinate::new(54.70, 20.50))
            .unwrap();
        controller.apply_route_response(success(&first));
        let before = controller.overlay().cloned();

        let second = controller
            .on_coordinate_tapped(Coordinate::new(54.71, 20.49))
            .unwrap();
        controller.apply_route_response(failure(&second));

        assert_eq!(controller.overlay().cloned(), before);
        assert!(controller.route_notice().unwrap().contains("no roads"));
        assert_eq!(controller.status(), RouteStatus::Idle);
    }

    #[test]
    fn test_failure_notice_names_the_tapped_origin() {
        let mut controller = MapController::with_place(museum_catalog().places()[1].clone());
        let request = controller
            .on_coordinate_tapped(Coordinate::new(54.71234, 20.49876))
            .unwrap();
        controller.apply_route_response(failure(&request));
        assert!(
            controller
                .route_notice()
                .unwrap()
                .starts_with("No route from 54.7123, 20.4988")
        );
    }

    #[test]
    fn test_failure_without_overlay_draws_nothing() {
        let mut controller = MapController::with_place(museum_catalog().places()[0].clone());
        let request = controller
            .on_coordinate_tapped(Coordinate::new(54.70, 20.50))
            .unwrap();
        controller.apply_route_response(failure(&request));
        assert!(controller.overlay().is_none());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_every_tap_gets_a_fresh_request_id(taps in prop::collection::vec((54.6f64..54.8, 20.4f64..20.6), 1..20)) {
            let mut controller = MapController::with_place(museum_catalog().places()[0].clone());
            let mut ids = HashSet::new();
            for (lat, lon) in &taps {
                let request = controller.on_coordinate_tapped(Coordinate::new(*lat, *lon)).unwrap();
                prop_assert!(ids.insert(request.id));
            }
            prop_assert_eq!(controller.status(), RouteStatus::RequestInFlight { pending: taps.len() });
        }
    }
}
