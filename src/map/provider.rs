// Route providers. The UI only talks to the `RouteProvider` trait; the
// bundled provider computes routes in-process.

use std::{thread, time::Duration};

use serde::{Deserialize, Serialize};

use super::{Route, RouteRequest};
use crate::MuseumMapError;
use crate::geo::Coordinate;

/// Maximum spacing between consecutive polyline points, in degrees
pub const ROUTE_STEP_DEGREES: f64 = 0.0005;
const MIN_ROUTE_DISTANCE_M: f64 = 1.0;

pub const DEFAULT_SIMULATED_LATENCY_MS: u64 = 300;
pub const DEFAULT_MAX_ROUTE_DISTANCE_KM: f64 = 50.0;
pub const DEFAULT_AVERAGE_SPEED_KMH: f64 = 30.0;

pub trait RouteProvider {
    /// Compute a route for `request`. Blocking; callers run it off the UI thread.
    fn calculate(&self, request: &RouteRequest) -> Result<Route, MuseumMapError>;
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct RouteProviderConfig {
    pub simulated_latency_ms: u64,
    pub max_route_distance_km: f64,
    pub average_speed_kmh: f64,
}

impl Default for RouteProviderConfig {
    fn default() -> Self {
        Self {
            simulated_latency_ms: DEFAULT_SIMULATED_LATENCY_MS,
            max_route_distance_km: DEFAULT_MAX_ROUTE_DISTANCE_KM,
            average_speed_kmh: DEFAULT_AVERAGE_SPEED_KMH,
        }
    }
}

/// Builds driving routes on an idealised street grid: east/west first, then
/// north/south.
pub struct LocalRouteProvider {
    config: RouteProviderConfig,
}

impl LocalRouteProvider {
    pub fn new(config: RouteProviderConfig) -> Self {
        Self { config }
    }

    fn densify(from: Coordinate, to: Coordinate, points: &mut Vec<Coordinate>) {
        let dlat = to.latitude - from.latitude;
        let dlon = to.longitude - from.longitude;
        let steps = (dlat.abs().max(dlon.abs()) / ROUTE_STEP_DEGREES).ceil() as usize;
        for step in 1..=steps {
            let t = step as f64 / steps as f64;
            points.push(Coordinate::new(
                from.latitude + dlat * t,
                from.longitude + dlon * t,
            ));
        }
    }

    fn grid_polyline(origin: Coordinate, destination: Coordinate) -> Vec<Coordinate> {
        let corner = Coordinate::new(origin.latitude, destination.longitude);
        let mut points = vec![origin];
        Self::densify(origin, corner, &mut points);
        Self::densify(corner, destination, &mut points);
        points
    }
}

impl Default for LocalRouteProvider {
    fn default() -> Self {
        Self::new(RouteProviderConfig::default())
    }
}

impl RouteProvider for LocalRouteProvider {
    fn calculate(&self, request: &RouteRequest) -> Result<Route, MuseumMapError> {
        if self.config.simulated_latency_ms > 0 {
            thread::sleep(Duration::from_millis(self.config.simulated_latency_ms));
        }

        let straight_m = request.origin.distance_m(&request.destination);
        if straight_m < MIN_ROUTE_DISTANCE_M {
            return Err(MuseumMapError::RouteNotFound {
                reason: "origin and destination are the same place".to_string(),
            });
        }
        if straight_m > self.config.max_route_distance_km * 1000.0 {
            return Err(MuseumMapError::RouteNotFound {
                reason: format!(
                    "destination is {:.1} km away, limit is {:.1} km",
                    straight_m / 1000.0,
                    self.config.max_route_distance_km
                ),
            });
        }
        if self.config.average_speed_kmh <= 0.0 {
            return Err(MuseumMapError::RouteProviderError {
                description: format!(
                    "invalid average speed {} km/h",
                    self.config.average_speed_kmh
                ),
            });
        }

        let polyline = Self::grid_polyline(request.origin, request.destination);
        let distance_m: f64 = polyline.windows(2).map(|w| w[0].distance_m(&w[1])).sum();
        let expected_travel_time_s = distance_m / (self.config.average_speed_kmh / 3.6);

        Ok(Route {
            polyline,
            distance_m,
            expected_travel_time_s,
        })
    }
}
