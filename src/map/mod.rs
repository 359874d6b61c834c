pub mod controller;
pub mod dispatcher;
pub mod provider;

use serde::{Deserialize, Serialize};

pub use controller::{MapController, RouteStatus};
pub use dispatcher::RouteDispatcher;
pub use provider::{LocalRouteProvider, RouteProvider, RouteProviderConfig};

use crate::MuseumMapError;
use crate::geo::Coordinate;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TransportType {
    #[default]
    Automobile,
}

/// A computed path between two coordinates
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Route {
    /// Ordered points from origin to destination
    pub polyline: Vec<Coordinate>,
    /// Length along the polyline in meters
    pub distance_m: f64,
    /// Expected driving time in seconds
    pub expected_travel_time_s: f64,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct RouteRequest {
    pub id: u64,
    pub origin: Coordinate,
    pub destination: Coordinate,
    pub transport: TransportType,
}

#[derive(Debug)]
pub struct RouteResponse {
    pub request_id: u64,
    pub origin: Coordinate,
    pub result: Result<Route, MuseumMapError>,
}

/// Pin shown at the selected place
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MapMarker {
    pub coordinate: Coordinate,
    pub title: String,
}
