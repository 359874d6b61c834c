// Library interface for museum_map
// The binary only adds the egui shell on top of these modules

pub mod catalog;
pub mod config;
pub mod errors;
pub mod geo;
pub mod map;
pub mod profile;
pub mod session;
pub mod state;

// Re-export commonly used types
pub use catalog::{Catalog, Place, museum_catalog};
pub use config::AppConfig;
pub use errors::MuseumMapError;
pub use geo::{Coordinate, CoordinateSpan, MapRegion};
pub use map::{MapController, Route, RouteDispatcher, RouteProvider, RouteRequest, RouteResponse};
pub use session::SessionState;
pub use state::{Action, AppState, Effect, Tab};
