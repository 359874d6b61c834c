// Error types for museum_map

use snafu::Snafu;
use std::io;

#[derive(Debug, Snafu)]
pub enum MuseumMapError {
    // Errors from the route provider
    #[snafu(display("No route found: {reason}"))]
    RouteNotFound { reason: String },
    #[snafu(display("Route provider error: {description}"))]
    RouteProviderError { description: String },
    #[snafu(display("Error delivering route response, receiver is gone"))]
    RouteBroadcastError,

    // Catalog errors
    #[snafu(display("No place at catalog index {index}"))]
    UnknownPlace { index: usize },

    // Config management errors
    #[snafu(display("Could not find application data directory to save config file"))]
    NoConfigDir,
    #[snafu(display("Error reading or writing config file"))]
    ConfigIOError { source: io::Error },
    #[snafu(display("Error serializing config file"))]
    ConfigSerializeError { source: serde_json::Error },
    #[snafu(display("Error parsing config file"))]
    ConfigParseError { source: serde_json::Error },

    // UI errors
    #[snafu(display("Could not start app: {description}"))]
    AppStartError { description: String },
}
