//! VecRoute route inference
//!
//! Greedy waypoint ordering and highway inference driven only by
//! nearest-neighbour queries against a [`SimilarityService`].
//!
//! [`SimilarityService`]: vecroute_vector::SimilarityService

mod segment;
mod service;
mod waypoint;

#[cfg(test)]
mod testing;

pub use segment::{EndpointCheck, HighwayRoute, SegmentInferencer, DEFAULT_SEGMENT_CANDIDATES};
pub use service::{RouteOptions, RouteService};
pub use waypoint::WaypointRouter;
