use std::collections::HashSet;
use std::sync::Arc;
use tracing::info;
use vecroute_common::{AppConfig, Result, VecRouteError};
use vecroute_vector::{Location, SimilarityService};

use crate::segment::{HighwayRoute, SegmentInferencer, DEFAULT_SEGMENT_CANDIDATES};
use crate::waypoint::WaypointRouter;

/// Tunables for [`RouteService`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteOptions {
    pub segment_candidates: usize,
    pub allow_detours: bool,
}

impl Default for RouteOptions {
    fn default() -> Self {
        Self {
            segment_candidates: DEFAULT_SEGMENT_CANDIDATES,
            allow_detours: false,
        }
    }
}

impl From<&AppConfig> for RouteOptions {
    fn from(config: &AppConfig) -> Self {
        Self {
            segment_candidates: config.segment_candidates,
            allow_detours: config.allow_detours,
        }
    }
}

/// Resolves request identifiers to locations and runs the route algorithms.
///
/// Cheap to clone; the similarity backend is shared.
#[derive(Clone)]
pub struct RouteService {
    backend: Arc<dyn SimilarityService>,
    options: RouteOptions,
}

impl RouteService {
    pub fn new(backend: Arc<dyn SimilarityService>, options: RouteOptions) -> Self {
        Self { backend, options }
    }

    pub fn options(&self) -> RouteOptions {
        self.options
    }

    /// Look up a single location by id
    pub fn city(&self, id: &str) -> Result<Location> {
        self.backend
            .find_by_id(id)?
            .ok_or_else(|| VecRouteError::not_found(format!("no location with id '{}'", id)))
    }

    /// Order the named waypoints starting from the location `start_id`.
    ///
    /// Duplicate names collapse; every name must belong to a known location.
    pub fn city_list(&self, start_id: &str, waypoints: Vec<String>) -> Result<Vec<String>> {
        let start = self.city(start_id)?;

        let mut names = HashSet::with_capacity(waypoints.len());
        for name in waypoints {
            let name = name.trim().to_string();
            if name.is_empty() {
                return Err(VecRouteError::invalid_input("waypoint name cannot be empty"));
            }
            if self.backend.find_by_name(&name)?.is_none() {
                return Err(VecRouteError::not_found(format!(
                    "no location named '{}'",
                    name
                )));
            }
            names.insert(name);
        }

        info!("City list from '{}' over {} waypoints", start.name, names.len());

        WaypointRouter::new(self.backend.as_ref())
            .with_detours(self.options.allow_detours)
            .build_route(&start, &names)
    }

    /// Infer highways between the locations `start_id` and `end_id`
    pub fn highways(&self, start_id: &str, end_id: &str) -> Result<HighwayRoute> {
        let start = self.city(start_id)?;
        let end = self.city(end_id)?;

        SegmentInferencer::new(self.backend.as_ref())
            .with_candidates(self.options.segment_candidates)
            .infer_route(&start, &end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vecroute_common::MetricKind;
    use vecroute_vector::{Dataset, VectorStore};

    const DATASET: &str = r#"{
        "locations": [
            {"location_id": "SEA", "location_name": "Seattle",  "location_vector": [0.0, 0.0]},
            {"location_id": "POR", "location_name": "Portland", "location_vector": [0.0, 2.0]},
            {"location_id": "SAC", "location_name": "Sacramento", "location_vector": [1.0, 6.0]},
            {"location_id": "BOI", "location_name": "Boise", "location_vector": [5.0, 2.0]}
        ],
        "highways": [
            {"highway_name": "I-5 North", "highway_vector": [0.0, 0.0, 0.0, 2.0]},
            {"highway_name": "I-5 South", "highway_vector": [0.0, 2.0, 1.0, 6.0]},
            {"highway_name": "I-84", "highway_vector": [0.0, 2.0, 5.0, 2.0]},
            {"highway_name": "US-97", "highway_vector": [3.0, 3.0, 1.0, 6.0]}
        ]
    }"#;

    fn service(options: RouteOptions) -> RouteService {
        let dataset = Dataset::from_json(DATASET).unwrap();
        let store = VectorStore::from_dataset(dataset, MetricKind::Euclidean).unwrap();
        RouteService::new(Arc::new(store), options)
    }

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_city_lookup() {
        let service = service(RouteOptions::default());
        assert_eq!(service.city("POR").unwrap().name, "Portland");
        assert!(matches!(
            service.city("NYC"),
            Err(VecRouteError::LocationNotFound(_))
        ));
    }

    #[test]
    fn test_city_list_over_vector_store() {
        let service = service(RouteOptions::default());
        let route = service
            .city_list("SEA", names(&["Sacramento", "Portland", "Boise"]))
            .unwrap();
        assert_eq!(route, vec!["Portland", "Sacramento", "Boise"]);
    }

    #[test]
    fn test_city_list_validates_waypoints() {
        let service = service(RouteOptions::default());
        assert!(matches!(
            service.city_list("SEA", names(&["Portland", "Atlantis"])),
            Err(VecRouteError::LocationNotFound(_))
        ));
        assert!(matches!(
            service.city_list("SEA", names(&["  "])),
            Err(VecRouteError::InvalidInput(_))
        ));
        assert!(matches!(
            service.city_list("XXX", names(&["Portland"])),
            Err(VecRouteError::LocationNotFound(_))
        ));
    }

    #[test]
    fn test_city_list_duplicates_collapse() {
        let service = service(RouteOptions::default());
        let route = service
            .city_list("SEA", names(&["Sacramento", "Portland", "Boise", "Portland"]))
            .unwrap();
        assert_eq!(route, vec!["Portland", "Sacramento", "Boise"]);
        assert!(service.city_list("SEA", Vec::new()).unwrap().is_empty());
    }

    #[test]
    fn test_highways_over_vector_store() {
        let service = service(RouteOptions::default());
        let route = service.highways("SEA", "SAC").unwrap();

        let highways: Vec<_> = route.highways.iter().map(|h| h.name.as_str()).collect();
        // Retrieval order: I-5 South is closest to the joined query vector
        assert_eq!(highways, vec!["I-5 South", "I-5 North"]);
        let cities: Vec<_> = route.cities_on_route.iter().map(String::as_str).collect();
        assert_eq!(cities, vec!["Boise", "Portland"]);
    }

    #[test]
    fn test_highways_unknown_end() {
        let service = service(RouteOptions::default());
        assert!(matches!(
            service.highways("SEA", "NYC"),
            Err(VecRouteError::LocationNotFound(_))
        ));
    }
}
