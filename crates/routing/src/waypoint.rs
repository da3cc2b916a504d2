use std::collections::HashSet;
use tracing::{debug, info, warn};
use vecroute_common::{Result, VecRouteError};
use vecroute_vector::{Location, SimilarityService};

/// Orders waypoints by repeatedly hopping to the most similar unvisited one.
///
/// Every hop re-queries the similarity service from the newest location, so
/// the result approximates a greedy travelling-salesman tour with the
/// vector space standing in for road adjacency.
pub struct WaypointRouter<'a> {
    service: &'a dyn SimilarityService,
    allow_detours: bool,
}

impl<'a> WaypointRouter<'a> {
    pub fn new(service: &'a dyn SimilarityService) -> Self {
        Self {
            service,
            allow_detours: false,
        }
    }

    /// Allow hops through locations that were not requested. They still
    /// appear in the visiting order.
    pub fn with_detours(mut self, allow: bool) -> Self {
        self.allow_detours = allow;
        self
    }

    /// Compute the visiting order of `waypoints` starting from `start`.
    ///
    /// An empty waypoint set yields an empty route. Fails with
    /// `NoRouteFound` as soon as a query answer holds no eligible candidate.
    pub fn build_route(&self, start: &Location, waypoints: &HashSet<String>) -> Result<Vec<String>> {
        if waypoints.is_empty() {
            return Ok(Vec::new());
        }

        // Fixed for the whole run
        let limit = waypoints.len();
        let mut remaining: HashSet<&str> = waypoints.iter().map(String::as_str).collect();
        let mut visited: Vec<String> = Vec::with_capacity(limit);
        let mut current = start.clone();

        info!(
            "Building route from '{}' through {} waypoints",
            start.name, limit
        );

        while !remaining.is_empty() {
            let candidates = self.service.find_nearest(&current.vector, limit)?;

            let next = candidates
                .into_iter()
                .find(|c| self.is_eligible(c, start, &current, &visited, &remaining));

            let Some(next) = next else {
                warn!(
                    "No eligible candidate near '{}' ({} of {} waypoints placed)",
                    current.name,
                    visited.len(),
                    limit
                );
                return Err(VecRouteError::no_route(format!(
                    "stuck at '{}' with {} waypoint(s) left",
                    current.name,
                    remaining.len()
                )));
            };

            debug!(
                "Hop {} -> {} (similarity {:.4})",
                current.name, next.name, next.similarity
            );
            remaining.remove(next.name.as_str());
            visited.push(next.name.clone());
            current = next;
        }

        if visited.is_empty() {
            return Err(VecRouteError::no_route(format!(
                "no waypoint reachable from '{}'",
                start.name
            )));
        }

        Ok(visited)
    }

    fn is_eligible(
        &self,
        candidate: &Location,
        start: &Location,
        current: &Location,
        visited: &[String],
        remaining: &HashSet<&str>,
    ) -> bool {
        candidate.id != start.id
            && candidate.name != current.name
            && !visited.contains(&candidate.name)
            && (self.allow_detours || remaining.contains(candidate.name.as_str()))
    }
}
