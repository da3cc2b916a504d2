use serde::Serialize;
use std::collections::BTreeSet;
use tracing::{debug, info};
use vecroute_common::Result;
use vecroute_vector::{Location, Point, Segment, SimilarityService};

/// Highway candidates fetched per inference unless configured otherwise.
pub const DEFAULT_SEGMENT_CANDIDATES: usize = 4;

/// Highways inferred between two locations.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HighwayRoute {
    /// Surviving candidates, in retrieval order
    pub highways: Vec<Segment>,

    /// Known places touched by any candidate, excluding start and end
    pub cities_on_route: BTreeSet<String>,
}

/// Verdict on one endpoint of a candidate highway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EndpointCheck {
    /// Shared with another candidate; never disqualifies
    Junction,
    /// Unique and coincides with the start or end location
    Terminal(String),
    /// Unique and coincides with some other known location
    Foreign(String),
    /// Unique and no known location sits exactly on it
    Dangling,
}

impl EndpointCheck {
    pub fn keeps_segment(&self) -> bool {
        matches!(self, Self::Junction | Self::Terminal(_))
    }
}

/// Infers which highways connect two locations from a single ANN query on
/// the joined start/end vector, then drops candidates whose unshared ends
/// lead nowhere or somewhere else.
pub struct SegmentInferencer<'a> {
    service: &'a dyn SimilarityService,
    candidates: usize,
}

impl<'a> SegmentInferencer<'a> {
    pub fn new(service: &'a dyn SimilarityService) -> Self {
        Self {
            service,
            candidates: DEFAULT_SEGMENT_CANDIDATES,
        }
    }

    pub fn with_candidates(mut self, candidates: usize) -> Self {
        self.candidates = candidates;
        self
    }

    pub fn infer_route(&self, start: &Location, end: &Location) -> Result<HighwayRoute> {
        let query = start.vector.join(&end.vector);
        let candidates = self
            .service
            .find_nearest_segments(&query, self.candidates)?;

        info!(
            "Inferring highways {} -> {}: {} candidates",
            start.name,
            end.name,
            candidates.len()
        );

        let endpoints: Vec<Point> = candidates
            .iter()
            .flat_map(|segment| {
                let (a, b) = segment.endpoints();
                [a, b]
            })
            .collect();

        let mut resolver = EndpointResolver::new(self.service);

        let mut highways = Vec::with_capacity(candidates.len());
        for segment in &candidates {
            let (a, b) = segment.endpoints();
            let first = self.check_endpoint(&a, &endpoints, start, end, &mut resolver)?;
            let keep = first.keeps_segment() && {
                let second = self.check_endpoint(&b, &endpoints, start, end, &mut resolver)?;
                debug!("{}: {:?} / {:?}", segment.name, first, second);
                second.keeps_segment()
            };

            if keep {
                highways.push(segment.clone());
            } else {
                debug!("Dropping highway {}", segment.name);
            }
        }

        // Computed over every candidate, not only the survivors
        let mut cities_on_route = BTreeSet::new();
        for point in &endpoints {
            if let Some(location) = resolver.resolve(point)? {
                if !is_terminal(&location, start, end) {
                    cities_on_route.insert(location.name);
                }
            }
        }

        info!(
            "Kept {} of {} highways, {} cities on route",
            highways.len(),
            candidates.len(),
            cities_on_route.len()
        );

        Ok(HighwayRoute {
            highways,
            cities_on_route,
        })
    }

    fn check_endpoint(
        &self,
        point: &Point,
        endpoints: &[Point],
        start: &Location,
        end: &Location,
        resolver: &mut EndpointResolver<'_>,
    ) -> Result<EndpointCheck> {
        if endpoints.iter().filter(|p| *p == point).count() > 1 {
            return Ok(EndpointCheck::Junction);
        }

        Ok(match resolver.resolve(point)? {
            None => EndpointCheck::Dangling,
            Some(location) if is_terminal(&location, start, end) => {
                EndpointCheck::Terminal(location.name)
            }
            Some(location) => EndpointCheck::Foreign(location.name),
        })
    }
}

fn is_terminal(location: &Location, start: &Location, end: &Location) -> bool {
    location.name == start.name || location.name == end.name
}

/// Maps endpoint points to the known location sitting exactly on them.
///
/// Answers are kept for the lifetime of one inference so each distinct point
/// is queried once.
struct EndpointResolver<'a> {
    service: &'a dyn SimilarityService,
    resolved: Vec<(Point, Option<Location>)>,
}

impl<'a> EndpointResolver<'a> {
    fn new(service: &'a dyn SimilarityService) -> Self {
        Self {
            service,
            resolved: Vec::new(),
        }
    }

    fn resolve(&mut self, point: &Point) -> Result<Option<Location>> {
        if let Some((_, hit)) = self.resolved.iter().find(|(p, _)| p == point) {
            return Ok(hit.clone());
        }

        let hit = self
            .service
            .find_nearest(point, 1)?
            .into_iter()
            .next()
            .filter(Location::is_exact_match);

        self.resolved.push((*point, hit.clone()));
        Ok(hit)
    }
}
