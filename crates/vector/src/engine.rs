use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};
use vecroute_common::{MetricKind, Result, VecRouteError};

use crate::dataset::Dataset;
use crate::similarity::similarity;
use crate::types::{Location, Point, Segment, SegmentVector};

/// Nearest-neighbour queries the route inference is built on.
///
/// `find_nearest*` return at most `limit` records ordered by descending
/// similarity; an empty result is not an error. Backend failures surface as
/// [`VecRouteError::QueryServiceUnavailable`].
pub trait SimilarityService: Send + Sync {
    /// Locations closest to `point`
    fn find_nearest(&self, point: &Point, limit: usize) -> Result<Vec<Location>>;

    /// Highways closest to an endpoint-pair vector
    fn find_nearest_segments(&self, vector: &SegmentVector, limit: usize) -> Result<Vec<Segment>>;

    /// Direct lookup by id; similarity is left at 0.0
    fn find_by_id(&self, id: &str) -> Result<Option<Location>>;

    /// Direct lookup by display name; similarity is left at 0.0
    fn find_by_name(&self, name: &str) -> Result<Option<Location>>;
}

/// In-memory brute-force vector store.
///
/// Built once per process and shared read-only.
pub struct VectorStore {
    locations: Vec<Location>,
    highways: Vec<Segment>,
    metric: MetricKind,
}

impl VectorStore {
    /// Create an empty store
    pub fn new(metric: MetricKind) -> Self {
        Self {
            locations: Vec::new(),
            highways: Vec::new(),
            metric,
        }
    }

    /// Build a store from a parsed dataset
    pub fn from_dataset(dataset: Dataset, metric: MetricKind) -> Result<Self> {
        let mut store = Self::new(metric);
        let mut seen = HashSet::new();
        for location in dataset.locations {
            if !seen.insert(location.id.clone()) {
                return Err(VecRouteError::invalid_input(format!(
                    "Duplicate location id '{}'",
                    location.id
                )));
            }
            store.locations.push(Location {
                similarity: 0.0,
                ..location
            });
        }
        store.highways = dataset.highways;
        Ok(store)
    }

    /// Load a dataset file and build the store
    pub fn load(path: &Path, metric: MetricKind) -> Result<Self> {
        let dataset = Dataset::load(path)?;
        let store = Self::from_dataset(dataset, metric)?;

        info!(
            "Vector store initialized - {} locations, {} highways ({:?})",
            store.locations.len(),
            store.highways.len(),
            metric
        );
        Ok(store)
    }

    /// Add one location; ids must be unique
    pub fn add_location(&mut self, location: Location) -> Result<()> {
        if self.locations.iter().any(|l| l.id == location.id) {
            return Err(VecRouteError::invalid_input(format!(
                "Duplicate location id '{}'",
                location.id
            )));
        }
        self.locations.push(location);
        Ok(())
    }

    pub fn add_highway(&mut self, highway: Segment) {
        self.highways.push(highway);
    }

    /// (locations, highways)
    pub fn stats(&self) -> (usize, usize) {
        (self.locations.len(), self.highways.len())
    }

    pub fn metric(&self) -> MetricKind {
        self.metric
    }

    /// Indices of the `limit` best scores. Sorting is stable, so ties keep
    /// insertion order.
    fn rank<'a, I>(&self, query: &[f32], vectors: I, limit: usize) -> Vec<(usize, f32)>
    where
        I: Iterator<Item = &'a [f32]>,
    {
        if limit == 0 {
            return Vec::new();
        }

        let mut scored: Vec<(usize, f32)> = vectors
            .enumerate()
            .map(|(i, v)| (i, similarity(self.metric, query, v)))
            .collect();
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        scored.truncate(limit);
        scored
    }
}

impl SimilarityService for VectorStore {
    fn find_nearest(&self, point: &Point, limit: usize) -> Result<Vec<Location>> {
        let ranked = self.rank(
            point.as_slice(),
            self.locations.iter().map(|l| l.vector.as_slice()),
            limit,
        );
        debug!("find_nearest {:?} limit={} -> {} hits", point.values(), limit, ranked.len());

        Ok(ranked
            .into_iter()
            .map(|(i, score)| self.locations[i].scored(score))
            .collect())
    }

    fn find_nearest_segments(&self, vector: &SegmentVector, limit: usize) -> Result<Vec<Segment>> {
        let ranked = self.rank(
            vector.as_slice(),
            self.highways.iter().map(|h| h.vector.as_slice()),
            limit,
        );
        debug!(
            "find_nearest_segments {:?} limit={} -> {} hits",
            vector.values(),
            limit,
            ranked.len()
        );

        Ok(ranked
            .into_iter()
            .map(|(i, _)| self.highways[i].clone())
            .collect())
    }

    fn find_by_id(&self, id: &str) -> Result<Option<Location>> {
        Ok(self.locations.iter().find(|l| l.id == id).cloned())
    }

    fn find_by_name(&self, name: &str) -> Result<Option<Location>> {
        Ok(self.locations.iter().find(|l| l.name == name).cloned())
    }
}
