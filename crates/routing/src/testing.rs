use std::sync::Mutex;
use vecroute_common::{Result, VecRouteError};
use vecroute_vector::{Location, Point, Segment, SegmentVector, SimilarityService};

/// Similarity service double with canned answers per query vector.
///
/// Unscripted points resolve to an empty result. Every `find_nearest` call is
/// recorded as `(point, limit)`.
#[derive(Default)]
pub struct ScriptedService {
    locations: Vec<Location>,
    nearest: Vec<(Point, Vec<Location>)>,
    segments: Vec<Segment>,
    unavailable: bool,
    calls: Mutex<Vec<(Point, usize)>>,
}

impl ScriptedService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a location for id/name lookups
    pub fn location(mut self, id: &str, name: &str, xy: [f32; 2]) -> Self {
        self.locations.push(Location::new(id, name, Point::new(xy)));
        self
    }

    /// Answer for `find_nearest(point, _)`: `(id, similarity)` pairs of registered locations
    pub fn nearest(mut self, point: [f32; 2], hits: &[(&str, f32)]) -> Self {
        let hits = hits
            .iter()
            .map(|(id, score)| self.get(id).scored(*score))
            .collect();
        self.nearest.push((Point::new(point), hits));
        self
    }

    /// Answer for every `find_nearest_segments` call
    pub fn segments(mut self, segments: &[(&str, [f32; 4])]) -> Self {
        self.segments = segments
            .iter()
            .map(|(name, v)| Segment::new(*name, SegmentVector::new(*v)))
            .collect();
        self
    }

    pub fn unavailable(mut self) -> Self {
        self.unavailable = true;
        self
    }

    pub fn get(&self, id: &str) -> Location {
        self.locations
            .iter()
            .find(|l| l.id == id)
            .cloned()
            .unwrap_or_else(|| panic!("unknown test location {}", id))
    }

    pub fn calls(&self) -> Vec<(Point, usize)> {
        self.calls.lock().unwrap().clone()
    }

    fn check(&self) -> Result<()> {
        if self.unavailable {
            return Err(VecRouteError::unavailable("scripted outage"));
        }
        Ok(())
    }
}

impl SimilarityService for ScriptedService {
    fn find_nearest(&self, point: &Point, limit: usize) -> Result<Vec<Location>> {
        self.check()?;
        self.calls.lock().unwrap().push((*point, limit));
        Ok(self
            .nearest
            .iter()
            .find(|(p, _)| p == point)
            .map(|(_, hits)| hits.iter().take(limit).cloned().collect())
            .unwrap_or_default())
    }

    fn find_nearest_segments(&self, _vector: &SegmentVector, limit: usize) -> Result<Vec<Segment>> {
        self.check()?;
        Ok(self.segments.iter().take(limit).cloned().collect())
    }

    fn find_by_id(&self, id: &str) -> Result<Option<Location>> {
        self.check()?;
        Ok(self.locations.iter().find(|l| l.id == id).cloned())
    }

    fn find_by_name(&self, name: &str) -> Result<Option<Location>> {
        self.check()?;
        Ok(self.locations.iter().find(|l| l.name == name).cloned())
    }
}
