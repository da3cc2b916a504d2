use serde::{Deserialize, Serialize};
use vecroute_common::VecRouteError;

/// Fixed-dimension embedding. The dimension is checked whenever a vector is
/// built from a plain sequence, including deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f32>", into = "Vec<f32>")]
pub struct Vector<const N: usize>([f32; N]);

/// 2-D coordinate-like embedding of a location.
pub type Point = Vector<2>;

/// Highway embedding: two endpoint points laid out as `[ax, ay, bx, by]`.
pub type SegmentVector = Vector<4>;

impl<const N: usize> Vector<N> {
    pub const DIM: usize = N;

    pub const fn new(values: [f32; N]) -> Self {
        Self(values)
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    pub fn values(&self) -> [f32; N] {
        self.0
    }
}

impl<const N: usize> TryFrom<Vec<f32>> for Vector<N> {
    type Error = VecRouteError;

    fn try_from(values: Vec<f32>) -> Result<Self, Self::Error> {
        let actual = values.len();
        let array: [f32; N] = values
            .try_into()
            .map_err(|_| VecRouteError::malformed(N, actual))?;
        Ok(Self(array))
    }
}

impl<const N: usize> TryFrom<&[f32]> for Vector<N> {
    type Error = VecRouteError;

    fn try_from(values: &[f32]) -> Result<Self, Self::Error> {
        let array: [f32; N] = values
            .try_into()
            .map_err(|_| VecRouteError::malformed(N, values.len()))?;
        Ok(Self(array))
    }
}

impl<const N: usize> From<Vector<N>> for Vec<f32> {
    fn from(vector: Vector<N>) -> Self {
        vector.0.to_vec()
    }
}

impl<const N: usize> From<[f32; N]> for Vector<N> {
    fn from(values: [f32; N]) -> Self {
        Self(values)
    }
}

impl Point {
    /// Concatenate two points into the highway vector space.
    pub fn join(&self, other: &Point) -> SegmentVector {
        let [ax, ay] = self.0;
        let [bx, by] = other.0;
        Vector([ax, ay, bx, by])
    }
}

impl SegmentVector {
    /// Split into the two endpoint points, in stored order.
    pub fn endpoints(&self) -> (Point, Point) {
        let [ax, ay, bx, by] = self.0;
        (Vector([ax, ay]), Vector([bx, by]))
    }
}

/// A named place in the location vector space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(rename = "location_id")]
    pub id: String,

    #[serde(rename = "location_name")]
    pub name: String,

    /// Similarity to the query that produced this record; 0.0 for direct lookups.
    #[serde(default)]
    pub similarity: f32,

    #[serde(rename = "location_vector")]
    pub vector: Point,
}

impl Location {
    pub fn new(id: impl Into<String>, name: impl Into<String>, vector: Point) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            similarity: 0.0,
            vector,
        }
    }

    /// Copy of this record scored against a query.
    pub fn scored(&self, similarity: f32) -> Self {
        Self {
            similarity,
            ..self.clone()
        }
    }

    /// True when this record is the query point itself.
    pub fn is_exact_match(&self) -> bool {
        self.similarity == 1.0
    }
}

/// A highway between two positional endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    #[serde(rename = "highway_name")]
    pub name: String,

    #[serde(rename = "highway_vector")]
    pub vector: SegmentVector,
}

impl Segment {
    pub fn new(name: impl Into<String>, vector: SegmentVector) -> Self {
        Self {
            name: name.into(),
            vector,
        }
    }

    pub fn endpoints(&self) -> (Point, Point) {
        self.vector.endpoints()
    }
}
