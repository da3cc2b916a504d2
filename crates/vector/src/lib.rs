//! VecRoute similarity backend
//!
//! Fixed-dimension vectors, location and highway records, and the
//! nearest-neighbour query service the route inference runs on.

mod dataset;
mod engine;
mod similarity;
mod types;

pub use dataset::Dataset;
pub use engine::{SimilarityService, VectorStore};
pub use similarity::{cosine_similarity, euclidean_similarity, similarity};
pub use types::{Location, Point, Segment, SegmentVector, Vector};
