use ndarray::ArrayView1;
use vecroute_common::MetricKind;

/// Similarity in [0, 1] under the configured metric
pub fn similarity(metric: MetricKind, a: &[f32], b: &[f32]) -> f32 {
    match metric {
        MetricKind::Euclidean => euclidean_similarity(a, b),
        MetricKind::Cosine => cosine_similarity(a, b),
    }
}

/// Largest `f32` below 1.0
const BELOW_EXACT: f32 = 1.0 - f32::EPSILON / 2.0;

/// `1 / (1 + d²)`. Only identical vectors score exactly 1.0; any nonzero
/// distance is capped just below it, since `1 + d²` rounds to 1.0 in `f32`
/// for `d` under about 2.4e-4.
pub fn euclidean_similarity(a: &[f32], b: &[f32]) -> f32 {
    let a = ArrayView1::from(a);
    let b = ArrayView1::from(b);
    let diff = &a - &b;
    let d2 = diff.dot(&diff);
    if d2 == 0.0 {
        return 1.0;
    }
    (1.0 / (1.0 + d2)).min(BELOW_EXACT)
}

/// Cosine similarity rescaled from [-1, 1] to [0, 1]
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let a = ArrayView1::from(a);
    let b = ArrayView1::from(b);
    let norm_a = a.dot(&a).sqrt();
    let norm_b = b.dot(&b).sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.5;
    }

    let cos = (a.dot(&b) / (norm_a * norm_b)).clamp(-1.0, 1.0);
    (1.0 + cos) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_euclidean_identical_is_exact() {
        assert_eq!(euclidean_similarity(&[3.5, -2.25], &[3.5, -2.25]), 1.0);
    }

    #[test]
    fn test_euclidean_decreases_with_distance() {
        let near = euclidean_similarity(&[0.0, 0.0], &[1.0, 0.0]);
        let far = euclidean_similarity(&[0.0, 0.0], &[3.0, 4.0]);
        assert_eq!(near, 0.5);
        assert!((far - 1.0 / 26.0).abs() < 1e-6);
        assert!(near > far);
    }

    #[test]
    fn test_euclidean_near_point_is_not_exact() {
        let s = euclidean_similarity(&[41.8, -87.6], &[41.8001, -87.6001]);
        assert!(s < 1.0);
        assert!(s > 0.9999);

        let tiny = euclidean_similarity(&[0.0, 0.0], &[1e-10, 0.0]);
        assert_eq!(tiny, BELOW_EXACT);
    }

    #[test]
    fn test_cosine_range() {
        assert!((cosine_similarity(&[1.0, 0.0], &[2.0, 0.0]) - 1.0).abs() < 1e-6);
        assert!((cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]) - 0.5).abs() < 1e-6);
        assert!(cosine_similarity(&[1.0, 0.0], &[-1.0, 0.0]).abs() < 1e-6);
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 1.0]), 0.5);
    }

    #[test]
    fn test_dispatch() {
        let a = [1.0, 1.0];
        let b = [2.0, 2.0];
        assert_eq!(similarity(MetricKind::Euclidean, &a, &b), euclidean_similarity(&a, &b));
        assert_eq!(similarity(MetricKind::Cosine, &a, &b), cosine_similarity(&a, &b));
    }
}
