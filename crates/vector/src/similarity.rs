//! Cosine similarity and exhaustive top-k ranking.

use std::cmp::Ordering;

/// Cosine similarity between two vectors of equal length
///
/// Returns 0.0 when either vector has zero magnitude, by convention, so
/// callers never observe NaN from this function.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a * norm_b)
}

/// Rank every stored vector against the query and keep the best k
///
/// Exhaustive O(n·D) scan. Results are sorted by descending score; equal
/// scores are broken by ascending identifier (earlier insertion first),
/// enforced explicitly rather than relying on sort stability. Returns
/// `min(k, n)` entries; an empty input or `k == 0` yields an empty result.
pub fn top_k(vectors: &[Vec<f32>], query: &[f32], k: usize) -> Vec<(usize, f32)> {
    if k == 0 {
        return Vec::new();
    }

    let mut scored: Vec<(usize, f32)> = vectors
        .iter()
        .enumerate()
        .map(|(id, v)| (id, cosine_similarity(query, v)))
        .collect();

    scored.sort_by(|a, b| match b.1.partial_cmp(&a.1) {
        Some(Ordering::Equal) | None => a.0.cmp(&b.0),
        Some(ord) => ord,
    });

    scored.truncate(k);
    scored
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-6;

    #[test]
    fn test_self_similarity_is_one() {
        let v = vec![0.3, -1.2, 4.5];
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < EPS);
    }

    #[test]
    fn test_orthogonal_vectors() {
        assert!((cosine_similarity(&[1.0, 0.0], &[0.0, 1.0])).abs() < EPS);
    }

    #[test]
    fn test_opposite_vectors() {
        assert!((cosine_similarity(&[1.0, 0.0], &[-1.0, 0.0]) + 1.0).abs() < EPS);
    }

    #[test]
    fn test_scale_invariance() {
        let a = vec![1.0, 2.0, 3.0];
        let b = vec![-2.0, 0.5, 1.0];
        let scaled: Vec<f32> = a.iter().map(|x| x * 7.5).collect();

        let base = cosine_similarity(&a, &b);
        assert!((cosine_similarity(&scaled, &b) - base).abs() < EPS);
    }

    #[test]
    fn test_zero_magnitude_is_zero() {
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 2.0]), 0.0);
        assert_eq!(cosine_similarity(&[1.0, 2.0], &[0.0, 0.0]), 0.0);
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[0.0, 0.0]), 0.0);
    }

    #[test]
    fn test_top_k_length_and_order() {
        let vectors = vec![
            vec![0.0, 1.0],  // orthogonal to query
            vec![1.0, 0.0],  // parallel to query
            vec![1.0, 1.0],  // in between
        ];
        let query = vec![1.0, 0.0];

        let results = top_k(&vectors, &query, 2);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].0, 1);
        assert_eq!(results[1].0, 2);
        assert!(results[0].1 >= results[1].1);
    }

    #[test]
    fn test_top_k_caps_at_store_size() {
        let vectors = vec![vec![1.0], vec![2.0]];
        assert_eq!(top_k(&vectors, &[1.0], 10).len(), 2);
    }

    #[test]
    fn test_top_k_zero_k() {
        let vectors = vec![vec![1.0]];
        assert!(top_k(&vectors, &[1.0], 0).is_empty());
    }

    #[test]
    fn test_top_k_empty_store() {
        assert!(top_k(&[], &[1.0], 3).is_empty());
    }

    #[test]
    fn test_top_k_ties_break_by_ascending_id() {
        // all four score identically against the query
        let vectors = vec![
            vec![2.0, 0.0],
            vec![1.0, 0.0],
            vec![4.0, 0.0],
            vec![0.5, 0.0],
        ];
        let results = top_k(&vectors, &[1.0, 0.0], 4);
        let ids: Vec<usize> = results.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
    }
}
