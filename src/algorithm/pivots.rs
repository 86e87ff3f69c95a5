use num_traits::{Float, Zero};
use std::fmt::Debug;

/// Selects at most `ceil(|candidates| / k)` pivots from a filtered frontier
/// candidate set, spread evenly across the distance-sorted order.
///
/// `k` acts as a spacing divisor, not a direct pivot count: the candidates
/// are sorted by `(dist, vertex)` ascending and every
/// `ceil(|candidates| / target)`-th element is taken, where
/// `target = max(1, ceil(|candidates| / k))`. A candidate set no larger than
/// `k` is returned whole (in sorted order).
///
/// The caller filters the candidate set beforehand: outside the current
/// frontier, finite distance, within the active bound.
pub fn select_pivots<W>(candidates: &[usize], dist: &[W], k: usize) -> Vec<usize>
where
    W: Float + Zero + Debug + Copy + Ord,
{
    debug_assert!(k >= 1);

    let mut sorted = candidates.to_vec();
    sorted.sort_by_key(|&v| (dist[v], v));

    if sorted.len() <= k {
        return sorted;
    }

    let target = ((sorted.len() + k - 1) / k).max(1);
    let step = (sorted.len() + target - 1) / target;
    sorted.into_iter().step_by(step).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordered_float::OrderedFloat;

    fn dist(values: &[f64]) -> Vec<OrderedFloat<f64>> {
        values.iter().map(|&d| OrderedFloat(d)).collect()
    }

    #[test]
    fn small_candidate_set_is_returned_whole() {
        let d = dist(&[0.0, 3.0, 1.0, 2.0]);
        let pivots = select_pivots(&[3, 1, 2], &d, 5);
        assert_eq!(pivots, vec![2, 3, 1]);
    }

    #[test]
    fn k_is_a_spacing_divisor_not_a_count() {
        // ten candidates, k = 3: at most ceil(10/3) = 4 pivots, evenly spaced
        let d = dist(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        let candidates: Vec<usize> = (0..10).collect();
        let pivots = select_pivots(&candidates, &d, 3);
        assert_eq!(pivots, vec![0, 3, 6, 9]);
        assert!(pivots.len() <= (10 + 2) / 3);
    }

    #[test]
    fn pivot_count_never_exceeds_ceiling() {
        for len in 1..40usize {
            for k in 1..10usize {
                let d: Vec<OrderedFloat<f64>> =
                    (0..len).map(|i| OrderedFloat(i as f64)).collect();
                let candidates: Vec<usize> = (0..len).collect();
                let pivots = select_pivots(&candidates, &d, k);
                let ceiling = (len + k - 1) / k;
                assert!(
                    pivots.len() <= ceiling.max(len.min(k)),
                    "len={} k={} gave {} pivots",
                    len,
                    k,
                    pivots.len()
                );
                // pivots are unique and drawn from the candidates
                let mut seen = pivots.clone();
                seen.sort_unstable();
                seen.dedup();
                assert_eq!(seen.len(), pivots.len());
                assert!(pivots.iter().all(|p| candidates.contains(p)));
            }
        }
    }

    #[test]
    fn ties_break_by_vertex_id() {
        let d = dist(&[1.0, 1.0, 1.0, 1.0, 1.0, 1.0]);
        let candidates = vec![5, 2, 4, 0, 3, 1];
        let pivots = select_pivots(&candidates, &d, 2);
        // sorted order is 0..=5; ceil(6/2) = 3 targets, step 2
        assert_eq!(pivots, vec![0, 2, 4]);
    }
}
