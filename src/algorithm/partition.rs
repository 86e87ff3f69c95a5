use num_traits::{Float, Zero};
use std::fmt::Debug;

/// A contiguous distance-ordered segment of a vertex set, recursed on with
/// its own upper bound.
#[derive(Debug, Clone)]
pub struct Block<W>
where
    W: Float + Zero + Debug + Copy,
{
    pub vertices: Vec<usize>,
    pub upper_bound: W,
}

/// Partitions `vertices` into at most `2^t` contiguous blocks of the
/// `(dist, vertex)`-sorted order, emitted in ascending distance order.
///
/// Unreachable vertices sort last and land in the tail block. Each block's
/// upper bound is `min(bound, max dist in block)`, which degrades to `bound`
/// when the block holds only unreachable vertices. Segments are nonempty and
/// approximately equal in size, so every block of a multi-vertex input is
/// strictly smaller than the input.
pub fn partition_blocks<W>(vertices: &[usize], dist: &[W], t: u32, bound: W) -> Vec<Block<W>>
where
    W: Float + Zero + Debug + Copy + Ord,
{
    if vertices.is_empty() {
        return Vec::new();
    }

    let mut sorted = vertices.to_vec();
    sorted.sort_by_key(|&v| (dist[v], v));

    let max_blocks = 1usize << t.min(usize::BITS - 1);
    let block_count = max_blocks.min(sorted.len());
    let base = sorted.len() / block_count;
    let remainder = sorted.len() % block_count;

    let mut blocks = Vec::with_capacity(block_count);
    let mut start = 0;
    for i in 0..block_count {
        let len = base + usize::from(i < remainder);
        let segment = sorted[start..start + len].to_vec();
        start += len;

        let max_dist = segment
            .iter()
            .map(|&v| dist[v])
            .max()
            .unwrap_or(bound);
        blocks.push(Block {
            vertices: segment,
            upper_bound: Ord::min(bound, max_dist),
        });
    }
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordered_float::OrderedFloat;

    const INF: f64 = f64::INFINITY;

    fn dist(values: &[f64]) -> Vec<OrderedFloat<f64>> {
        values.iter().map(|&d| OrderedFloat(d)).collect()
    }

    #[test]
    fn blocks_are_contiguous_and_distance_ordered() {
        let d = dist(&[0.0, 4.0, 2.0, 6.0, 1.0, 3.0, 5.0, 7.0]);
        let vertices: Vec<usize> = (0..8).collect();
        let blocks = partition_blocks(&vertices, &d, 2, OrderedFloat(INF));

        assert_eq!(blocks.len(), 4);
        let flattened: Vec<usize> = blocks.iter().flat_map(|b| b.vertices.clone()).collect();
        assert_eq!(flattened, vec![0, 4, 2, 5, 1, 6, 3, 7]);
        assert_eq!(blocks[0].upper_bound, OrderedFloat(1.0));
        assert_eq!(blocks[3].upper_bound, OrderedFloat(7.0));
        for pair in blocks.windows(2) {
            assert!(pair[0].upper_bound <= pair[1].upper_bound);
        }
    }

    #[test]
    fn block_count_is_capped_by_vertex_count() {
        let d = dist(&[0.0, 1.0, 2.0]);
        let blocks = partition_blocks(&[0, 1, 2], &d, 4, OrderedFloat(INF));
        assert_eq!(blocks.len(), 3);
        assert!(blocks.iter().all(|b| b.vertices.len() == 1));
    }

    #[test]
    fn unreachable_vertices_fill_the_tail_block() {
        let d = dist(&[0.0, INF, 1.0, INF]);
        let blocks = partition_blocks(&[0, 1, 2, 3], &d, 1, OrderedFloat(10.0));
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].vertices, vec![0, 2]);
        assert_eq!(blocks[1].vertices, vec![1, 3]);
        // all-unreachable block inherits the caller's bound
        assert_eq!(blocks[1].upper_bound, OrderedFloat(10.0));
    }

    #[test]
    fn upper_bound_never_exceeds_the_caller_bound() {
        let d = dist(&[0.0, 5.0, 9.0]);
        let blocks = partition_blocks(&[0, 1, 2], &d, 1, OrderedFloat(6.0));
        assert!(blocks.iter().all(|b| b.upper_bound <= OrderedFloat(6.0)));
    }
}
