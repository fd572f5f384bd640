//! Priority frontier entries for the shortest-path search.

use std::cmp::Ordering;

use crate::interner::VertexId;

/// A tentative `(distance, vertex)` pair waiting in the frontier.
///
/// `Ord` is reversed so `std::collections::BinaryHeap` pops the smallest
/// distance first. Equal distances pop the lower vertex ID first.
#[derive(Debug, Clone, Copy)]
pub struct FrontierEntry {
    pub distance: f64,
    pub vertex: VertexId,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // total_cmp keeps the heap consistent even if NaN slips in with validation off
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    fn entry(distance: f64, vertex: VertexId) -> FrontierEntry {
        FrontierEntry { distance, vertex }
    }

    #[test]
    fn test_heap_pops_smallest_distance_first() {
        let mut heap = BinaryHeap::new();
        heap.push(entry(10.0, 0));
        heap.push(entry(2.0, 1));
        heap.push(entry(7.5, 2));

        let order: Vec<f64> = std::iter::from_fn(|| heap.pop())
            .map(|e| e.distance)
            .collect();
        assert_eq!(order, vec![2.0, 7.5, 10.0]);
    }

    #[test]
    fn test_equal_distances_pop_lower_vertex_first() {
        let mut heap = BinaryHeap::new();
        heap.push(entry(3.0, 4));
        heap.push(entry(3.0, 1));
        heap.push(entry(3.0, 2));

        let order: Vec<VertexId> = std::iter::from_fn(|| heap.pop())
            .map(|e| e.vertex)
            .collect();
        assert_eq!(order, vec![1, 2, 4]);
    }

    #[test]
    fn test_duplicate_entries_are_kept() {
        let mut heap = BinaryHeap::new();
        heap.push(entry(9.0, 3));
        heap.push(entry(4.0, 3));

        assert_eq!(heap.len(), 2);
        assert_eq!(heap.pop().map(|e| e.distance), Some(4.0));
        assert_eq!(heap.pop().map(|e| e.distance), Some(9.0));
    }
}
