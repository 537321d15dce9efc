use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Open-list entry: a cell index waiting to be expanded.
#[derive(Clone, Copy, Debug)]
pub(super) struct OpenNode {
    /// `g + h` for A*, `g` for Dijkstra.
    pub priority: u32,
    /// Cost from the start when the node was pushed.
    pub cost: u32,
    pub index: usize,
    seq: u64,
}

impl PartialEq for OpenNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenNode {}

impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for a min-heap; equal priorities pop in discovery order
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Min-priority queue with deterministic tie-breaking.
#[derive(Debug, Default)]
pub(super) struct Frontier {
    heap: BinaryHeap<OpenNode>,
    next_seq: u64,
}

impl Frontier {
    pub fn push(&mut self, index: usize, cost: u32, priority: u32) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(OpenNode {
            priority,
            cost,
            index,
            seq,
        });
    }

    pub fn pop(&mut self) -> Option<OpenNode> {
        self.heap.pop()
    }

    /// Nodes pushed so far, stale entries included.
    pub fn discovered(&self) -> u64 {
        self.next_seq
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_lowest_priority_then_earliest_discovery() {
        let mut frontier = Frontier::default();
        frontier.push(10, 0, 5);
        frontier.push(11, 0, 3);
        frontier.push(12, 0, 5);
        frontier.push(13, 0, 3);

        let order: Vec<_> = std::iter::from_fn(|| frontier.pop())
            .map(|node| node.index)
            .collect();

        assert_eq!(order, vec![11, 13, 10, 12]);
        assert_eq!(frontier.discovered(), 4);
    }
}
