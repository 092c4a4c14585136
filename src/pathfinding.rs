//! Dijkstra's and A* shortest-path search on a [`MinPriorityQueue`]
//!
//! The open set is a `MinPriorityQueue` of frontier entries whose identity is
//! the node and whose order is the f-score. When a cheaper route to a queued
//! node turns up, the entry is replaced in place with
//! [`decrease_key`](crate::ArrayHeap::decrease_key) instead of queueing a
//! duplicate.
//!
//! Note: Dijkstra and A* are the same algorithm. A* adds a heuristic, and
//! Dijkstra is A* with h(n) = 0.
//!
//! # Example
//!
//! ```rust
//! use indexed_heaps::pathfinding::{dijkstra, SearchNode};
//!
//! #[derive(Clone, PartialEq, Eq, Hash)]
//! struct GridPos { x: i32, y: i32, goal_x: i32, goal_y: i32 }
//!
//! impl SearchNode for GridPos {
//!     type Cost = u32;
//!
//!     fn successors(&self) -> Vec<(Self, Self::Cost)> {
//!         [(1, 0), (-1, 0), (0, 1), (0, -1)]
//!             .into_iter()
//!             .map(|(dx, dy)| (GridPos { x: self.x + dx, y: self.y + dy, ..*self }, 1))
//!             .collect()
//!     }
//!
//!     fn is_goal(&self) -> bool {
//!         self.x == self.goal_x && self.y == self.goal_y
//!     }
//! }
//!
//! let start = GridPos { x: 0, y: 0, goal_x: 2, goal_y: 2 };
//! let (path, cost) = dijkstra(&start).unwrap().unwrap();
//! assert_eq!(cost, 4);
//! assert_eq!(path.len(), 5);
//! ```

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ops::Add;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::array_heap::MinPriorityQueue;
use crate::error::HeapError;
use crate::traits::Compare;

/// Trait for types that can be used as costs in pathfinding algorithms.
///
/// Costs must be non-negative for the searches to return optimal paths.
pub trait Cost: Ord + Copy + Add<Output = Self> + Default {}

impl<T> Cost for T where T: Ord + Copy + Add<Output = Self> + Default {}

/// Trait for nodes in a search graph.
pub trait SearchNode: Clone + Eq + Hash {
    /// The cost type for edge weights
    type Cost: Cost;

    /// Returns all successor nodes along with the cost to reach them.
    fn successors(&self) -> Vec<(Self, Self::Cost)>;

    /// Returns true if this node is a goal state.
    fn is_goal(&self) -> bool;
}

/// Trait for nodes that can provide a heuristic estimate for A* search.
///
/// The heuristic must be admissible and consistent (never overestimate, and
/// never drop by more than an edge's cost) for A* to return optimal paths.
pub trait AStarNode: SearchNode {
    /// Returns a heuristic estimate of the cost from this node to any goal.
    fn heuristic(&self) -> Self::Cost;
}

/// An open-set entry: equal and hashed by node, ordered by f-score
#[derive(Debug, Clone)]
struct Frontier<N, K> {
    node: N,
    f_score: K,
    g_score: K,
}

impl<N: PartialEq, K> PartialEq for Frontier<N, K> {
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node
    }
}

impl<N: Eq, K> Eq for Frontier<N, K> {}

impl<N: Hash, K> Hash for Frontier<N, K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.node.hash(state);
    }
}

/// Orders frontier entries by f-score
#[derive(Debug, Clone, Copy, Default)]
struct ByFScore;

impl<N, K: Ord> Compare<Frontier<N, K>> for ByFScore {
    fn compare(&self, a: &Frontier<N, K>, b: &Frontier<N, K>) -> Ordering {
        a.f_score.cmp(&b.f_score)
    }
}

type OpenSet<N, K> = MinPriorityQueue<Frontier<N, K>, ByFScore>;

/// Bookkeeping shared by every search
struct Search<N: SearchNode> {
    open: OpenSet<N, N::Cost>,
    /// Best known g-score per discovered node
    best: FxHashMap<N, N::Cost>,
    came_from: FxHashMap<N, N>,
    closed: FxHashSet<N>,
}

impl<N: SearchNode> Search<N> {
    fn new(start: &N, start_f: N::Cost) -> Result<Self, HeapError> {
        let mut search = Self {
            open: MinPriorityQueue::with_comparator(ByFScore),
            best: FxHashMap::default(),
            came_from: FxHashMap::default(),
            closed: FxHashSet::default(),
        };
        search.best.insert(start.clone(), N::Cost::default());
        search.open.push(Frontier {
            node: start.clone(),
            f_score: start_f,
            g_score: N::Cost::default(),
        })?;
        Ok(search)
    }

    /// Pops the cheapest open node and marks it closed
    fn next_closed(&mut self) -> Option<(N, N::Cost)> {
        let Frontier { node, g_score, .. } = self.open.pop()?;
        self.closed.insert(node.clone());
        Some((node, g_score))
    }

    /// Records a route to `neighbor` through `from`, if it is the cheapest so far
    fn relax(
        &mut self,
        from: &N,
        neighbor: N,
        g_score: N::Cost,
        f_score: N::Cost,
    ) -> Result<(), HeapError> {
        if self.closed.contains(&neighbor) {
            return Ok(());
        }
        let entry = Frontier {
            node: neighbor.clone(),
            f_score,
            g_score,
        };
        match self.best.get(&neighbor) {
            Some(&known) if known <= g_score => return Ok(()),
            // Discovered but not closed, so it is still queued
            Some(_) => self.open.decrease_key(entry)?,
            None => self.open.push(entry)?,
        }
        self.best.insert(neighbor.clone(), g_score);
        self.came_from.insert(neighbor, from.clone());
        Ok(())
    }

    fn reconstruct_path(&self, goal: N) -> Vec<N> {
        let mut path = vec![goal];
        while let Some(previous) = path.last().and_then(|node| self.came_from.get(node)) {
            path.push(previous.clone());
        }
        path.reverse();
        path
    }
}

/// Runs Dijkstra's algorithm from the start node until `is_goal()` returns true.
///
/// # Returns
/// - `Ok(Some((path, cost)))` if a path is found; the path includes both ends
/// - `Ok(None)` if no goal is reachable
///
/// # Errors
/// `HeapError::AllocationFailure` if the open set cannot grow.
pub fn dijkstra<N: SearchNode>(start: &N) -> Result<Option<(Vec<N>, N::Cost)>, HeapError> {
    search_impl(start, |_| N::Cost::default())
}

/// Runs A* search from the start node until `is_goal()` returns true.
///
/// Uses the node's `heuristic()` method to guide the search.
///
/// # Errors
/// `HeapError::AllocationFailure` if the open set cannot grow.
pub fn astar<N: AStarNode>(start: &N) -> Result<Option<(Vec<N>, N::Cost)>, HeapError> {
    search_impl(start, |node| node.heuristic())
}

fn search_impl<N: SearchNode>(
    start: &N,
    heuristic: impl Fn(&N) -> N::Cost,
) -> Result<Option<(Vec<N>, N::Cost)>, HeapError> {
    let mut search = Search::new(start, heuristic(start))?;

    while let Some((current, current_g)) = search.next_closed() {
        if current.is_goal() {
            return Ok(Some((search.reconstruct_path(current), current_g)));
        }
        for (neighbor, edge_cost) in current.successors() {
            let tentative_g = current_g + edge_cost;
            let f_score = tentative_g + heuristic(&neighbor);
            search.relax(&current, neighbor, tentative_g, f_score)?;
        }
    }

    Ok(None)
}

/// Returns all nodes reachable from the start within a given cost budget,
/// in order of increasing cost.
///
/// # Errors
/// `HeapError::AllocationFailure` if the open set cannot grow.
pub fn reachable_within<N: SearchNode>(
    start: &N,
    max_cost: N::Cost,
) -> Result<Vec<(N, N::Cost)>, HeapError> {
    let mut result = Vec::new();
    if max_cost < N::Cost::default() {
        return Ok(result);
    }
    let mut search = Search::new(start, N::Cost::default())?;

    while let Some((current, current_g)) = search.next_closed() {
        for (neighbor, edge_cost) in current.successors() {
            let tentative_g = current_g + edge_cost;
            if tentative_g > max_cost {
                continue;
            }
            search.relax(&current, neighbor, tentative_g, tentative_g)?;
        }
        result.push((current, current_g));
    }

    Ok(result)
}
