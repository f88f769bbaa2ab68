//! Undirected graphs and BFS/DFS step generation
//!
//! Graph traversals always start from node 1. Every snapshot is the full set
//! of nodes visited so far; only membership matters, but the set is kept in
//! visit order so renderers can also print the order.

use super::constants::ROOT_NODE;
use super::errors::{InvalidInputError, StepError};
use super::input::{parse_count, parse_edges};
use crate::snapshot::{SnapshotRecorder, StepSequence};
use rustc_hash::FxHashSet;
use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

/// Nodes are numbered from 1
pub type NodeId = usize;

/// Visited nodes in the order they were reached
pub type VisitedSet = Vec<NodeId>;

/// An undirected edge between two 1-indexed nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub a: NodeId,
    pub b: NodeId,
}

impl Edge {
    pub fn new(a: NodeId, b: NodeId) -> Self {
        Edge { a, b }
    }
}

impl From<(NodeId, NodeId)> for Edge {
    fn from((a, b): (NodeId, NodeId)) -> Self {
        Edge { a, b }
    }
}

/// Node → neighbors, in the order the edges introduced them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMap {
    // index 0 is node 1
    neighbors: Vec<Vec<NodeId>>,
    edges: Vec<Edge>,
}

impl AdjacencyMap {
    /// Build the map symmetrically: edge (a, b) adds b to a's list and a to b's.
    ///
    /// Fails on any edge endpoint outside `1..=nodes`; the reported line is the
    /// edge's 1-based position in `edges`.
    pub fn from_edges(nodes: usize, edges: &[Edge]) -> Result<Self, InvalidInputError> {
        let mut neighbors = vec![Vec::new(); nodes];

        for (i, edge) in edges.iter().enumerate() {
            for node in [edge.a, edge.b] {
                if node == 0 || node > nodes {
                    return Err(InvalidInputError::NodeOutOfRange {
                        line: i + 1,
                        node,
                        nodes,
                    });
                }
            }
            neighbors[edge.a - 1].push(edge.b);
            neighbors[edge.b - 1].push(edge.a);
        }

        Ok(AdjacencyMap {
            neighbors,
            edges: edges.to_vec(),
        })
    }

    pub fn node_count(&self) -> usize {
        self.neighbors.len()
    }

    /// Neighbors of `node`; empty for unknown nodes
    pub fn neighbors(&self, node: NodeId) -> &[NodeId] {
        node.checked_sub(1)
            .and_then(|i| self.neighbors.get(i))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Edges in input order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphTraversal {
    Bfs,
    Dfs,
}

impl GraphTraversal {
    pub fn generate(self, graph: &AdjacencyMap) -> StepSequence<VisitedSet> {
        let steps = match self {
            GraphTraversal::Bfs => bfs_steps(graph),
            GraphTraversal::Dfs => dfs_steps(graph),
        };
        tracing::debug!(
            traversal = %self,
            nodes = graph.node_count(),
            snapshots = steps.len(),
            "generated graph traversal steps"
        );
        steps
    }
}

impl fmt::Display for GraphTraversal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphTraversal::Bfs => write!(f, "BFS"),
            GraphTraversal::Dfs => write!(f, "DFS"),
        }
    }
}

impl FromStr for GraphTraversal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" => Ok(GraphTraversal::Bfs),
            "dfs" => Ok(GraphTraversal::Dfs),
            other => Err(format!("unknown graph traversal: {}", other)),
        }
    }
}

/// Build a graph from edges and generate the traversal steps
pub fn generate_graph(
    traversal: GraphTraversal,
    nodes: usize,
    edges: &[Edge],
) -> Result<StepSequence<VisitedSet>, StepError> {
    let graph = AdjacencyMap::from_edges(nodes, edges)?;
    Ok(traversal.generate(&graph))
}

/// Parse a node count and an edge list, then generate the traversal steps
pub fn generate_graph_from_text(
    traversal: GraphTraversal,
    nodes_text: &str,
    edges_text: &str,
) -> Result<StepSequence<VisitedSet>, StepError> {
    let nodes = parse_count(nodes_text)?;
    let edges = parse_edges(edges_text, nodes)?;
    generate_graph(traversal, nodes, &edges)
}

/// Breadth-first from node 1.
///
/// Records the visited set once per dequeued node and once per newly
/// discovered neighbor. The dequeue frame repeats the previous set when
/// nothing new was found.
pub fn bfs_steps(graph: &AdjacencyMap) -> StepSequence<VisitedSet> {
    let mut recorder = SnapshotRecorder::new();
    if graph.node_count() == 0 {
        return recorder.finish();
    }

    let mut seen = FxHashSet::default();
    let mut visited: VisitedSet = Vec::new();
    let mut queue = VecDeque::new();

    seen.insert(ROOT_NODE);
    visited.push(ROOT_NODE);
    queue.push_back(ROOT_NODE);

    while let Some(node) = queue.pop_front() {
        recorder.record(&visited);
        for &neighbor in graph.neighbors(node) {
            if seen.insert(neighbor) {
                visited.push(neighbor);
                queue.push_back(neighbor);
                recorder.record(&visited);
            }
        }
    }

    recorder.finish()
}

/// Depth-first from node 1, descending into neighbors in adjacency order.
///
/// Records the visited set each time a node is first reached. Uses an explicit
/// stack of (node, next neighbor index) so deep graphs cannot overflow.
pub fn dfs_steps(graph: &AdjacencyMap) -> StepSequence<VisitedSet> {
    let mut recorder = SnapshotRecorder::new();
    if graph.node_count() == 0 {
        return recorder.finish();
    }

    let mut seen = FxHashSet::default();
    let mut visited: VisitedSet = Vec::new();
    let mut stack: Vec<(NodeId, usize)> = Vec::new();

    seen.insert(ROOT_NODE);
    visited.push(ROOT_NODE);
    recorder.record(&visited);
    stack.push((ROOT_NODE, 0));

    while let Some((node, next)) = stack.last_mut() {
        let neighbors = graph.neighbors(*node);
        match neighbors.get(*next) {
            Some(&neighbor) => {
                *next += 1;
                if seen.insert(neighbor) {
                    visited.push(neighbor);
                    recorder.record(&visited);
                    stack.push((neighbor, 0));
                }
            }
            None => {
                stack.pop();
            }
        }
    }

    recorder.finish()
}
