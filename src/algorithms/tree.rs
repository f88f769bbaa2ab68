//! Rooted tree traversals over an undirected edge list
//!
//! The tree is rooted at node 1 and parent/child direction comes from the
//! walk itself: a node's children are its neighbors other than the node it
//! was reached from, in adjacency order. Each visit appends the node to the
//! running order and records the whole order, which (unlike the graph
//! visited set) is meaningful.
//!
//! Inorder treats the first child as "left" and the second as "right"; any
//! further children are not visited.

use super::constants::ROOT_NODE;
use super::errors::{InvalidInputError, StepError};
use super::graph::{AdjacencyMap, Edge, NodeId};
use super::input::{parse_count, parse_edges};
use crate::snapshot::{SnapshotRecorder, StepSequence};
use std::fmt;
use std::str::FromStr;

/// Nodes in the order they were visited
pub type VisitOrder = Vec<NodeId>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeTraversal {
    Preorder,
    Inorder,
    Postorder,
}

impl fmt::Display for TreeTraversal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TreeTraversal::Preorder => "Preorder",
            TreeTraversal::Inorder => "Inorder",
            TreeTraversal::Postorder => "Postorder",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for TreeTraversal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "preorder" | "pre" => Ok(TreeTraversal::Preorder),
            "inorder" | "in" => Ok(TreeTraversal::Inorder),
            "postorder" | "post" => Ok(TreeTraversal::Postorder),
            other => Err(format!("unknown tree traversal: {}", other)),
        }
    }
}

/// A validated tree: `n - 1` edges connecting all of `1..=n`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree {
    adjacency: AdjacencyMap,
}

impl Tree {
    /// Validate and build a tree over `nodes` nodes.
    ///
    /// Rejects a wrong edge count, out-of-range endpoints, and edge sets that
    /// leave some node unreachable from the root. With exactly `n - 1` edges,
    /// full reachability also rules out cycles and duplicate edges.
    pub fn new(nodes: usize, edges: &[Edge]) -> Result<Self, InvalidInputError> {
        let expected = nodes.saturating_sub(1);
        if edges.len() != expected {
            return Err(InvalidInputError::WrongEdgeCount {
                nodes,
                expected,
                got: edges.len(),
            });
        }

        let adjacency = AdjacencyMap::from_edges(nodes, edges)?;

        if nodes > 0 {
            let mut reached = vec![false; nodes];
            let mut stack = vec![ROOT_NODE];
            reached[ROOT_NODE - 1] = true;
            while let Some(node) = stack.pop() {
                for &neighbor in adjacency.neighbors(node) {
                    if !reached[neighbor - 1] {
                        reached[neighbor - 1] = true;
                        stack.push(neighbor);
                    }
                }
            }
            if let Some(missing) = reached.iter().position(|&r| !r) {
                return Err(InvalidInputError::NotATree { node: missing + 1 });
            }
        }

        Ok(Tree { adjacency })
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.node_count()
    }

    pub fn adjacency(&self) -> &AdjacencyMap {
        &self.adjacency
    }

    /// Children of `node` when reached from `parent`
    pub fn children(&self, node: NodeId, parent: Option<NodeId>) -> Vec<NodeId> {
        self.adjacency
            .neighbors(node)
            .iter()
            .copied()
            .filter(|&n| Some(n) != parent)
            .collect()
    }

    pub fn traverse(&self, traversal: TreeTraversal) -> StepSequence<VisitOrder> {
        let mut walk = Walk {
            tree: self,
            traversal,
            order: Vec::new(),
            recorder: SnapshotRecorder::new(),
        };

        if self.node_count() > 0 {
            walk.run();
        }

        let steps = walk.recorder.finish();
        tracing::debug!(
            traversal = %traversal,
            nodes = self.node_count(),
            snapshots = steps.len(),
            "generated tree traversal steps"
        );
        steps
    }
}

/// A node on the walk stack, with the children still to descend into
struct Pending {
    node: NodeId,
    children: Vec<NodeId>,
    next: usize,
    visited: bool,
}

struct Walk<'a> {
    tree: &'a Tree,
    traversal: TreeTraversal,
    order: VisitOrder,
    recorder: SnapshotRecorder<VisitOrder>,
}

impl Walk<'_> {
    fn visit(&mut self, node: NodeId) {
        self.order.push(node);
        self.recorder.record(&self.order);
    }

    fn enter(&mut self, node: NodeId, parent: Option<NodeId>) -> Pending {
        let mut children = self.tree.children(node, parent);
        if self.traversal == TreeTraversal::Inorder {
            children.truncate(2);
        }
        let visited = self.traversal == TreeTraversal::Preorder;
        if visited {
            self.visit(node);
        }
        Pending {
            node,
            children,
            next: 0,
            visited,
        }
    }

    /// Depth-first walk from the root on an explicit stack
    fn run(&mut self) {
        let mut stack = vec![self.enter(ROOT_NODE, None)];

        while let Some(top) = stack.last_mut() {
            // Inorder visits between the left child and the right one
            if self.traversal == TreeTraversal::Inorder
                && !top.visited
                && top.next >= top.children.len().min(1)
            {
                top.visited = true;
                let node = top.node;
                self.visit(node);
                continue;
            }

            match top.children.get(top.next).copied() {
                Some(child) => {
                    top.next += 1;
                    let parent = top.node;
                    let pending = self.enter(child, Some(parent));
                    stack.push(pending);
                }
                None => {
                    let node = top.node;
                    stack.pop();
                    if self.traversal == TreeTraversal::Postorder {
                        self.visit(node);
                    }
                }
            }
        }
    }
}

/// Validate a tree and generate the traversal steps
pub fn generate_tree(
    traversal: TreeTraversal,
    nodes: usize,
    edges: &[Edge],
) -> Result<StepSequence<VisitOrder>, StepError> {
    let tree = Tree::new(nodes, edges)?;
    Ok(tree.traverse(traversal))
}

/// Parse a node count and edge list, validate the tree, and generate steps
pub fn generate_tree_from_text(
    traversal: TreeTraversal,
    nodes_text: &str,
    edges_text: &str,
) -> Result<StepSequence<VisitOrder>, StepError> {
    let nodes = parse_count(nodes_text)?;
    let edges = parse_edges(edges_text, nodes)?;
    generate_tree(traversal, nodes, &edges)
}
