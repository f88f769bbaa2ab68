//! Graph and tree traversal panes
//!
//! The left side shows the structure (adjacency list for graphs, an indented
//! outline for trees) with visited nodes highlighted. The right side shows the
//! traversal order so far.

use super::pane_block;
use crate::algorithms::constants::ROOT_NODE;
use crate::algorithms::graph::{AdjacencyMap, NodeId};
use crate::algorithms::tree::Tree;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// One structure row: text prefix and the node it describes
pub struct StructureRow {
    pub prefix: String,
    pub node: NodeId,
    pub suffix: String,
}

/// Rows for a graph: `node: neighbors...`
pub fn graph_rows(graph: &AdjacencyMap) -> Vec<StructureRow> {
    (1..=graph.node_count())
        .map(|node| {
            let neighbors: Vec<String> = graph
                .neighbors(node)
                .iter()
                .map(|n| n.to_string())
                .collect();
            StructureRow {
                prefix: String::new(),
                node,
                suffix: format!(" → {}", neighbors.join(" ")),
            }
        })
        .collect()
}

/// Rows for a tree rooted at node 1, children indented under their parent
pub fn tree_rows(tree: &Tree) -> Vec<StructureRow> {
    let mut rows = Vec::new();
    if tree.node_count() == 0 {
        return rows;
    }

    // (node, parent, indent, is_last); root has no parent and no connector
    let mut stack: Vec<(NodeId, Option<NodeId>, String, bool)> =
        vec![(ROOT_NODE, None, String::new(), true)];

    while let Some((node, parent, indent, is_last)) = stack.pop() {
        let (prefix, child_indent) = match parent {
            None => (String::new(), String::new()),
            Some(_) if is_last => (format!("{}└─ ", indent), format!("{}   ", indent)),
            Some(_) => (format!("{}├─ ", indent), format!("{}│  ", indent)),
        };
        rows.push(StructureRow {
            prefix,
            node,
            suffix: String::new(),
        });

        let children = tree.children(node, parent);
        let count = children.len();
        // Pushed in reverse so the first child is drawn first
        for (i, child) in children.into_iter().enumerate().rev() {
            stack.push((child, Some(node), child_indent.clone(), i + 1 == count));
        }
    }
    rows
}

pub fn render_traversal_pane(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    rows: &[StructureRow],
    visited: &[NodeId],
) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let structure: Vec<Line> = if rows.is_empty() {
        vec![Line::from(Span::styled(
            "(no nodes)",
            Style::default().fg(DEFAULT_THEME.comment),
        ))]
    } else {
        rows.iter()
            .map(|row| {
                let node_style = if visited.contains(&row.node) {
                    Style::default()
                        .fg(DEFAULT_THEME.highlight)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(DEFAULT_THEME.success)
                };
                Line::from(vec![
                    Span::styled(row.prefix.clone(), Style::default().fg(DEFAULT_THEME.comment)),
                    Span::styled(format!("({})", row.node), node_style),
                    Span::styled(row.suffix.clone(), Style::default().fg(DEFAULT_THEME.fg)),
                ])
            })
            .collect()
    };

    frame.render_widget(
        Paragraph::new(structure).block(pane_block(title)),
        columns[0],
    );

    let order_text = if visited.is_empty() {
        Span::styled("(nothing visited yet)", Style::default().fg(DEFAULT_THEME.comment))
    } else {
        let order: Vec<String> = visited.iter().map(|n| n.to_string()).collect();
        Span::styled(
            order.join(" → "),
            Style::default()
                .fg(DEFAULT_THEME.highlight)
                .add_modifier(Modifier::BOLD),
        )
    };

    frame.render_widget(
        Paragraph::new(Line::from(order_text))
            .block(pane_block("Traversal Order"))
            .wrap(Wrap { trim: true }),
        columns[1],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::graph::Edge;

    fn tree(nodes: usize, pairs: &[(usize, usize)]) -> Tree {
        let edges: Vec<Edge> = pairs.iter().map(|&p| Edge::from(p)).collect();
        Tree::new(nodes, &edges).unwrap()
    }

    #[test]
    fn test_tree_rows_outline() {
        let rows = tree_rows(&tree(5, &[(1, 2), (1, 3), (2, 4), (2, 5)]));
        let lines: Vec<String> = rows
            .iter()
            .map(|r| format!("{}{}", r.prefix, r.node))
            .collect();
        assert_eq!(lines, vec!["1", "├─ 2", "│  ├─ 4", "│  └─ 5", "└─ 3"]);
    }

    #[test]
    fn test_tree_rows_deep_path_on_small_stack() {
        let n = 2_000;
        let pairs: Vec<(usize, usize)> = (1..n).map(|k| (k, k + 1)).collect();
        let path = tree(n, &pairs);

        // Outline depth must not depend on the thread's stack
        let rows = std::thread::Builder::new()
            .stack_size(128 * 1024)
            .spawn(move || tree_rows(&path))
            .unwrap()
            .join()
            .unwrap();
        assert_eq!(rows.len(), n);
        assert_eq!(rows.last().map(|r| r.node), Some(n));
    }

    #[test]
    fn test_graph_rows_list_neighbors() {
        let edges = vec![Edge::from((1, 2)), Edge::from((1, 3))];
        let graph = AdjacencyMap::from_edges(3, &edges).unwrap();
        let rows = graph_rows(&graph);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].suffix, " → 2 3");
        assert_eq!(rows[2].suffix, " → 1");
    }
}
