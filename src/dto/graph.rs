//! Graph view shared by the graph page and the JSON endpoint.

use serde::Serialize;

use crate::domain::graph::{NodeKind, RelationshipGraph};

const NODE_WIDTH: i32 = 240;
const NODE_HEIGHT: i32 = 100;
const CANVAS_PADDING: i32 = 40;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GraphNodeView {
    pub id: String,
    pub kind: NodeKind,
    pub label: String,
    pub caption: String,
    pub events: Vec<String>,
    pub cost: String,
    pub x: i32,
    pub y: i32,
}

/// Edge with its endpoints resolved to canvas coordinates.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GraphEdgeView {
    pub id: String,
    pub source: String,
    pub target: String,
    pub label: String,
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
    /// Anchor for the label, slightly above the midpoint.
    pub label_x: i32,
    pub label_y: i32,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct GraphView {
    pub nodes: Vec<GraphNodeView>,
    pub edges: Vec<GraphEdgeView>,
    pub node_width: i32,
    pub node_height: i32,
    pub width: i32,
    pub height: i32,
}

impl From<RelationshipGraph> for GraphView {
    fn from(graph: RelationshipGraph) -> Self {
        let anchor = |id: &str, right_side: bool| {
            graph
                .nodes
                .iter()
                .find(|node| node.id == id)
                .map(|node| {
                    let x = if right_side {
                        node.position.x + NODE_WIDTH
                    } else {
                        node.position.x
                    };
                    (x, node.position.y + NODE_HEIGHT / 2)
                })
                .unwrap_or_default()
        };

        let edges = graph
            .edges
            .iter()
            .map(|edge| {
                let (x1, y1) = anchor(&edge.source, true);
                let (x2, y2) = anchor(&edge.target, false);
                GraphEdgeView {
                    id: edge.id.clone(),
                    source: edge.source.clone(),
                    target: edge.target.clone(),
                    label: edge.label.clone(),
                    x1,
                    y1,
                    x2,
                    y2,
                    label_x: (x1 + x2) / 2,
                    label_y: (y1 + y2) / 2 - 6,
                }
            })
            .collect();

        let width = graph
            .nodes
            .iter()
            .map(|node| node.position.x + NODE_WIDTH)
            .max()
            .unwrap_or_default()
            + CANVAS_PADDING;
        let height = graph
            .nodes
            .iter()
            .map(|node| node.position.y + NODE_HEIGHT)
            .max()
            .unwrap_or_default()
            + CANVAS_PADDING;

        let nodes = graph
            .nodes
            .into_iter()
            .map(|node| GraphNodeView {
                id: node.id,
                kind: node.kind,
                label: node.label,
                caption: node.caption,
                events: node.events,
                cost: node.cost.to_currency_string(),
                x: node.position.x,
                y: node.position.y,
            })
            .collect();

        Self {
            nodes,
            edges,
            node_width: NODE_WIDTH,
            node_height: NODE_HEIGHT,
            width,
            height,
        }
    }
}
