//! Client → vendor relationship graph for the visualisation page.
//!
//! One node per client, one node per distinct (client, vendor) pair and one
//! edge joining them. Positions are laid out in two columns, clients on the
//! left and their vendors stacked on the right.

use serde::Serialize;

use crate::domain::cost::{CostEngine, group_events_by_vendor};
use crate::domain::summary::ClientSummary;
use crate::domain::types::Price;

const CLIENT_COLUMN_X: i32 = 50;
const VENDOR_COLUMN_X: i32 = 400;
const VENDOR_ROW_HEIGHT: i32 = 140;
const MIN_CLIENT_BLOCK_HEIGHT: i32 = 100;
const CLIENT_BLOCK_GAP: i32 = 50;

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Client,
    Vendor,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct GraphNode {
    pub id: String,
    pub kind: NodeKind,
    pub label: String,
    /// Contact number for clients, event count for vendors.
    pub caption: String,
    /// Names of the events behind a vendor node; empty for clients.
    pub events: Vec<String>,
    pub cost: Price,
    pub position: Position,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct GraphEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub label: String,
}

#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct RelationshipGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl RelationshipGraph {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

fn pluralize_events(count: usize) -> String {
    if count == 1 {
        "1 event".to_string()
    } else {
        format!("{count} events")
    }
}

/// Lays out the graph for the given clients. Vendors missing from the
/// engine's catalog get neither a node nor an edge.
pub fn build_relationship_graph(
    clients: &[ClientSummary],
    engine: &CostEngine<'_>,
) -> RelationshipGraph {
    let mut graph = RelationshipGraph::default();
    let mut y_offset = 0;

    for summary in clients {
        let client = &summary.client;
        let client_node_id = format!("client-{}", client.id);

        graph.nodes.push(GraphNode {
            id: client_node_id.clone(),
            kind: NodeKind::Client,
            label: client.name.to_string(),
            caption: client.contact_no.to_string(),
            events: Vec::new(),
            cost: summary.total_cost,
            position: Position {
                x: CLIENT_COLUMN_X,
                y: y_offset,
            },
        });

        let mut block_height = 0;
        for (vendor_id, events) in group_events_by_vendor(&summary.events) {
            let Some(vendor) = engine.vendor(vendor_id) else {
                continue;
            };

            let vendor_node_id = format!("vendor-{}-{}", client.id, vendor_id);
            let cost: Price = events.iter().map(|event| engine.event_cost(*event)).sum();

            graph.nodes.push(GraphNode {
                id: vendor_node_id.clone(),
                kind: NodeKind::Vendor,
                label: vendor.name.to_string(),
                caption: pluralize_events(events.len()),
                events: events.iter().map(|event| event.name.to_string()).collect(),
                cost,
                position: Position {
                    x: VENDOR_COLUMN_X,
                    y: y_offset + block_height,
                },
            });

            let label = events
                .iter()
                .map(|event| event.category.as_deref().unwrap_or_default())
                .collect::<Vec<_>>()
                .join(" | ");

            graph.edges.push(GraphEdge {
                id: format!("edge-{}-{}", client.id, vendor_id),
                source: client_node_id.clone(),
                target: vendor_node_id,
                label,
            });

            block_height += VENDOR_ROW_HEIGHT;
        }

        y_offset += block_height.max(MIN_CLIENT_BLOCK_HEIGHT) + CLIENT_BLOCK_GAP;
    }

    graph
}
