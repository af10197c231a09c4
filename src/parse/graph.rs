//! petgraph-based directed view of the parsed workspace.
//!
//! Nodes are block ids, edges are connections. The view never rejects a workflow: a
//! connection naming an unknown block is left out and listed in `unresolved`.

use std::collections::HashMap;

use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use tracing::debug;

use super::types::Workflow;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortLink {
    pub connection_id: usize,
    pub output: String,
    pub input: String,
}

pub struct WorkspaceGraph {
    pub graph: DiGraph<i32, PortLink>,
    pub node_indices: HashMap<i32, NodeIndex>,
    /// Ids of connections whose start or end block is not declared.
    pub unresolved: Vec<usize>,
}

impl WorkspaceGraph {
    pub fn build(workflow: &Workflow) -> Self {
        let mut graph = DiGraph::new();
        let mut node_indices = HashMap::new();
        let mut unresolved = Vec::new();

        // A repeated block id keeps its first node.
        for block in &workflow.blocks {
            node_indices
                .entry(block.id)
                .or_insert_with(|| graph.add_node(block.id));
        }

        for conn in &workflow.connections {
            match (
                node_indices.get(&conn.start_block),
                node_indices.get(&conn.end_block),
            ) {
                (Some(&s), Some(&t)) => {
                    graph.add_edge(
                        s,
                        t,
                        PortLink {
                            connection_id: conn.id,
                            output: conn.output_start_block.clone(),
                            input: conn.input_end_block.clone(),
                        },
                    );
                }
                _ => {
                    debug!(
                        connection = conn.id,
                        from = conn.start_block,
                        to = conn.end_block,
                        "connection left out of graph"
                    );
                    unresolved.push(conn.id);
                }
            }
        }

        WorkspaceGraph {
            graph,
            node_indices,
            unresolved,
        }
    }

    /// Blocks fed by `block_id`, one entry per outgoing connection.
    pub fn successors(&self, block_id: i32) -> Vec<(i32, &PortLink)> {
        self.neighbors(block_id, Direction::Outgoing)
    }

    /// Blocks feeding `block_id`, one entry per incoming connection.
    pub fn predecessors(&self, block_id: i32) -> Vec<(i32, &PortLink)> {
        self.neighbors(block_id, Direction::Incoming)
    }

    pub fn incoming_count(&self, block_id: i32) -> usize {
        self.predecessors(block_id).len()
    }

    pub fn outgoing_count(&self, block_id: i32) -> usize {
        self.successors(block_id).len()
    }

    fn neighbors(&self, block_id: i32, direction: Direction) -> Vec<(i32, &PortLink)> {
        let Some(&idx) = self.node_indices.get(&block_id) else {
            return vec![];
        };
        let mut found: Vec<(i32, &PortLink)> = self
            .graph
            .edges_directed(idx, direction)
            .map(|edge| {
                let other = match direction {
                    Direction::Outgoing => edge.target(),
                    Direction::Incoming => edge.source(),
                };
                (self.graph[other], edge.weight())
            })
            .collect();
        // petgraph walks edges newest first.
        found.sort_by_key(|(_, link)| link.connection_id);
        found
    }
}
