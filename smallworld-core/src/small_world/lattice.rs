//! Ring lattice phase of small-world construction.

use tracing::debug;

use crate::{error::Result, graph::Graph};

/// Joins every node to the `ring_degree / 2` nearest nodes on each side.
///
/// Offsets are visited from `-half` to `half`, skipping zero. An offset that
/// wraps back onto the node itself is skipped; pairs reached from both sides
/// (when the lattice covers the whole ring) are absorbed by
/// [`Graph::add_edge`]. Returns the resulting edge count.
pub(super) fn add_ring_lattice(graph: &mut Graph) -> Result<usize> {
    let node_count = graph.node_count();
    let half = graph.ring_degree() / 2;
    if node_count == 0 || half == 0 {
        return Ok(0);
    }

    for node in 0..node_count {
        let behind = (1..=half)
            .rev()
            .map(|offset| (node + node_count - offset % node_count) % node_count);
        let ahead = (1..=half).map(|offset| (node + offset % node_count) % node_count);
        for neighbour in behind.chain(ahead) {
            if neighbour != node {
                graph.add_edge(node, neighbour)?;
            }
        }
    }

    debug!(
        nodes = node_count,
        half_degree = half,
        edges = graph.edge_count(),
        "ring lattice complete"
    );
    Ok(graph.edge_count())
}
