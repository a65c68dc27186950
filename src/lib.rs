//! In-memory undirected graph containers with caller-chosen payloads.
//!
//! The same abstract graph is offered in two storage representations:
//!
//!  - [`MappedGraph`] keys nodes by caller-supplied, totally ordered
//!    identifiers; [`IndexGraph`] specializes it to auto-assigned,
//!    contiguous integer identifiers that renumber on removal.
//!  - [`DenseGraph`] stores nodes in a vector and identifies them by
//!    position, also renumbering on removal.
//!
//! All three share one operation surface and produce lazy, non-owning
//! views over nodes, edges, and per-node incident edges. Because the views
//! borrow the graph, structural mutation while a view is alive is rejected
//! at compile time.
//!
//! # Example
//!
//! ```
//! use ungraph::MappedGraph;
//!
//! let mut graph = MappedGraph::new();
//! graph.add_node("a", ());
//! graph.add_node("b", ());
//! graph.add_node("c", ());
//! graph.add_edge("a", "b", 1);
//! graph.add_edge("b", "c", 2);
//!
//! assert_eq!(graph.edge_count(), 2);
//! assert!(graph.edges().iter().eq([["a", "b"], ["b", "c"]]));
//! assert!(graph.neighbors("b").eq(["a", "c"]));
//! ```

pub mod attr;
pub mod dense;
pub mod mapped;
pub mod ordmap;

pub use crate::attr::{AttrMap, AttrValue, NoAttr};
pub use crate::dense::DenseGraph;
pub use crate::mapped::{IndexGraph, MappedGraph};

use thiserror::Error;

/// Error returned by node removal and the checked view accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    /// The identifier is not a node of the graph.
    #[error("unknown node")]
    UnknownNode,
    /// The pair is not an edge of the graph.
    #[error("unknown edge")]
    UnknownEdge,
}
