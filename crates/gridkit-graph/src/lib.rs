//! Undirected labeled graphs and clique enumeration.
//!
//! - [`graph`]: [`Graph`], built by repeated [`Graph::add_link`]
//! - [`clique`]: [`triangles`], [`maximal_cliques`] (Bron–Kerbosch) and [`maximum_clique`]
//!
//! # Examples
//!
//! ```
//! use gridkit_graph::{Graph, maximum_clique};
//!
//! let graph: Graph<&str> = "ka-co ta-co de-co ta-ka de-ta ka-de"
//!     .split_whitespace()
//!     .filter_map(|link| link.split_once('-'))
//!     .collect();
//! assert_eq!(maximum_clique(&graph).map(|c| c.join(",")).as_deref(), Some("co,de,ka,ta"));
//! ```

pub mod clique;
pub mod graph;

pub use self::{
    clique::{maximal_cliques, maximum_clique, triangles},
    graph::Graph,
};
