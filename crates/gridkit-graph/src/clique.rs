//! Clique enumeration.
//!
//! [`maximal_cliques`] runs Bron–Kerbosch without pivoting. Candidates are
//! tried in node-id order, so results are deterministic for a given
//! insertion order.

use std::{collections::BTreeSet, hash::Hash};

use crate::graph::Graph;

/// Every 3-clique, each as sorted labels, in sorted order.
///
/// # Examples
///
/// ```
/// use gridkit_graph::{Graph, triangles};
///
/// let graph: Graph<&str> = [("a", "b"), ("b", "c"), ("c", "a"), ("c", "d")]
///     .into_iter()
///     .collect();
/// assert_eq!(triangles(&graph), vec![["a", "b", "c"]]);
/// ```
pub fn triangles<L, E>(graph: &Graph<L, E>) -> Vec<[L; 3]>
where
    L: Clone + Ord + Hash,
{
    let mut found = Vec::new();
    for a in 0..graph.node_count() {
        let near = graph.neighbor_ids(a);
        for &b in near.iter().filter(|&&b| b > a) {
            for &c in near.iter().filter(|&&c| c > b) {
                if graph.neighbor_ids(b).contains(&c) {
                    let mut labels = [a, b, c].map(|id| graph.label(id).clone());
                    labels.sort();
                    found.push(labels);
                }
            }
        }
    }
    found.sort();
    found
}

/// Every maximal clique, each as labels in node-id order.
///
/// Isolated nodes form singleton cliques. An empty graph has no cliques.
///
/// # Examples
///
/// ```
/// use gridkit_graph::{Graph, maximal_cliques};
///
/// let mut graph: Graph<char> = [('a', 'b'), ('b', 'c'), ('a', 'c'), ('c', 'd')]
///     .into_iter()
///     .collect();
/// graph.add_node('e');
/// let cliques = maximal_cliques(&graph);
/// assert_eq!(cliques, vec![vec!['a', 'b', 'c'], vec!['c', 'd'], vec!['e']]);
/// ```
pub fn maximal_cliques<L, E>(graph: &Graph<L, E>) -> Vec<Vec<L>>
where
    L: Clone + Eq + Hash,
{
    let mut cliques: Vec<Vec<usize>> = Vec::new();
    if graph.node_count() == 0 {
        return Vec::new();
    }
    let candidates = (0..graph.node_count()).collect();
    bron_kerbosch(
        graph,
        &mut Vec::new(),
        candidates,
        BTreeSet::new(),
        &mut cliques,
    );
    log::debug!(
        "{} maximal cliques among {} nodes",
        cliques.len(),
        graph.node_count()
    );
    cliques
        .into_iter()
        .map(|ids| ids.into_iter().map(|id| graph.label(id).clone()).collect())
        .collect()
}

fn bron_kerbosch<L, E>(
    graph: &Graph<L, E>,
    clique: &mut Vec<usize>,
    mut candidates: BTreeSet<usize>,
    mut excluded: BTreeSet<usize>,
    out: &mut Vec<Vec<usize>>,
) where
    L: Clone + Eq + Hash,
{
    if candidates.is_empty() && excluded.is_empty() {
        out.push(clique.clone());
        return;
    }
    while let Some(v) = candidates.pop_first() {
        let near = graph.neighbor_ids(v);
        clique.push(v);
        bron_kerbosch(
            graph,
            clique,
            candidates.iter().copied().filter(|n| near.contains(n)).collect(),
            excluded.iter().copied().filter(|n| near.contains(n)).collect(),
            out,
        );
        clique.pop();
        excluded.insert(v);
    }
}

/// The first largest maximal clique, as sorted labels.
///
/// Returns `None` for an empty graph.
pub fn maximum_clique<L, E>(graph: &Graph<L, E>) -> Option<Vec<L>>
where
    L: Clone + Ord + Hash,
{
    let mut best: Option<Vec<L>> = None;
    for clique in maximal_cliques(graph) {
        if best.as_ref().is_none_or(|b| clique.len() > b.len()) {
            best = Some(clique);
        }
    }
    let mut best = best?;
    best.sort();
    Some(best)
}
