//! Undirected labeled graphs.

use std::hash::Hash;

use rustc_hash::{FxHashMap, FxHashSet};

/// An undirected graph whose nodes are identified by labels.
///
/// Each edge joins an unordered pair of distinct nodes and carries a value
/// of type `E`. Nodes and edges are never removed.
///
/// # Examples
///
/// ```
/// use gridkit_graph::Graph;
///
/// let mut graph = Graph::<&str>::new();
/// assert!(graph.add_link("kh", "tc"));
/// assert!(!graph.add_link("tc", "kh"));
/// assert!(graph.has_link(&"tc", &"kh"));
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!(graph.edge_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Graph<L, E = ()> {
    labels: Vec<L>,
    ids: FxHashMap<L, usize>,
    adjacency: Vec<FxHashSet<usize>>,
    edges: FxHashMap<(usize, usize), E>,
}

impl<L, E> Default for Graph<L, E> {
    fn default() -> Self {
        Self {
            labels: Vec::new(),
            ids: FxHashMap::default(),
            adjacency: Vec::new(),
            edges: FxHashMap::default(),
        }
    }
}

impl<L, E> Graph<L, E>
where
    L: Clone + Eq + Hash,
{
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `label` if absent and returns its node id.
    ///
    /// Ids are dense and assigned in insertion order.
    pub fn add_node(&mut self, label: L) -> usize {
        if let Some(&id) = self.ids.get(&label) {
            return id;
        }
        let id = self.labels.len();
        self.labels.push(label.clone());
        self.ids.insert(label, id);
        self.adjacency.push(FxHashSet::default());
        id
    }

    /// Links `a` and `b` with a default edge value, adding missing nodes.
    ///
    /// Returns `true` if a new edge was created.
    pub fn add_link(&mut self, a: L, b: L) -> bool
    where
        E: Default,
    {
        self.add_link_with(a, b, E::default())
    }

    /// Links `a` and `b` with `value`, adding missing nodes.
    ///
    /// An existing edge keeps its value. Self-loops are not stored. Returns
    /// `true` if a new edge was created.
    pub fn add_link_with(&mut self, a: L, b: L, value: E) -> bool {
        let a = self.add_node(a);
        let b = self.add_node(b);
        if a == b {
            return false;
        }
        let key = (a.min(b), a.max(b));
        if self.edges.contains_key(&key) {
            return false;
        }
        self.edges.insert(key, value);
        self.adjacency[a].insert(b);
        self.adjacency[b].insert(a);
        true
    }

    /// The node id of `label`.
    #[must_use]
    pub fn id(&self, label: &L) -> Option<usize> {
        self.ids.get(label).copied()
    }

    /// The label of node `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not a node id of this graph.
    #[must_use]
    pub fn label(&self, id: usize) -> &L {
        &self.labels[id]
    }

    /// Neighbors of `label`; empty if the node is absent.
    pub fn neighbors<'a>(&'a self, label: &L) -> impl Iterator<Item = &'a L> + use<'a, L, E> {
        self.id(label)
            .into_iter()
            .flat_map(|id| self.adjacency[id].iter())
            .map(|&n| &self.labels[n])
    }

    /// Neighbor ids of node `id`.
    #[must_use]
    pub fn neighbor_ids(&self, id: usize) -> &FxHashSet<usize> {
        &self.adjacency[id]
    }

    /// The value of the edge between `a` and `b`.
    #[must_use]
    pub fn link(&self, a: &L, b: &L) -> Option<&E> {
        let (a, b) = (self.id(a)?, self.id(b)?);
        self.edges.get(&(a.min(b), a.max(b)))
    }

    /// Returns `true` if `a` and `b` are linked.
    #[must_use]
    pub fn has_link(&self, a: &L, b: &L) -> bool {
        self.link(a, b).is_some()
    }

    /// Returns `true` if `label` is a node.
    #[must_use]
    pub fn contains(&self, label: &L) -> bool {
        self.ids.contains_key(label)
    }

    /// Number of incident edges of `label`; `0` if absent.
    #[must_use]
    pub fn degree(&self, label: &L) -> usize {
        self.id(label).map_or(0, |id| self.adjacency[id].len())
    }

    /// All node labels in insertion order.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = &L> {
        self.labels.iter()
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    /// Number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

impl<L, E> FromIterator<(L, L)> for Graph<L, E>
where
    L: Clone + Eq + Hash,
    E: Default,
{
    fn from_iter<T: IntoIterator<Item = (L, L)>>(iter: T) -> Self {
        let mut graph = Self::new();
        for (a, b) in iter {
            graph.add_link(a, b);
        }
        graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_link_is_undirected_and_unique() {
        let mut graph = Graph::<String, u32>::new();
        assert!(graph.add_link_with("a".into(), "b".into(), 7));
        assert!(!graph.add_link_with("b".into(), "a".into(), 9));
        assert_eq!(graph.link(&"a".into(), &"b".into()), Some(&7));
        assert_eq!(graph.link(&"b".into(), &"a".into()), Some(&7));
        assert_eq!(graph.link(&"a".into(), &"z".into()), None);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_self_loop_is_ignored() {
        let mut graph = Graph::<char>::new();
        assert!(!graph.add_link('a', 'a'));
        assert!(graph.contains(&'a'));
        assert_eq!(graph.degree(&'a'), 0);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_neighbors_and_degree() {
        let graph: Graph<char> = [('a', 'b'), ('a', 'c'), ('d', 'a')].into_iter().collect();
        let mut neighbors: Vec<_> = graph.neighbors(&'a').copied().collect();
        neighbors.sort_unstable();
        assert_eq!(neighbors, vec!['b', 'c', 'd']);
        assert_eq!(graph.degree(&'a'), 3);
        assert_eq!(graph.degree(&'b'), 1);
        assert_eq!(graph.neighbors(&'x').count(), 0);
        assert_eq!(graph.nodes().copied().collect::<String>(), "abcd");
    }

    #[test]
    fn test_add_node_returns_stable_ids() {
        let mut graph = Graph::<&str>::new();
        assert_eq!(graph.add_node("x"), 0);
        assert_eq!(graph.add_node("y"), 1);
        assert_eq!(graph.add_node("x"), 0);
        assert_eq!(graph.id(&"y"), Some(1));
        assert_eq!(graph.label(1), &"y");
        assert_eq!(graph.node_count(), 2);
    }
}
