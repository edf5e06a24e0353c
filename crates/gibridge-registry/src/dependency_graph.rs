//! Dependency graph of loaded namespaces.
//!
//! Uses `petgraph::DiGraph` with:
//! - Nodes: namespace names
//! - Edges: `A -> B` when namespace `A` depends on namespace `B`

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::Dfs;
use rustc_hash::FxHashMap;

#[derive(Debug, Default)]
pub struct DependencyGraph {
    graph: DiGraph<String, ()>,
    nodes: FxHashMap<String, NodeIndex>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    fn node(&mut self, namespace: &str) -> NodeIndex {
        if let Some(node) = self.nodes.get(namespace) {
            return *node;
        }
        let node = self.graph.add_node(namespace.to_owned());
        self.nodes.insert(namespace.to_owned(), node);
        node
    }

    pub fn add_namespace(&mut self, namespace: &str) {
        self.node(namespace);
    }

    /// Record that `from` depends on `to`.
    pub fn add_dependency(&mut self, from: &str, to: &str) {
        let from = self.node(from);
        let to = self.node(to);
        self.graph.update_edge(from, to, ());
    }

    /// Every namespace reachable from `namespace`, excluding itself, sorted.
    pub fn transitive(&self, namespace: &str) -> Option<Vec<String>> {
        let start = *self.nodes.get(namespace)?;
        let mut reached = Vec::new();
        let mut dfs = Dfs::new(&self.graph, start);
        while let Some(node) = dfs.next(&self.graph) {
            if node != start {
                reached.push(self.graph[node].clone());
            }
        }
        reached.sort();
        Some(reached)
    }
}
