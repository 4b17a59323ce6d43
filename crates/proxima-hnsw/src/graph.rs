//! Graph storage for the hierarchical index.
//!
//! Nodes live in an arena (`Graph`) and refer to each other through dense
//! `NodeId` handles instead of references, so neighbor links stay valid for
//! the lifetime of the index and the structure stays trivially serializable.

/// Dense arena handle for a node (index into `Graph::nodes`).
pub type NodeId = u32;

/// A node in the hierarchical graph.
///
/// `id`, `vector`, and `level` are write-once; the only mutation a node ever
/// sees is appending neighbor handles.
#[derive(Debug, Clone)]
pub struct Node {
    /// Caller-supplied identity (conventionally unique, not enforced).
    pub id: u64,
    /// The vector payload, immutable after creation.
    pub vector: Vec<f32>,
    /// Hierarchical level, assigned once at creation.
    pub level: usize,
    /// Per-level adjacency: `neighbors[l]` is populated for `l in 0..=level`.
    neighbors: Vec<Vec<NodeId>>,
}

impl Node {
    pub fn new(id: u64, vector: Vec<f32>, level: usize) -> Self {
        Self {
            id,
            vector,
            level,
            neighbors: vec![Vec::new(); level + 1],
        }
    }

    /// Neighbors of this node at the given level.
    ///
    /// Empty for levels above the node's own level.
    pub fn neighbors_at(&self, level: usize) -> &[NodeId] {
        self.neighbors.get(level).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Out-degree at the given level.
    pub fn degree_at(&self, level: usize) -> usize {
        self.neighbors_at(level).len()
    }

    /// Append a neighbor handle at the given level.
    ///
    /// Panics if `level > self.level`; the index only wires edges at levels
    /// both endpoints participate in.
    pub fn push_neighbor(&mut self, level: usize, neighbor: NodeId) {
        self.neighbors[level].push(neighbor);
    }
}

/// Arena of nodes plus the global entry point.
///
/// The entry point is always the highest-level node inserted so far (or
/// `None` for an empty graph); only insertion moves it.
#[derive(Debug, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    entry: Option<NodeId>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node to the arena, returning its handle.
    pub fn push(&mut self, node: Node) -> NodeId {
        let id = self.nodes.len() as NodeId;
        self.nodes.push(node);
        id
    }

    /// Look up a node by handle.
    ///
    /// Handles are only produced by `push`, so in-crate callers index
    /// directly; this panics on a foreign handle.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id as usize]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id as usize]
    }

    /// Current entry point, if any node has been inserted.
    pub fn entry(&self) -> Option<NodeId> {
        self.entry
    }

    pub fn set_entry(&mut self, id: NodeId) {
        self.entry = Some(id);
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over all nodes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_levels() {
        let node = Node::new(7, vec![1.0, 2.0], 2);
        assert_eq!(node.level, 2);
        assert!(node.neighbors_at(0).is_empty());
        assert!(node.neighbors_at(2).is_empty());
        // Levels above the node's own level read as empty
        assert!(node.neighbors_at(5).is_empty());
    }

    #[test]
    fn test_push_neighbor() {
        let mut node = Node::new(1, vec![0.0], 1);
        node.push_neighbor(0, 3);
        node.push_neighbor(1, 4);
        node.push_neighbor(0, 5);

        assert_eq!(node.neighbors_at(0), &[3, 5]);
        assert_eq!(node.neighbors_at(1), &[4]);
        assert_eq!(node.degree_at(0), 2);
    }

    #[test]
    fn test_arena_and_entry() {
        let mut graph = Graph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.entry(), None);

        let a = graph.push(Node::new(1, vec![0.0], 0));
        let b = graph.push(Node::new(2, vec![1.0], 1));
        assert_eq!(graph.len(), 2);
        assert_eq!(graph.node(b).id, 2);

        graph.set_entry(a);
        assert_eq!(graph.entry(), Some(a));

        graph.set_entry(b);
        assert_eq!(graph.entry(), Some(b));
    }
}
