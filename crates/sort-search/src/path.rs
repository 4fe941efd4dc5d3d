//! Shared-ancestry path storage.
//!
//! Every frontier push creates one node that points at its parent. A path is
//! only materialised when the goal is popped, by walking parent links back to
//! the root.

use crate::state::{Element, State};

/// Index of a node in a [`PathArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug)]
struct PathNode<T> {
    state: State<T>,
    parent: Option<NodeId>,
    depth: usize,
}

/// Append-only arena of search nodes for one invocation.
#[derive(Debug)]
pub struct PathArena<T> {
    nodes: Vec<PathNode<T>>,
}

impl<T: Element> PathArena<T> {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Add a node with no parent.
    pub fn root(&mut self, state: State<T>) -> NodeId {
        self.insert(state, None, 0)
    }

    /// Add a node one transition below `parent`.
    pub fn extend(&mut self, parent: NodeId, state: State<T>) -> NodeId {
        let depth = self.nodes[parent.0].depth + 1;
        self.insert(state, Some(parent), depth)
    }

    fn insert(&mut self, state: State<T>, parent: Option<NodeId>, depth: usize) -> NodeId {
        self.nodes.push(PathNode {
            state,
            parent,
            depth,
        });
        NodeId(self.nodes.len() - 1)
    }

    pub fn state(&self, id: NodeId) -> &State<T> {
        &self.nodes[id.0].state
    }

    /// Number of transitions from the root to `id`.
    pub fn depth(&self, id: NodeId) -> usize {
        self.nodes[id.0].depth
    }

    /// States from the root to `id`, root first.
    pub fn path(&self, id: NodeId) -> Vec<State<T>> {
        let mut path = Vec::with_capacity(self.depth(id) + 1);
        let mut cursor = Some(id);
        while let Some(node_id) = cursor {
            let node = &self.nodes[node_id.0];
            path.push(node.state.clone());
            cursor = node.parent;
        }
        path.reverse();
        path
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<T: Element> Default for PathArena<T> {
    fn default() -> Self {
        Self::new()
    }
}
