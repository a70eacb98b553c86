use std::collections::HashMap;

use crate::grids::Coord;

pub type NodeId = usize;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathNode {
    pub coord: Coord,
    pub parent: Option<NodeId>,
    pub g: usize,
    pub h: usize,
    pub f: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Membership {
    Open,
    Closed,
}

/// Every node of one search run. Predecessors are indices into `nodes`,
/// lookups go through the coordinate index.
#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<PathNode>,
    index: HashMap<Coord, (NodeId, Membership)>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, node: PathNode) -> NodeId {
        let id = self.nodes.len();
        self.index.insert(node.coord, (id, Membership::Open));
        self.nodes.push(node);
        id
    }

    pub fn get(&self, id: NodeId) -> &PathNode {
        &self.nodes[id]
    }

    pub fn get_mut(&mut self, id: NodeId) -> &mut PathNode {
        &mut self.nodes[id]
    }

    pub fn lookup(&self, coord: Coord) -> Option<(NodeId, Membership)> {
        self.index.get(&coord).copied()
    }

    pub fn close(&mut self, id: NodeId) {
        let coord = self.nodes[id].coord;
        self.index.insert(coord, (id, Membership::Closed));
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Coordinates from the root of the tree down to `id`.
    pub fn path_to(&self, id: NodeId) -> Vec<Coord> {
        let mut path = Vec::new();
        let mut cursor = Some(id);
        while let Some(id) = cursor {
            let node = &self.nodes[id];
            path.push(node.coord);
            cursor = node.parent;
        }
        path.reverse();
        path
    }
}
