//! Huffman tree construction.
//!
//! Nodes live in an arena (`Vec<Node>`) and refer to their children by index.
//! The tree is built greedily: every present symbol becomes a leaf in a
//! min-priority queue, and the two lightest nodes are merged until one
//! remains.
//!
//! # Tie-breaking
//!
//! The queue is keyed by `(weight, arena index)`. Leaves are pushed in
//! ascending symbol order and each merged node is pushed right after it is
//! created, so the arena index doubles as an insertion sequence number and
//! equal weights leave the queue first-in, first-out. Encoder and decoder run
//! this same procedure on the same frequency table and therefore build the
//! same tree bit for bit.
//!
//! # Orientation
//!
//! Of the two nodes extracted per merge, the first (lightest) becomes the
//! right child and the second becomes the left child.

use crate::error::{HuffmanError, Result};
use crate::frequency::{FrequencyTable, SYMBOLS};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Index of a node inside [`HuffmanTree`]'s arena.
pub type NodeId = usize;

/// A tree node. Weight is the sum of the leaf weights below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node {
    Leaf {
        symbol: u8,
        weight: u64,
    },
    Internal {
        left: NodeId,
        right: NodeId,
        weight: u64,
    },
}

impl Node {
    pub fn weight(&self) -> u64 {
        match *self {
            Node::Leaf { weight, .. } | Node::Internal { weight, .. } => weight,
        }
    }
}

/// Arena-backed Huffman tree. The root owns every other node transitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl HuffmanTree {
    /// Build the tree for a frequency table.
    ///
    /// A table with a single present symbol gets an extra zero-weight leaf for
    /// symbol 0, so the real symbol ends up one edge below the root.
    ///
    /// # Errors
    /// `HuffmanError::EmptyFrequencyTable` if no symbol has a nonzero count.
    pub fn build(frequencies: &FrequencyTable) -> Result<Self> {
        let mut nodes = Vec::with_capacity(2 * SYMBOLS);
        let mut queue = BinaryHeap::with_capacity(SYMBOLS);

        for (symbol, count) in frequencies.present() {
            push(
                &mut nodes,
                &mut queue,
                Node::Leaf {
                    symbol,
                    weight: count as u64,
                },
            );
        }

        match nodes.len() {
            0 => return Err(HuffmanError::EmptyFrequencyTable.into()),
            1 => push(
                &mut nodes,
                &mut queue,
                Node::Leaf {
                    symbol: 0,
                    weight: 0,
                },
            ),
            _ => {}
        }

        loop {
            let Some(Reverse((_, lighter))) = queue.pop() else {
                return Err(HuffmanError::EmptyFrequencyTable.into());
            };
            let Some(Reverse((_, heavier))) = queue.pop() else {
                return Ok(Self {
                    nodes,
                    root: lighter,
                });
            };

            let weight = nodes[lighter].weight() + nodes[heavier].weight();
            push(
                &mut nodes,
                &mut queue,
                Node::Internal {
                    left: heavier,
                    right: lighter,
                    weight,
                },
            );
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    /// All nodes in creation order: leaves first, then merges.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Follow one edge: `false` goes left, `true` goes right.
    ///
    /// Returns `None` when `id` is a leaf.
    pub fn child(&self, id: NodeId, bit: bool) -> Option<NodeId> {
        match self.nodes[id] {
            Node::Leaf { .. } => None,
            Node::Internal { left, right, .. } => Some(if bit { right } else { left }),
        }
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|node| matches!(node, Node::Leaf { .. }))
            .count()
    }
}

fn push(nodes: &mut Vec<Node>, queue: &mut BinaryHeap<Reverse<(u64, NodeId)>>, node: Node) {
    let id = nodes.len();
    queue.push(Reverse((node.weight(), id)));
    nodes.push(node);
}
