use crate::error::{Error, Result};
use crate::frequency::WeightedSymbol;
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::collections::{HashSet, VecDeque};

/// A node of the Huffman tree.
///
/// Leaves carry a symbol and no children. Internal nodes carry no symbol, own
/// both children and weigh as much as the two of them together.
#[derive(Debug, Clone)]
pub struct Node {
    data: WeightedSymbol,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

impl Node {
    fn leaf(data: WeightedSymbol) -> Self {
        Self {
            data,
            left: None,
            right: None,
        }
    }

    fn from_children(left: Node, right: Node) -> Self {
        Self {
            data: WeightedSymbol::combined(left.probability() + right.probability()),
            left: Some(Box::new(left)),
            right: Some(Box::new(right)),
        }
    }

    pub fn probability(&self) -> f64 {
        self.data.probability()
    }

    pub fn symbol(&self) -> Option<u8> {
        self.data.symbol()
    }

    pub fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// The child reached by following one bit: `false` goes left, `true` right.
    pub fn child(&self, bit: bool) -> Option<&Node> {
        if bit {
            self.right()
        } else {
            self.left()
        }
    }

    /// Symbols of the tree in in-order (left to right) leaf order.
    pub fn symbols(&self) -> Vec<u8> {
        let mut out = Vec::new();
        let mut stack: Vec<&Node> = Vec::new();
        let mut curr = Some(self);

        while curr.is_some() || !stack.is_empty() {
            while let Some(node) = curr {
                stack.push(node);
                curr = node.left();
            }

            if let Some(node) = stack.pop() {
                if let Some(sym) = node.symbol() {
                    out.push(sym);
                }
                curr = node.right();
            }
        }

        out
    }

    /// All leaves, left to right.
    pub fn leaves(&self) -> Vec<&Node> {
        let mut out = Vec::new();
        let mut stack = vec![self];

        while let Some(node) = stack.pop() {
            if node.is_leaf() {
                out.push(node);
                continue;
            }
            stack.extend(node.right());
            stack.extend(node.left());
        }

        out
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        // WeightedSymbol equality only looks at the weight
        self.symbol() == other.symbol()
            && self.data == other.data
            && self.left == other.left
            && self.right == other.right
    }
}

/// Builds a Huffman tree from entries sorted ascending by weight.
///
/// Leaves wait in a `source` queue and merged nodes in a `target` queue. Both
/// stay sorted: `source` because its input is, `target` because each merge is
/// at least as heavy as the previous one. Each step takes the two lightest
/// fronts, preferring `source` on ties.
pub fn build_tree(sorted: Vec<WeightedSymbol>) -> Result<Node> {
    match sorted.len() {
        0 => return Err(Error::EmptyAlphabet),
        1 => return Err(Error::InsufficientSymbols { found: 1 }),
        _ => {}
    }
    debug_assert!(sorted.windows(2).all(|w| w[0] <= w[1]));

    let found = sorted.len();
    let mut source: VecDeque<Node> = sorted.into_iter().map(Node::leaf).collect();
    let mut target: VecDeque<Node> = VecDeque::with_capacity(found - 1);

    while !source.is_empty() || target.len() != 1 {
        let left = dequeue_lightest(&mut source, &mut target);
        let right = dequeue_lightest(&mut source, &mut target);

        let (left, right) = match (left, right) {
            (Some(left), Some(right)) => (left, right),
            _ => return Err(Error::InsufficientSymbols { found }),
        };

        let merged = Node::from_children(left, right);
        trace!("merged node of weight {}", merged.probability());
        target.push_back(merged);
    }

    let root = target.pop_front().ok_or(Error::InsufficientSymbols { found })?;
    debug!("built tree over {} leaves, root weight {}", found, root.probability());
    Ok(root)
}

fn dequeue_lightest(source: &mut VecDeque<Node>, target: &mut VecDeque<Node>) -> Option<Node> {
    match (source.front(), target.front()) {
        (Some(s), Some(t)) if s.data <= t.data => source.pop_front(),
        (_, Some(_)) => target.pop_front(),
        (Some(_), None) => source.pop_front(),
        (None, None) => None,
    }
}

/// A `serde`-friendly mirror of [`Node`].
///
/// Encoded streams carry no tree, so whoever decodes later needs the tree
/// persisted separately.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerializableTree {
    probability: f64,
    symbol: Option<u8>,
    left: Option<Box<SerializableTree>>,
    right: Option<Box<SerializableTree>>,
}

impl<'a> From<&'a Node> for SerializableTree {
    fn from(other: &'a Node) -> Self {
        Self {
            probability: other.probability(),
            symbol: other.symbol(),
            left: other.left().map(|n| Box::new(n.into())),
            right: other.right().map(|n| Box::new(n.into())),
        }
    }
}

const WEIGHT_TOLERANCE: f64 = 1e-9;

fn restore(other: SerializableTree) -> Result<Node> {
    let SerializableTree {
        probability,
        symbol,
        left,
        right,
    } = other;

    match (symbol, left, right) {
        (Some(s), None, None) => Ok(Node::leaf(WeightedSymbol::new(s, probability))),
        (None, Some(left), Some(right)) => {
            let (left, right) = (restore(*left)?, restore(*right)?);
            if (probability - left.probability() - right.probability()).abs() > WEIGHT_TOLERANCE {
                return Err(Error::MalformedTree {
                    reason: "internal weight differs from the sum of its children",
                });
            }

            Ok(Node {
                data: WeightedSymbol::combined(probability),
                left: Some(Box::new(left)),
                right: Some(Box::new(right)),
            })
        }
        (None, None, None) => Err(Error::MalformedTree {
            reason: "leaf without a symbol",
        }),
        (Some(_), _, _) => Err(Error::MalformedTree {
            reason: "internal node carrying a symbol",
        }),
        (None, _, _) => Err(Error::MalformedTree {
            reason: "internal node with a single child",
        }),
    }
}

impl TryFrom<SerializableTree> for Node {
    type Error = Error;

    fn try_from(other: SerializableTree) -> Result<Self> {
        let root = restore(other)?;

        if root.is_leaf() {
            return Err(Error::MalformedTree {
                reason: "root is a leaf",
            });
        }

        let mut seen = HashSet::new();
        if !root.symbols().into_iter().all(|s| seen.insert(s)) {
            return Err(Error::MalformedTree {
                reason: "repeated leaf symbol",
            });
        }

        Ok(root)
    }
}
