//! Defines the inner representation
//! of the random tree.
use crate::Sample;
use super::split_rule::*;

use std::fmt;


/// The reason why the growth stopped at a leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeafReason {
    /// The number of rows is at most `leaf_size`.
    LeafSize,
    /// All target values on the node are identical.
    PureTarget,
    /// All feature columns are constant on the node.
    ConstantFeatures,
    /// Every split candidate sent all rows to one side.
    DegenerateSplit,
}


impl fmt::Display for LeafReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::LeafSize => "leaf size",
            Self::PureTarget => "pure target",
            Self::ConstantFeatures => "constant features",
            Self::DegenerateSplit => "degenerate split",
        };
        write!(f, "{reason}")
    }
}


/// Enumeration of `BranchNode` and `LeafNode`.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A node that have two childrens.
    Branch(BranchNode),


    /// A node that have no child.
    Leaf(LeafNode),
}


/// Represents the branch nodes of the random tree.
/// Each `BranchNode` must have two childrens
#[derive(Debug, Clone, PartialEq)]
pub struct BranchNode {
    pub(super) rule: Splitter,
    pub(super) left: Box<Node>,
    pub(super) right: Box<Node>,
}


/// Represents the leaf nodes of the random tree.
#[derive(Debug, Clone, PartialEq)]
pub struct LeafNode {
    pub(super) prediction: f64,
    pub(super) n_sample: usize,
    pub(super) reason: LeafReason,
}


impl BranchNode {
    /// Returns the splitting rule.
    pub fn rule(&self) -> &Splitter {
        &self.rule
    }


    /// Returns the left child (`value <= threshold`).
    pub fn left(&self) -> &Node {
        &self.left
    }


    /// Returns the right child (`value > threshold`).
    pub fn right(&self) -> &Node {
        &self.right
    }
}


impl LeafNode {
    /// Returns the predicted value,
    /// i.e., the mean of the training targets routed to this leaf.
    pub fn prediction(&self) -> f64 {
        self.prediction
    }


    /// Returns the number of training rows routed to this leaf.
    pub fn n_sample(&self) -> usize {
        self.n_sample
    }


    /// Returns the reason why this node became a leaf.
    pub fn reason(&self) -> LeafReason {
        self.reason
    }
}


impl Node {
    #[inline]
    pub(super) fn leaf(
        prediction: f64,
        n_sample: usize,
        reason: LeafReason,
    ) -> Self
    {
        Self::Leaf(LeafNode { prediction, n_sample, reason, })
    }


    #[inline]
    pub(super) fn branch(
        rule: Splitter,
        left: Box<Node>,
        right: Box<Node>,
    ) -> Self
    {
        Self::Branch(BranchNode { rule, left, right, })
    }


    /// Returns the leaf that the row given as a slice reaches.
    #[inline]
    pub(super) fn leaf_of_row(&self, row: &[f64]) -> &LeafNode {
        let mut node = self;
        loop {
            match node {
                Node::Leaf(leaf) => return leaf,
                Node::Branch(branch) => {
                    node = match branch.rule.split_row(row) {
                        LeftRight::Left => &*branch.left,
                        LeftRight::Right => &*branch.right,
                    };
                },
            }
        }
    }


    /// Returns the leaf that the `row`'th row of `sample` reaches.
    #[inline]
    pub(super) fn leaf_of(&self, sample: &Sample, row: usize) -> &LeafNode {
        let mut node = self;
        loop {
            match node {
                Node::Leaf(leaf) => return leaf,
                Node::Branch(branch) => {
                    node = match branch.rule.split(sample, row) {
                        LeftRight::Left => &*branch.left,
                        LeftRight::Right => &*branch.right,
                    };
                },
            }
        }
    }


    /// Returns the number of edges on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf(_) => 0,
            Node::Branch(b) => 1 + b.left.depth().max(b.right.depth()),
        }
    }


    /// Returns the number of leaves of this sub-tree.
    pub fn n_leaves(&self) -> usize {
        match self {
            Node::Leaf(_) => 1,
            Node::Branch(b) => b.left.n_leaves() + b.right.n_leaves(),
        }
    }


    /// Returns the number of nodes of this sub-tree.
    pub fn n_nodes(&self) -> usize {
        match self {
            Node::Leaf(_) => 1,
            Node::Branch(b) => 1 + b.left.n_nodes() + b.right.n_nodes(),
        }
    }


    /// Returns the leaves from left to right.
    pub fn leaves(&self) -> Vec<&LeafNode> {
        match self {
            Node::Leaf(l) => vec![l],
            Node::Branch(b) => {
                let mut leaves = b.left.leaves();
                leaves.append(&mut b.right.leaves());
                leaves
            },
        }
    }


    /// Appends this sub-tree to `dot` in pre-order
    /// and returns the id of this node.
    /// Ids are taken from `next_id`.
    pub(super) fn write_dot(&self, dot: &mut String, next_id: &mut usize)
        -> usize
    {
        let id = *next_id;
        *next_id += 1;

        match self {
            Node::Leaf(l) => {
                dot.push_str(&format!(
                    "\tn{id} [label=\"{:.4}\\nn = {}\\n{}\", shape=box];\n",
                    l.prediction, l.n_sample, l.reason,
                ));
            },
            Node::Branch(b) => {
                dot.push_str(&format!(
                    "\tn{id} [label=\"x[{}] <= {:.4}\"];\n",
                    b.rule.feature, b.rule.threshold,
                ));
                let l_id = b.left.write_dot(dot, next_id);
                let r_id = b.right.write_dot(dot, next_id);
                dot.push_str(&format!("\tn{id} -- n{l_id} [label=\"<=\"];\n"));
                dot.push_str(&format!("\tn{id} -- n{r_id} [label=\">\"];\n"));
            },
        }
        id
    }
}
