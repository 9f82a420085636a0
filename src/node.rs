use crate::{
    common::{
        join_pair,
        ProofSet,
        Side,
    },
    error::MerkleTreeError,
    hasher::Hasher,
};

/// A vertex of the tree.
///
/// A leaf holds the hash of one element. An inner node always has a left child and holds the
/// hash of its joined children. Children are owned, and nothing links back to a parent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    hash: String,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
    attached: bool,
}

impl Node {
    pub fn create_leaf<H: Hasher>(hasher: &H, data: &[u8]) -> Self {
        Self {
            hash: hasher.hash(data),
            left: None,
            right: None,
            attached: false,
        }
    }

    pub fn create_node<H: Hasher>(hasher: &H, left: Node, right: Node) -> Self {
        let mut node = Self {
            hash: String::new(),
            left: None,
            right: None,
            attached: false,
        };
        node.add(left, Side::Left);
        node.add(right, Side::Right);
        node.rehash(hasher);
        node
    }

    /// Builds the subtree over `leaves`, splitting at the largest power of two below the
    /// number of leaves.
    pub fn build<H, T>(hasher: &H, leaves: &[T]) -> Result<Self, MerkleTreeError>
    where
        H: Hasher,
        T: AsRef<[u8]>,
    {
        match leaves {
            [] => Err(MerkleTreeError::InvalidInput(0)),
            [leaf] => Ok(Self::create_leaf(hasher, leaf.as_ref())),
            _ => {
                let (lhs, rhs) = Self::split_by_power_of_two(leaves)?;
                let left = Self::build(hasher, lhs)?;
                let right = Self::build(hasher, rhs)?;
                Ok(Self::create_node(hasher, left, right))
            }
        }
    }

    /// Index of the last element that goes to the left subtree.
    ///
    /// The left subtree takes the largest power of two strictly less than the number of
    /// leaves, so 2 leaves split at 0, 4 at 1, 5 at 3 and 9 at 7.
    pub fn split_index<T>(leaves: &[T]) -> Result<usize, MerkleTreeError> {
        if leaves.len() < 2 {
            return Err(MerkleTreeError::InvalidInput(leaves.len()))
        }

        Ok(left_leaves_count(leaves.len()) - 1)
    }

    pub fn split_by_power_of_two<T>(
        leaves: &[T],
    ) -> Result<(&[T], &[T]), MerkleTreeError> {
        let index = Self::split_index(leaves)?;
        Ok(leaves.split_at(index + 1))
    }

    pub fn hash(&self) -> &str {
        &self.hash
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

    /// True until the node is attached under a parent.
    pub fn is_root(&self) -> bool {
        !self.attached
    }

    /// The joined child hashes this node's hash is computed from. `None` for a leaf.
    pub fn inner_hash(&self) -> Option<String> {
        match (self.left(), self.right()) {
            (Some(left), Some(right)) => Some(join_pair(left.hash(), right.hash())),
            (Some(left), None) => Some(left.hash.clone()),
            _ => None,
        }
    }

    /// Hashes of the subtrees that do not contain the leaf at `index`, leaf to root.
    ///
    /// `leaves_count` must be the number of leaves under `self`.
    pub(crate) fn proof_set(&self, mut index: usize, mut leaves_count: usize) -> ProofSet {
        let mut proof_set = ProofSet::new();
        let mut current = self;

        while let (Some(left), Some(right)) = (current.left(), current.right()) {
            let left_count = left_leaves_count(leaves_count);
            if index < left_count {
                proof_set.push(right.hash.clone());
                current = left;
                leaves_count = left_count;
            } else {
                proof_set.push(left.hash.clone());
                current = right;
                index -= left_count;
                leaves_count -= left_count;
            }
        }

        proof_set.reverse();
        proof_set
    }

    /// Number of edges between `self` and the leaf at `index`.
    pub(crate) fn leaf_depth(&self, mut index: usize, mut leaves_count: usize) -> usize {
        let mut depth = 0;
        let mut current = self;

        while let (Some(left), Some(right)) = (current.left(), current.right()) {
            let left_count = left_leaves_count(leaves_count);
            if index < left_count {
                current = left;
                leaves_count = left_count;
            } else {
                current = right;
                index -= left_count;
                leaves_count -= left_count;
            }
            depth += 1;
        }

        depth
    }

    pub(crate) fn add(&mut self, mut child: Node, side: Side) {
        child.attached = true;
        let slot = match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        };
        *slot = Some(Box::new(child));
    }

    fn rehash<H: Hasher>(&mut self, hasher: &H) {
        if let Some(inner) = self.inner_hash() {
            self.hash = hasher.hash(inner.as_bytes());
        }
    }
}

// Largest power of two strictly less than `count`; `count` is at least 2
fn left_leaves_count(count: usize) -> usize {
    let mut power = 1;
    while power < count - power {
        power <<= 1;
    }
    power
}
