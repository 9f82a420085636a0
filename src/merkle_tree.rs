use crate::{
    common::ProofSet,
    error::MerkleTreeError,
    hasher::{
        Hasher,
        Sha256,
    },
    node::Node,
    verify,
};

/// Merkle tree over a fixed, ordered sequence of at least two elements.
///
/// The tree is built once and never changes, so shared references can prove and verify from
/// any number of threads.
///
/// Child hashes are joined in sorted order, so the root commits to the multiset of leaves at
/// each split but not to their order within it: `[1, 2, 3, 4, 5]` and `[4, 3, 2, 1, 5]` share
/// a root.
#[derive(Clone, Debug)]
pub struct MerkleTree<T, H = Sha256> {
    elements: Vec<T>,
    root: Node,
    hasher: H,
}

impl<T, H> MerkleTree<T, H>
where
    T: AsRef<[u8]> + PartialEq,
    H: Hasher + Default,
{
    pub fn new(elements: Vec<T>) -> Result<Self, MerkleTreeError> {
        Self::with_hasher(elements, H::default())
    }
}

impl<T, H> MerkleTree<T, H>
where
    T: AsRef<[u8]> + PartialEq,
    H: Hasher,
{
    pub fn with_hasher(elements: Vec<T>, hasher: H) -> Result<Self, MerkleTreeError> {
        if elements.len() < 2 {
            return Err(MerkleTreeError::InvalidInput(elements.len()))
        }

        let root = Node::build(&hasher, &elements)?;
        tracing::debug!(leaves = elements.len(), root = root.hash(), "built merkle tree");

        Ok(Self {
            elements,
            root,
            hasher,
        })
    }

    pub fn elements(&self) -> &[T] {
        &self.elements
    }

    pub fn leaves_count(&self) -> u64 {
        self.elements.len() as u64
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn root_hash(&self) -> &str {
        self.root.hash()
    }

    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    /// Proof for the first leaf equal to `target`.
    pub fn proof(&self, target: &T) -> Result<ProofSet, MerkleTreeError> {
        let index = self
            .elements
            .iter()
            .position(|element| element == target)
            .ok_or(MerkleTreeError::LeafNotFound)?;

        self.prove_index(index as u64)
    }

    /// Proof for the leaf at `index`, for trees that hold the same value more than once.
    pub fn prove_index(&self, index: u64) -> Result<ProofSet, MerkleTreeError> {
        if index >= self.leaves_count() {
            return Err(MerkleTreeError::InvalidProofIndex(index))
        }

        let proof_set = self.root.proof_set(index as usize, self.elements.len());
        tracing::trace!(index, proof_len = proof_set.len(), "generated proof set");

        Ok(proof_set)
    }

    /// True iff `target` is an element and `proof_set` folds it to the root from the depth of
    /// one of its leaves.
    pub fn verify(&self, target: &T, proof_set: &[String]) -> bool {
        let leaves_count = self.elements.len();
        let at_leaf_depth = self
            .elements
            .iter()
            .enumerate()
            .filter(|(_, element)| *element == target)
            .any(|(index, _)| self.root.leaf_depth(index, leaves_count) == proof_set.len());

        if !at_leaf_depth {
            tracing::trace!(proof_len = proof_set.len(), "target is not a leaf at this depth");
            return false
        }

        verify::verify(&self.hasher, self.root_hash(), target, proof_set)
    }
}
