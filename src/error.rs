#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MerkleTreeError {
    #[error("a merkle tree needs at least 2 elements, got {0}")]
    InvalidInput(usize),

    #[error("target value is not a leaf of this tree")]
    LeafNotFound,

    #[error("proof index {0} is not valid")]
    InvalidProofIndex(u64),
}
