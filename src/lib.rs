//! Merkle tree over an ordered sequence, split at the largest power of two below the number
//! of leaves at every level.
//!
//! ```
//! use pow2_merkle::{MerkleTree, Sha256};
//!
//! let tree = MerkleTree::<_, Sha256>::new(vec!["1", "2", "3", "4", "5"]).unwrap();
//! let proof = tree.proof(&"3").unwrap();
//!
//! assert!(tree.verify(&"3", &proof));
//! assert!(pow2_merkle::verify(&Sha256, tree.root_hash(), "3", &proof));
//! ```

pub mod common;
pub mod error;
pub mod hasher;
pub mod merkle_tree;
pub mod node;
pub mod verify;

pub use common::{
    ProofSet,
    Side,
};
pub use error::MerkleTreeError;
#[cfg(any(test, feature = "test-helpers"))]
pub use hasher::Identity;
pub use hasher::{
    Hasher,
    Keccak256,
    Sha256,
};
pub use merkle_tree::MerkleTree;
pub use node::Node;
pub use verify::verify;
