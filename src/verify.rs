use crate::{
    common::join_pair,
    hasher::Hasher,
};

/// Folds `proof_set` over the hash of `target` and compares the result with `root`.
///
/// Needs neither the tree nor its elements, only the root a verifier already trusts. It
/// binds the root and the fold only: leaves and inner nodes hash the same way, so the joined
/// hashes of a subtree fold to the root with a shorter proof. Callers that know the elements
/// should use [`MerkleTree::verify`](crate::MerkleTree::verify), which also checks membership
/// and leaf depth.
pub fn verify<H, T>(hasher: &H, root: &str, target: T, proof_set: &[String]) -> bool
where
    H: Hasher,
    T: AsRef<[u8]>,
{
    if proof_set.is_empty() {
        return false
    }

    let sum = proof_set.iter().fold(hasher.hash(target.as_ref()), |sum, sibling| {
        hasher.hash(join_pair(&sum, sibling).as_bytes())
    });

    tracing::trace!(proof_len = proof_set.len(), matches = sum == root, "folded proof set");

    sum == root
}
