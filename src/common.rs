/// Sibling hashes needed to fold a leaf up to the root, ordered leaf to root.
pub type ProofSet = Vec<String>;

// Literal separator placed between the two child hashes of an inner node
pub const SEPARATOR: char = '+';

/// Position of a child under its parent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Left,
    Right,
}

/// Joins two hashes into the pre-digest form of their parent.
///
/// The pair is placed in lexicographic order before joining, so the result does not depend
/// on which side either hash came from, and a [`ProofSet`] folds as `current + "+" + entry`
/// without direction bits.
pub fn join_pair(a: &str, b: &str) -> String {
    let (lhs, rhs) = if a <= b { (a, b) } else { (b, a) };

    let mut joined = String::with_capacity(lhs.len() + rhs.len() + 1);
    joined.push_str(lhs);
    joined.push(SEPARATOR);
    joined.push_str(rhs);
    joined
}
