use digest::Digest;

/// One-way digest applied to leaf values and to joined child hashes.
///
/// Every node hash in a tree, and every step of a proof fold, goes through the same
/// `Hasher`, so the one used to verify must match the one used to build. Any
/// `Fn(&[u8]) -> String` closure is a `Hasher`.
pub trait Hasher {
    fn hash(&self, data: &[u8]) -> String;
}

impl<F> Hasher for F
where
    F: Fn(&[u8]) -> String,
{
    fn hash(&self, data: &[u8]) -> String {
        self(data)
    }
}

fn hex_digest<D: Digest>(data: &[u8]) -> String {
    hex::encode(D::digest(data))
}

/// SHA-256, hex encoded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sha256;

impl Hasher for Sha256 {
    fn hash(&self, data: &[u8]) -> String {
        hex_digest::<sha2::Sha256>(data)
    }
}

/// Keccak-256, hex encoded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Keccak256;

impl Hasher for Keccak256 {
    fn hash(&self, data: &[u8]) -> String {
        hex_digest::<sha3::Keccak256>(data)
    }
}

/// Returns the input unchanged, lossily decoded as UTF-8.
///
/// Tree hashes then read as the joined leaf values (`"1+2"`), which makes the shape of a
/// tree visible in assertions. Not collision resistant.
#[cfg(any(test, feature = "test-helpers"))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Identity;

#[cfg(any(test, feature = "test-helpers"))]
impl Hasher for Identity {
    fn hash(&self, data: &[u8]) -> String {
        String::from_utf8_lossy(data).into_owned()
    }
}
