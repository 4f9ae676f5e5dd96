//! Whitelist proof verification.
//!
//! Trees are built off-chain from `keccak256(address)` leaves with sorted
//! pairs: every parent is `keccak256(min(a, b) ++ max(a, b))`, comparing the
//! two 32-byte children lexicographically. A proof is the list of siblings
//! from the leaf up to the root, without any left/right markers.

pub type Hash = [u8; 32];

/// Parent of two nodes. Symmetric: `hash_pair(a, b) == hash_pair(b, a)`.
pub fn hash_pair<H>(a: &Hash, b: &Hash, hasher: &H) -> Hash
where
    H: Fn(&[u8]) -> Hash,
{
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    let mut buf = [0u8; 64];
    buf[..32].copy_from_slice(lo);
    buf[32..].copy_from_slice(hi);
    hasher(&buf)
}

/// Folds the proof siblings into `leaf`, producing the candidate root.
pub fn compute_root<I, H>(leaf: Hash, proof: I, hasher: &H) -> Hash
where
    I: IntoIterator<Item = Hash>,
    H: Fn(&[u8]) -> Hash,
{
    proof
        .into_iter()
        .fold(leaf, |node, sibling| hash_pair(&node, &sibling, hasher))
}

pub fn verify<I, H>(root: &Hash, leaf: Hash, proof: I, hasher: &H) -> bool
where
    I: IntoIterator<Item = Hash>,
    H: Fn(&[u8]) -> Hash,
{
    compute_root(leaf, proof, hasher) == *root
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use sha3::{Digest, Keccak256};
    use std::vec;

    fn keccak(data: &[u8]) -> Hash {
        Keccak256::digest(data).into()
    }

    fn hex32(s: &str) -> Hash {
        let mut out = [0u8; 32];
        for (i, byte) in out.iter_mut().enumerate() {
            *byte = u8::from_str_radix(&s[2 * i..2 * i + 2], 16).unwrap();
        }
        out
    }

    // Leaves of the addresses [0x01; 32], [0x02; 32], [0x03; 32]
    const LEAF_A: &str = "cebc8882fecbec7fb80d2cf4b312bec018884c2d66667c67a90508214bd8bafc";
    const LEAF_B: &str = "ee4a079f5b14a24465181d45af32a8053c2d446446d7019359e210b82e53b8ba";
    const LEAF_C: &str = "4a7a4de37def8e10861261f58e1003e6086df449b615bb411c39669548e19dba";
    const NODE_AB: &str = "596bf00ace9ca0f06c5f2e307f74f2c1da269fae2461421d15d37b6d0fd565e1";
    // An odd node is promoted unchanged, so root = pair(pair(a, b), c)
    const ROOT_ABC: &str = "239aa26bdcc73d2d6467f450859b9a5852d73700add5e4696e2a45ac64059b3f";

    #[test]
    fn leaf_vectors() {
        assert_eq!(keccak(&[1u8; 32]), hex32(LEAF_A));
        assert_eq!(keccak(&[2u8; 32]), hex32(LEAF_B));
        assert_eq!(keccak(&[3u8; 32]), hex32(LEAF_C));
    }

    #[test]
    fn pair_is_order_independent() {
        let a = hex32(LEAF_A);
        let b = hex32(LEAF_B);
        assert_eq!(hash_pair(&a, &b, &keccak), hex32(NODE_AB));
        assert_eq!(hash_pair(&b, &a, &keccak), hex32(NODE_AB));
    }

    #[test]
    fn every_member_resolves_to_pinned_root() {
        let (a, b, c) = (hex32(LEAF_A), hex32(LEAF_B), hex32(LEAF_C));
        let root = hex32(ROOT_ABC);

        assert!(verify(&root, a, vec![b, c], &keccak));
        assert!(verify(&root, b, vec![a, c], &keccak));
        assert!(verify(&root, c, vec![hex32(NODE_AB)], &keccak));
    }

    #[test]
    fn foreign_leaf_or_tampered_proof_is_rejected() {
        let (a, b, c) = (hex32(LEAF_A), hex32(LEAF_B), hex32(LEAF_C));
        let root = hex32(ROOT_ABC);
        let outsider = keccak(&[4u8; 32]);

        assert!(!verify(&root, outsider, vec![b, c], &keccak));
        assert!(!verify(&root, a, vec![c, b], &keccak));
        assert!(!verify(&root, a, vec![b], &keccak));
    }

    #[test]
    fn single_leaf_tree_uses_empty_proof() {
        let a = hex32(LEAF_A);
        assert!(verify(&a, a, vec![], &keccak));
        assert!(!verify(&hex32(LEAF_B), a, vec![], &keccak));
    }
}
