#![allow(non_snake_case)]

use pow2_merkle::{
    verify,
    Identity,
    MerkleTree,
    Sha256,
};
use proptest::{
    collection::vec,
    prelude::any,
    prop_assert,
    prop_assume,
    prop_compose,
    proptest,
};

prop_compose! {
    fn random_tree(min: usize, max: usize)(elements in vec(vec(any::<u8>(), 1..32), min..max)) -> MerkleTree<Vec<u8>, Sha256> {
        MerkleTree::new(elements).expect("Unable to create Merkle tree")
    }
}

prop_compose! {
    fn random_identity_tree(min: usize, max: usize)(count in min..max) -> MerkleTree<String, Identity> {
        let elements = (0..count).map(|i| format!("v{i}")).collect::<Vec<_>>();
        MerkleTree::new(elements).expect("Unable to create Merkle tree")
    }
}

// Replaces the character at `position` with a different ASCII character
fn flip(entry: &str, position: usize) -> String {
    entry
        .char_indices()
        .map(|(i, c)| {
            if i != position {
                c
            } else if c == '0' {
                '1'
            } else {
                '0'
            }
        })
        .collect()
}

proptest! {
    #[test]
    fn verify__returns_true_for_the_proof_of_every_leaf(tree in random_tree(2, 64)) {
        for (index, element) in tree.elements().iter().enumerate() {
            let proof = tree.prove_index(index as u64).unwrap();
            prop_assert!(tree.verify(element, &proof));
        }
    }

    #[test]
    fn verify__returns_true_for_a_proof_checked_without_the_tree(tree in random_tree(2, 64), arb_num: usize) {
        let index = arb_num % tree.elements().len();
        let element = &tree.elements()[index];
        let proof = tree.proof(element).unwrap();

        prop_assert!(verify(&Sha256, tree.root_hash(), element, &proof));
    }

    #[test]
    fn verify__returns_false_when_a_proof_entry_is_tampered(
        tree in random_tree(2, 64),
        arb_index: usize,
        arb_entry: usize,
        arb_position: usize,
    ) {
        let index = arb_index % tree.elements().len();
        let element = &tree.elements()[index];
        let mut proof = tree.prove_index(index as u64).unwrap();

        let entry = arb_entry % proof.len();
        let position = arb_position % proof[entry].len();
        proof[entry] = flip(&proof[entry], position);

        prop_assert!(!tree.verify(element, &proof));
    }

    #[test]
    fn verify__returns_false_when_a_character_of_an_identity_proof_is_flipped(
        tree in random_identity_tree(2, 40),
        arb_index: usize,
        arb_entry: usize,
        arb_position: usize,
    ) {
        let index = arb_index % tree.elements().len();
        let element = tree.elements()[index].clone();
        let mut proof = tree.prove_index(index as u64).unwrap();

        let entry = arb_entry % proof.len();
        let position = arb_position % proof[entry].len();
        proof[entry] = flip(&proof[entry], position);

        prop_assert!(!tree.verify(&element, &proof));
    }

    #[test]
    fn verify__returns_false_for_the_proof_of_a_different_leaf(
        tree in random_tree(2, 64),
        arb_a: usize,
        arb_b: usize,
    ) {
        let a = arb_a % tree.elements().len();
        let b = arb_b % tree.elements().len();
        prop_assume!(tree.elements()[a] != tree.elements()[b]);

        let proof = tree.prove_index(a as u64).unwrap();
        prop_assert!(!tree.verify(&tree.elements()[b], &proof));
    }
}
