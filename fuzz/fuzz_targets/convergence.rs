#![no_main]

use libfuzzer_sys::fuzz_target;
use weft::{Op, TextOperation};

/// Keeps fuzzed magnitudes small enough that a document of the
/// operation's base length can actually be materialised.
fn clamp(op: Op) -> Op {
    match op {
        Op::Retain(n) => Op::Retain(n % 32),
        Op::Delete(n) => Op::Delete(n % 32),
        Op::Insert(s) => Op::Insert(s.chars().take(16).collect()),
    }
}

fuzz_target!(|data: (Vec<Op>, Vec<Op>, String)| {
    let (left, right, seed) = data;

    let left: TextOperation = left.into_iter().map(clamp).collect();
    let right: TextOperation = right.into_iter().map(clamp).collect();

    // Pad both operations to a common base so they are concurrent edits
    // of the same document.
    let base = left.base_len().max(right.base_len());
    let pad = base - left.base_len();
    let left = left.retain(pad);
    let pad = base - right.base_len();
    let right = right.retain(pad);

    let doc: String = seed.chars().chain(std::iter::repeat('x')).take(base).collect();

    let (left_prime, right_prime) = left.transform(&right).unwrap();

    let one = right_prime.apply(&left.apply(&doc).unwrap()).unwrap();
    let other = left_prime.apply(&right.apply(&doc).unwrap()).unwrap();
    assert_eq!(one, other);

    assert_eq!(
        left.compose(&right_prime).unwrap(),
        right.compose(&left_prime).unwrap(),
    );

    let inverse = left.invert(&doc).unwrap();
    assert_eq!(inverse.apply(&left.apply(&doc).unwrap()).unwrap(), doc);

    assert_eq!(
        TextOperation::from_sequence(&left.to_sequence()).unwrap(),
        left,
    );
});
