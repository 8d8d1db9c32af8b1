//! Example: accepting signed input from untrusted sources

use intset::{BitSet, IntSetError};

fn main() -> Result<(), IntSetError> {
    let parsed: Vec<i64> = "4 8 15 16 23 42"
        .split_whitespace()
        .filter_map(|token| token.parse().ok())
        .collect();

    let set = BitSet::try_from_signed(&parsed)?;
    println!("parsed {set}");

    match BitSet::try_from_signed(&[3, -1, 4]) {
        Ok(set) => println!("unexpected {set}"),
        Err(err) => println!("rejected: {err} ({:?})", err.kind()),
    }

    Ok(())
}
