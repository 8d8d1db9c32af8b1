//! Example: Display vs Debug rendering

use intset::BitSet;

fn main() {
    let x = BitSet::from_slice(&[1, 144, 9, 42]);

    println!("{x}"); // "{1 9 42 144}"
    let rendered = x.to_string();
    println!("{rendered}"); // "{1 9 42 144}"
    println!("{x:?}"); // "{[4398046511618 0 65536] 4}"

    // Repeated adds are trusted, so the cached length overcounts
    let mut dup = BitSet::new();
    dup.add(3);
    dup.add(3);
    println!("{dup} {dup:?}"); // "{3} {[8] 2}"
}
