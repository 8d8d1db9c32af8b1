//! Example: building sets and merging them

use intset::BitSet;

fn main() {
    println!("=== Basic IntSet Example ===");

    let mut x = BitSet::new();
    let mut y = BitSet::new();

    x.add(1);
    x.add(144);
    x.add(9);
    println!("{x}"); // "{1 9 144}"

    y.add(9);
    y.add(42);
    println!("{y}"); // "{9 42}"

    x.union_with(&y);
    println!("{x}"); // "{1 9 42 144}"

    println!("{} {}", x.contains(9), x.contains(123)); // "true false"

    let fibonacci = BitSet::from_slice(&[0, 1, 2, 3, 5, 8]);
    let mut primes = BitSet::from_slice(&[2, 3, 5, 7]);
    primes |= &fibonacci;
    println!("{primes} has {} members", primes.len()); // 7

    println!("=== Example Complete ===");
}
