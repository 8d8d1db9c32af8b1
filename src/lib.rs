// Copyright 2024 Saptak Santra
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! IntSet - compact sets of small non-negative integers
//!
//! A [`BitSet`] stores membership as bits in a growable vector of `u64` words,
//! which beats a hash set on both space and speed when the values are dense
//! and small.
//!
//! ```
//! use intset::BitSet;
//!
//! let mut x = BitSet::from_slice(&[1, 144, 9]);
//! let y = BitSet::from_slice(&[9, 42]);
//! x.union_with(&y);
//! assert_eq!(x.to_string(), "{1 9 42 144}");
//! assert!(x.contains(9) && !x.contains(123));
//! ```

pub mod bitset;
pub mod error;
pub mod prelude;


pub use bitset::*;
pub use error::*;
