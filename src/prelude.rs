//! Convenient re-exports of commonly used types.
//!
//! The prelude can be imported with:
//! ```
//! use intset::prelude::*;
//! ```

pub use crate::bitset::{BitSet, WORD_BITS};
pub use crate::error::{ErrorKind, IntSetError, Result};
