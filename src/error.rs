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

//! Error types

use std::fmt;

/// Broad classification of an [`IntSetError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller passed a value outside the set's domain
    InvalidArgument,
}

/// IntSet error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntSetError {
    /// Negative values cannot be members
    NegativeValue(i64),

    /// Value does not fit in `usize` on this target
    ValueOutOfRange(i64),
}

impl IntSetError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            IntSetError::NegativeValue(_) | IntSetError::ValueOutOfRange(_) => {
                ErrorKind::InvalidArgument
            }
        }
    }
}

impl fmt::Display for IntSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntSetError::NegativeValue(value) => write!(
                f,
                "Invalid argument: negative value {value} cannot be stored in a bit set"
            ),
            IntSetError::ValueOutOfRange(value) => {
                write!(f, "Invalid argument: value {value} exceeds the addressable range")
            }
        }
    }
}

impl std::error::Error for IntSetError {}

/// Result type alias
pub type Result<T> = std::result::Result<T, IntSetError>;
