//! Single-or-sequence payload values
//!
//! The transit API returns a bare object instead of a one-element array
//! when exactly one result exists. [`OneOrMany`] captures both shapes at
//! the deserialization boundary so nothing downstream has to guess.

use serde::{Deserialize, Serialize};

/// A value the upstream service sends either alone or as a sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    /// Sequence of values, order preserved
    Many(Vec<T>),
    /// A bare single value
    One(T),
}

impl<T> OneOrMany<T> {
    /// Number of contained values
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Many(items) => items.len(),
            Self::One(_) => 1,
        }
    }

    /// Whether no value is contained
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrow the values as a slice
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        match self {
            Self::Many(items) => items,
            Self::One(item) => std::slice::from_ref(item),
        }
    }

    /// Flatten into a vector, wrapping a single value
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::Many(items) => items,
            Self::One(item) => vec![item],
        }
    }
}

impl<T> Default for OneOrMany<T> {
    fn default() -> Self {
        Self::Many(Vec::new())
    }
}

impl<T> From<OneOrMany<T>> for Vec<T> {
    fn from(value: OneOrMany<T>) -> Self {
        value.into_vec()
    }
}
