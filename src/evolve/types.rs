//! Core data types: the target, candidate individuals and the population.
//!
//! Individuals are byte strings. The only way to build one of the right
//! length outside this module is [`Individual::from_bytes`] or the
//! initializer in [`operators`](super::operators); the runner only ever
//! creates them at target length.

use std::fmt;

/// The fixed byte string every individual is scored against.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Target(Vec<u8>);

impl Target {
    /// Creates a target from raw bytes.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// The target's bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Number of characters; also the length of every individual.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the target has no characters.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Target {
    fn from(s: &str) -> Self {
        Self(s.as_bytes().to_vec())
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}

/// A candidate string.
///
/// Content is read-only from outside the crate; the mutator edits it in
/// place through [`bytes_mut`](Self::bytes_mut).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Individual {
    genes: Vec<u8>,
}

impl Individual {
    /// Creates an individual from raw bytes.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            genes: bytes.into(),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.genes
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    pub(crate) fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.genes
    }
}

impl fmt::Display for Individual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.genes))
    }
}

/// A fixed-size, never-empty collection of equal-length individuals.
#[derive(Debug, Clone)]
pub struct Population {
    members: Vec<Individual>,
}

impl Population {
    /// Fills `size` slots with copies of `seed`.
    ///
    /// Returns `None` when `size` is zero.
    pub fn replicate(seed: &Individual, size: usize) -> Option<Self> {
        if size == 0 {
            return None;
        }
        Some(Self {
            members: vec![seed.clone(); size],
        })
    }

    /// Builds a population from explicit members.
    ///
    /// Returns `None` if `members` is empty or lengths differ.
    pub fn from_members(members: Vec<Individual>) -> Option<Self> {
        let len = members.first()?.len();
        if members.iter().any(|m| m.len() != len) {
            return None;
        }
        Some(Self { members })
    }

    /// Number of slots. Always at least 1.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Individual> {
        self.members.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, Individual> {
        self.members.iter_mut()
    }

    /// Overwrites every slot with a copy of the individual at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn collapse_to(&mut self, index: usize) {
        let best = self.members[index].clone();
        for slot in self.members.iter_mut() {
            slot.clone_from(&best);
        }
    }
}

impl std::ops::Index<usize> for Population {
    type Output = Individual;

    fn index(&self, index: usize) -> &Individual {
        &self.members[index]
    }
}
