//! Die and roll outcomes.

use serde::{Deserialize, Serialize};

use crate::core::RandomSource;

/// What one die says to do with one chip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Pass to the neighbor on the left.
    Left,
    /// Pass to the neighbor on the right.
    Right,
    /// Pass across the table, or to the pot.
    Center,
    /// A dot: keep the chip.
    Keep,
}

impl Outcome {
    /// Map a face in `0..6` to its outcome.
    ///
    /// Faces 3, 4 and 5 are dots.
    #[must_use]
    pub const fn from_face(face: u8) -> Self {
        match face {
            0 => Outcome::Left,
            1 => Outcome::Right,
            2 => Outcome::Center,
            _ => Outcome::Keep,
        }
    }

    /// Whether this outcome moves a chip.
    #[must_use]
    pub const fn passes_chip(self) -> bool {
        !matches!(self, Outcome::Keep)
    }
}

/// A die backed by an exclusively owned randomness source.
#[derive(Clone, Debug)]
pub struct Die<R> {
    source: R,
}

impl<R: RandomSource> Die<R> {
    /// Wrap a randomness source.
    pub fn new(source: R) -> Self {
        Self { source }
    }

    /// Roll once.
    pub fn roll(&mut self) -> Outcome {
        Outcome::from_face(self.source.roll_face())
    }

    /// Flip a fair coin from the same source.
    pub fn flip(&mut self) -> bool {
        self.source.flip()
    }

    /// Borrow the underlying source.
    pub fn source(&self) -> &R {
        &self.source
    }
}
