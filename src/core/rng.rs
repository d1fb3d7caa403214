//! Randomness sources for the table.
//!
//! ## Key Features
//!
//! - **Injectable**: the engine only sees the `RandomSource` trait
//! - **Deterministic**: same seed produces identical games
//! - **Forkable**: independent streams for parallel batch workers
//! - **Scriptable**: `ScriptedSource` replays exact faces for traces
//!
//! ```
//! use lrc_sim::core::{GameRng, RandomSource};
//!
//! let mut rng = GameRng::new(42);
//! let mut worker = rng.fork();
//!
//! // Forks are deterministic: same seed, same fork order, same stream
//! let mut rng2 = GameRng::new(42);
//! let mut worker2 = rng2.fork();
//! assert_eq!(worker.roll_face(), worker2.roll_face());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Number of equally likely faces on an LRC die.
pub const DIE_FACES: u8 = 6;

/// The entropy seam between the engine and whatever produces randomness.
///
/// Implementors must be exclusively owned by one engine at a time; the
/// engine makes no threading guarantees of its own.
pub trait RandomSource {
    /// Draw a face uniformly from `0..DIE_FACES`.
    fn roll_face(&mut self) -> u8;

    /// Draw a fair coin.
    fn flip(&mut self) -> bool;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn roll_face(&mut self) -> u8 {
        (**self).roll_face()
    }

    fn flip(&mut self) -> bool {
        (**self).flip()
    }
}

/// Seedable RNG with forking for parallel batches.
///
/// Uses ChaCha8 for speed while keeping a well-distributed stream.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence, so a batch
    /// split into chunks gets the same streams regardless of scheduling.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }
}

impl RandomSource for GameRng {
    fn roll_face(&mut self) -> u8 {
        self.inner.gen_range(0..DIE_FACES)
    }

    fn flip(&mut self) -> bool {
        self.inner.gen_bool(0.5)
    }
}

/// Replays a fixed script of faces and coin flips.
///
/// Both scripts cycle once exhausted, so a short script can drive a whole
/// game. An empty face script rolls Keep (face 3) forever and an empty flip
/// script always answers `false`.
#[derive(Clone, Debug, Default)]
pub struct ScriptedSource {
    faces: Vec<u8>,
    flips: Vec<bool>,
    face_pos: usize,
    flip_pos: usize,
}

impl ScriptedSource {
    /// Create a source that replays `faces`.
    ///
    /// Faces outside `0..DIE_FACES` are reduced modulo the face count.
    pub fn new(faces: impl Into<Vec<u8>>) -> Self {
        Self {
            faces: faces.into(),
            ..Self::default()
        }
    }

    /// Set the coin flips replayed for RandomPick decisions.
    #[must_use]
    pub fn with_flips(mut self, flips: impl Into<Vec<bool>>) -> Self {
        self.flips = flips.into();
        self
    }

    /// Number of faces drawn so far.
    #[must_use]
    pub fn faces_drawn(&self) -> usize {
        self.face_pos
    }

    /// Number of coin flips drawn so far.
    #[must_use]
    pub fn flips_drawn(&self) -> usize {
        self.flip_pos
    }
}

impl RandomSource for ScriptedSource {
    fn roll_face(&mut self) -> u8 {
        let face = if self.faces.is_empty() {
            3
        } else {
            self.faces[self.face_pos % self.faces.len()] % DIE_FACES
        };
        self.face_pos += 1;
        face
    }

    fn flip(&mut self) -> bool {
        let flip = if self.flips.is_empty() {
            false
        } else {
            self.flips[self.flip_pos % self.flips.len()]
        };
        self.flip_pos += 1;
        flip
    }
}
