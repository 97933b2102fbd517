//! Raw roll sources behind `Dice`
//!
//! Production runs use a seeded ChaCha stream; tests replay a fixed script
//! of die faces so a term can be driven through an exact branch.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// One uniform die face per call.
pub trait RollSource: Send {
    /// Return a value in `[1, sides]`. `sides` is never zero.
    fn roll(&mut self, sides: u32) -> u32;
}

/// Deterministic stream seeded by the caller
#[derive(Debug, Clone)]
pub struct SeededSource {
    rng: ChaCha8Rng,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl RollSource for SeededSource {
    fn roll(&mut self, sides: u32) -> u32 {
        self.rng.gen_range(1..=sides)
    }
}

/// Replays a fixed sequence of faces, cycling when it runs out.
///
/// Faces outside `[1, sides]` are clamped into range, so a script of
/// sixes also works as "maximum" for a d4.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    faces: Vec<u32>,
    index: usize,
}

impl ScriptedSource {
    pub fn new(faces: Vec<u32>) -> Self {
        let faces = if faces.is_empty() { vec![1] } else { faces };
        Self { faces, index: 0 }
    }
}

impl RollSource for ScriptedSource {
    fn roll(&mut self, sides: u32) -> u32 {
        let face = self.faces[self.index % self.faces.len()];
        self.index += 1;
        face.clamp(1, sides)
    }
}
