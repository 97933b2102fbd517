//! Dice - the only source of randomness in a simulation
//!
//! Every outcome of a character's life is a function of the seed and the
//! order of calls made here. Call order is part of the contract: tests replay
//! fixed face sequences and expect identical sheets.

pub mod frequency;
pub mod source;

pub use frequency::FrequencyTable;
pub use source::{RollSource, ScriptedSource, SeededSource};

/// The 2d6 result a precheck pretends was rolled
pub const PRECHECK_ROLL: i32 = 8;

pub struct Dice {
    source: Box<dyn RollSource>,
    draws: u64,
}

impl Dice {
    pub fn new(source: Box<dyn RollSource>) -> Self {
        Self { source, draws: 0 }
    }

    /// Dice backed by a seeded ChaCha stream
    pub fn seeded(seed: u64) -> Self {
        Self::new(Box::new(SeededSource::new(seed)))
    }

    /// Dice that replay the given faces in order
    pub fn scripted(faces: Vec<u32>) -> Self {
        Self::new(Box::new(ScriptedSource::new(faces)))
    }

    /// Number of raw die faces drawn so far
    pub fn draws(&self) -> u64 {
        self.draws
    }

    /// Roll one die with the given number of sides
    pub fn d(&mut self, sides: u32) -> i32 {
        self.draws += 1;
        self.source.roll(sides.max(1)) as i32
    }

    /// Sum of `count` dice with the given number of sides
    pub fn d_n(&mut self, count: u32, sides: u32) -> i32 {
        (0..count).map(|_| self.d(sides)).sum()
    }

    /// 2d6 + dm >= target
    pub fn roll_high(&mut self, dm: i32, target: i32) -> bool {
        self.d_n(2, 6) + dm >= target
    }

    /// Like `roll_high`, but a precheck uses `PRECHECK_ROLL` and draws nothing
    pub fn roll_high_check(&mut self, dm: i32, target: i32, is_precheck: bool) -> bool {
        if is_precheck {
            return PRECHECK_ROLL + dm >= target;
        }
        self.roll_high(dm, target)
    }

    /// Uniform coin flip
    pub fn next_bool(&mut self) -> bool {
        self.d(2) == 1
    }

    /// Uniformly choose one element; an empty slice draws nothing
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let index = self.d(items.len() as u32) as usize - 1;
        items.get(index)
    }

    /// Uniformly choose an index into a collection of `len` items
    pub fn choose_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.d(len as u32) as usize - 1)
    }

    /// Remove and return one element, so repeated picks never repeat
    pub fn pick<T>(&mut self, items: &mut Vec<T>) -> Option<T> {
        let index = self.choose_index(items.len())?;
        Some(items.remove(index))
    }
}

impl std::fmt::Debug for Dice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dice").field("draws", &self.draws).finish()
    }
}
