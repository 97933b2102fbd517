//! Lifepath - career term simulation for tabletop character generation
//!
//! A character is rolled up, then driven through careers one term at a
//! time: qualification, training, survival, events, advancement and finally
//! mustering out. Careers are plain data; a single engine interprets them.

pub mod builder;
pub mod career;
pub mod character;
pub mod core;
pub mod dice;
pub mod engine;
pub mod skills;
