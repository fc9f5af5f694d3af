//! Core domain types for hangman
//!
//! This module contains the fundamental domain types with no I/O and no
//! randomness. All types here are pure and directly testable.

mod blanks;
mod word;

pub use blanks::{Blanks, PLACEHOLDER};
pub use word::{Word, WordError};
