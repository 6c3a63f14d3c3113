//! Pure aggregation logic — no I/O.  Routes fetch, the engine reshapes.

pub mod flip;
pub mod herblore;
pub mod recipes;
pub mod skill;
