//! Row types for every table, plus the validated inputs the write paths accept.

pub mod inventory;
pub mod kanji;
pub mod sensor;

pub use inventory::*;
pub use kanji::*;
pub use sensor::*;
