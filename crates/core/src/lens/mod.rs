//! Code lens assembly

pub mod assembler;

pub use assembler::assemble;
