//! Discovery of `playground!` markers in a syntax tree

pub mod marker_scanner;

pub use marker_scanner::{MarkerScanner, SyntaxKind};
