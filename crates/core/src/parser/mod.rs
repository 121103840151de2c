//! Rust source parsing with tree-sitter

pub mod literal;
pub mod rust_parser;
pub mod syntax_tree;
pub mod utils;

// Re-export commonly used items
pub use literal::string_literal_value;
pub use rust_parser::RustParser;
pub use syntax_tree::SyntaxTreeManager;
pub use utils::{content_range, node_text};
