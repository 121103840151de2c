pub mod document;
pub mod parser;

pub use document::{OpenDocument, open_document};
pub use parser::{LineSpan, parse_filepath_with_lines};
