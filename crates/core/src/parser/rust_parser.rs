use crate::error::{Error, Result};
use tree_sitter::{Parser, Tree};

pub struct RustParser {
    parser: Parser,
}

impl RustParser {
    pub fn new() -> Result<Self> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_rust::LANGUAGE.into())
            .map_err(|e| Error::TreeSitterError(format!("Failed to set language: {e}")))?;
        Ok(Self { parser })
    }

    pub fn parse(&mut self, source: &str) -> Result<Tree> {
        self.parser
            .parse(source, None)
            .ok_or_else(|| Error::ParseError("Failed to parse source code".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parser_creation() {
        let parser = RustParser::new();
        assert!(parser.is_ok());
    }

    #[test]
    fn test_basic_parsing() {
        let mut parser = RustParser::new().unwrap();
        let source = r#"
use playgrounds::playground;

playground!("hello", {
    println!("Hello, world!");
});
"#;
        let tree = parser.parse(source).unwrap();
        assert_eq!(tree.root_node().kind(), "source_file");
        assert!(!tree.root_node().has_error());
    }

    #[test]
    fn test_parse_empty_source() {
        let mut parser = RustParser::new().unwrap();
        let tree = parser.parse("");
        assert!(tree.is_ok());
    }

    #[test]
    fn test_parse_invalid_syntax() {
        let mut parser = RustParser::new().unwrap();
        let source = "fn main() { let x = ; }"; // Invalid syntax
        let tree = parser.parse(source).unwrap();
        // Tree-sitter still parses invalid syntax, creating error nodes
        assert!(tree.root_node().has_error());
    }
}
