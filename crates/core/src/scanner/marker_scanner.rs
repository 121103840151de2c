use crate::{
    cancellation::CancellationToken,
    config::{GatePolicy, ScanOptions},
    error::Result,
    parser::{
        string_literal_value,
        utils::{content_range, first_named_significant_child, node_text},
    },
    types::MarkerMatch,
};
use tracing::{debug, trace};
use tree_sitter::{Node, Tree};

/// The node kinds the scanner cares about. Everything else is only walked through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxKind {
    /// `use ...;` or `extern crate ...;`
    ImportDeclaration,
    /// `name!(...)`, `name![...]` or `name! {...}`
    MacroInvocation,
    Other,
}

impl SyntaxKind {
    pub fn of(node: &Node) -> Self {
        match node.kind() {
            "use_declaration" | "extern_crate_declaration" => SyntaxKind::ImportDeclaration,
            "macro_invocation" => SyntaxKind::MacroInvocation,
            _ => SyntaxKind::Other,
        }
    }
}

/// Per-scan state. Built fresh for every call so concurrent scans never share it.
#[derive(Debug, Default)]
struct ScanState {
    import_seen: bool,
    matches: Vec<MarkerMatch>,
}

/// Finds `playground!` invocations in a syntax tree.
pub struct MarkerScanner {
    options: ScanOptions,
}

impl MarkerScanner {
    pub fn new(options: ScanOptions) -> Self {
        Self { options }
    }

    pub fn scan(
        &self,
        tree: &Tree,
        source: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<MarkerMatch>> {
        self.scan_node(tree.root_node(), source, cancel)
    }

    /// Walk `root` once in pre-order and return the accepted markers in
    /// source order.
    pub fn scan_node(
        &self,
        root: Node,
        source: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<MarkerMatch>> {
        cancel.check()?;

        let mut state = ScanState::default();
        let mut cursor = root.walk();

        'walk: loop {
            let node = cursor.node();
            let descend = match SyntaxKind::of(&node) {
                SyntaxKind::ImportDeclaration => {
                    if !state.import_seen && self.opts_in(&node, source) {
                        trace!(
                            "Found `{}` import at byte {}",
                            self.options.import_name,
                            node.start_byte()
                        );
                        state.import_seen = true;
                    }
                    false
                }
                SyntaxKind::MacroInvocation => {
                    cancel.check()?;
                    if let Some(marker) = self.match_marker(&node, source) {
                        let gated_out =
                            self.options.gate_policy == GatePolicy::BeforeUse && !state.import_seen;
                        if gated_out {
                            trace!(
                                "Ignoring marker at byte {} before the `{}` import",
                                marker.range.start,
                                self.options.import_name
                            );
                        } else {
                            state.matches.push(marker);
                        }
                    }
                    false
                }
                SyntaxKind::Other => true,
            };

            if descend && cursor.goto_first_child() {
                continue;
            }
            while !cursor.goto_next_sibling() {
                if !cursor.goto_parent() {
                    break 'walk;
                }
            }
        }

        if !state.import_seen {
            debug!(
                "No `{}` import; dropping {} candidate marker(s)",
                self.options.import_name,
                state.matches.len()
            );
            return Ok(Vec::new());
        }

        debug!("Found {} marker(s)", state.matches.len());
        Ok(state.matches)
    }

    /// Whether an import declaration names the gating crate in any path segment
    fn opts_in(&self, declaration: &Node, source: &str) -> bool {
        let mut components = Vec::new();
        match declaration.kind() {
            "extern_crate_declaration" => {
                if let Some(name) = declaration.child_by_field_name("name") {
                    components.push(name);
                }
            }
            _ => {
                if let Some(argument) = declaration.child_by_field_name("argument") {
                    collect_use_path_components(argument, &mut components);
                }
            }
        }

        components
            .iter()
            .any(|component| node_text(component, source) == self.options.import_name)
    }

    fn match_marker(&self, invocation: &Node, source: &str) -> Option<MarkerMatch> {
        let name = invocation.child_by_field_name("macro")?;
        // `path::playground!` is a different macro as far as we are concerned
        if name.kind() != "identifier" || node_text(&name, source) != self.options.macro_name {
            return None;
        }

        let mut cursor = invocation.walk();
        let label = invocation
            .named_children(&mut cursor)
            .find(|child| child.kind() == "token_tree")
            .and_then(|arguments| first_argument_label(&arguments, source));

        Some(MarkerMatch::new(content_range(invocation), label))
    }
}

/// Path segments of a `use` argument. Aliases (`as name`) are not segments.
fn collect_use_path_components<'tree>(node: Node<'tree>, out: &mut Vec<Node<'tree>>) {
    match node.kind() {
        "identifier" | "crate" | "self" | "super" => out.push(node),
        "scoped_identifier" | "scoped_use_list" => {
            if let Some(path) = node.child_by_field_name("path") {
                collect_use_path_components(path, out);
            }
            let tail = node
                .child_by_field_name("name")
                .or_else(|| node.child_by_field_name("list"));
            if let Some(tail) = tail {
                collect_use_path_components(tail, out);
            }
        }
        "use_as_clause" => {
            if let Some(path) = node.child_by_field_name("path") {
                collect_use_path_components(path, out);
            }
        }
        "use_list" | "use_wildcard" => {
            let mut cursor = node.walk();
            for child in node.named_children(&mut cursor) {
                if !child.is_extra() {
                    collect_use_path_components(child, out);
                }
            }
        }
        _ => {}
    }
}

/// The label of a marker: its first argument, when that argument is nothing
/// but a plain string literal.
fn first_argument_label(arguments: &Node, source: &str) -> Option<String> {
    let first = first_named_significant_child(arguments)?;
    if !matches!(first.kind(), "string_literal" | "raw_string_literal") || first.has_error() {
        return None;
    }

    // Only comments may sit between the opening delimiter and the literal
    let opening = arguments.child(0)?;
    if significant_sibling(first, Node::prev_sibling)? != opening {
        return None;
    }

    // ...and the literal must end the argument
    let after = significant_sibling(first, Node::next_sibling)?;
    let mut cursor = arguments.walk();
    let closing = arguments.children(&mut cursor).last()?;
    if after.kind() != "," && after != closing {
        return None;
    }

    string_literal_value(node_text(&first, source))
}

/// The nearest sibling in `step` direction that is not a comment
fn significant_sibling<'tree>(
    node: Node<'tree>,
    step: fn(&Node<'tree>) -> Option<Node<'tree>>,
) -> Option<Node<'tree>> {
    let mut current = step(&node)?;
    while current.is_extra() {
        current = step(&current)?;
    }
    Some(current)
}
