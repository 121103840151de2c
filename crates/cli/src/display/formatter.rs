use lsp_types::CodeLens;
use playground_lens_core::PlaygroundItem;
use serde::Serialize;
use serde_json::Value;

/// A code lens flattened for printing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LensSummary {
    /// 1-based line of the lens anchor
    pub line: u32,
    /// 1-based UTF-16 column of the lens anchor
    pub column: u32,
    pub title: String,
    pub command: String,
    pub arguments: Vec<Value>,
}

impl LensSummary {
    pub fn from_lens(lens: &CodeLens) -> Option<Self> {
        let command = lens.command.as_ref()?;
        Some(Self {
            line: lens.range.start.line + 1,
            column: lens.range.start.character + 1,
            title: command.title.clone(),
            command: command.command.clone(),
            arguments: command.arguments.clone().unwrap_or_default(),
        })
    }
}

pub fn print_playgrounds(filepath: &str, items: &[PlaygroundItem]) {
    println!("🔍 Playgrounds in: {}", filepath);
    println!("{}", "=".repeat(80));

    if items.is_empty() {
        println!("\nNo playgrounds found");
        return;
    }

    for item in items {
        let range = item.location.range;
        print!("\n🛝 {}", item.id);
        if let Some(label) = &item.label {
            print!(" \"{}\"", label);
        }
        println!();
        println!(
            "   📏 Scope: lines {}-{}",
            range.start.line + 1,
            range.end.line + 1
        );
    }

    println!("\n{} playground(s)", items.len());
}

pub fn print_lenses(target: &str, lenses: &[LensSummary]) {
    println!("🔍 Code lenses for: {}", target);
    println!("{}", "=".repeat(80));

    if lenses.is_empty() {
        println!("\nNo code lenses");
        return;
    }

    println!();
    for lens in lenses {
        println!(
            "{:>5}:{:<4} {}  ({})",
            lens.line, lens.column, lens.title, lens.command
        );
    }
}
