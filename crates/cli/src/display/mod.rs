pub mod formatter;

pub use formatter::{LensSummary, print_lenses, print_playgrounds};
