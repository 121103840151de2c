//! Document text, versions and position translation

pub mod line_table;
pub mod snapshot;
pub mod store;

pub use line_table::LineTable;
pub use snapshot::DocumentSnapshot;
pub use store::DocumentStore;
