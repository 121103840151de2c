pub mod init;
pub mod lenses;
pub mod list;

pub use init::init_command;
pub use lenses::lenses_command;
pub use list::list_command;
