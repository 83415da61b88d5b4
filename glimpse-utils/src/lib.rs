mod iterator;
mod program;
mod shell;

pub use iterator::*;
pub use program::*;
pub use shell::*;
