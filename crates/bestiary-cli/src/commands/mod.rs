//! Command implementations.

mod extract;
mod import;
mod process;
mod status;

pub use extract::execute_extract;
pub use import::execute_import;
pub use process::execute_process;
pub use status::execute_status;
