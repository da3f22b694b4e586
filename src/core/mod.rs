pub mod free_vars;

pub use free_vars::{closed, free_vars, FreeVariables};
