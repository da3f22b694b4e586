pub mod interp;
pub mod machine;
pub mod print;
pub mod scope;
pub mod value;


pub use interp::{run_source, Interpreter};
pub use machine::Machine;
pub use print::Expander;
pub use scope::{Frame, Scope};
pub use value::Closure;
