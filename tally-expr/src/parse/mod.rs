pub mod ast;
pub mod error;
mod input;
pub mod parser;
mod pretty;

pub use error::{Error, ErrorKind, Result};
pub use parser::Parser;
